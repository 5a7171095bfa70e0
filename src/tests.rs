use crate::{DecodeError, DecodeOptions, LOWER, UPPER, decode, encode};

const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog !?";
const FOX_LOWER: &str = "54686520717569636b2062726f776e20666f78206a756d7073206f76657220746865206c617a7920646f6720213f";
const FOX_MIXED: &str = "54686520717569636B2062726f776e20666F78206a756D7073206F76657220746865206c617A7920646f6720213f";

#[test]
fn test_encode_lower_sentence() {
    assert_eq!(FOX.len(), 46);
    let encoded = LOWER.encode_to_string(FOX).unwrap();
    assert_eq!(encoded, FOX_LOWER);
    assert_eq!(LOWER.encoder().calc_size(FOX.len()), encoded.len());
}

#[test]
fn test_encode_upper_sentence() {
    let encoded = UPPER.encode_to_string(FOX).unwrap();
    assert_eq!(encoded, FOX_LOWER.to_ascii_uppercase());
    assert!(encoded.contains("636B2062726F776E"));
}

#[test]
fn test_decode_mixed_case_sentence_with_both_codecs() {
    for codec in [LOWER, UPPER] {
        let decoded = codec.decode_vec(FOX_MIXED, DecodeOptions::default()).unwrap();
        assert_eq!(decoded, FOX);
    }
}

#[test]
fn test_decode_mixed_case_sentence_strict_fails() {
    // first upper-case letter is the 'B' at offset 17
    assert_eq!(
        LOWER.decode_vec(FOX_MIXED, DecodeOptions::strict()),
        Err(DecodeError::InvalidByte {
            byte: b'B',
            position: 17,
        })
    );
    // first lower-case letter is the 'f' at offset 25
    assert_eq!(
        UPPER.decode_vec(FOX_MIXED, DecodeOptions::strict()),
        Err(DecodeError::InvalidByte {
            byte: b'f',
            position: 25,
        })
    );
}

#[test]
fn test_decode_calc_size() {
    let codec = LOWER;
    assert_eq!(codec.decoder().calc_size(96), Ok(48));
    assert_eq!(
        codec.decoder().calc_size(95),
        Err(DecodeError::InvalidLength { length: 95 })
    );
}

#[test]
fn test_decode_non_hex_symbols() {
    assert_eq!(
        decode("zz"),
        Err(DecodeError::InvalidByte {
            byte: b'z',
            position: 0,
        })
    );
    assert_eq!(
        decode("0g"),
        Err(DecodeError::InvalidByte {
            byte: b'g',
            position: 1,
        })
    );
    assert_eq!(
        decode("!0"),
        Err(DecodeError::InvalidByte {
            byte: b'!',
            position: 0,
        })
    );
}

#[test]
fn test_decode_odd_length() {
    assert_eq!(decode("abc"), Err(DecodeError::InvalidLength { length: 3 }));
    assert_eq!(
        decode(&FOX_LOWER[1..]),
        Err(DecodeError::InvalidLength { length: 91 })
    );
}

#[test]
fn test_top_level_round_trip() {
    let data: Vec<u8> = (0..=255).collect();
    let encoded = encode(&data);
    assert_eq!(encoded.len(), 512);
    assert_eq!(decode(&encoded).unwrap(), data);
}

#[test]
fn test_encode_decode_empty() {
    assert_eq!(encode(b""), "");
    assert_eq!(decode("").unwrap(), b"");
}

#[test]
fn test_all_four_decode_shapes_agree() {
    let mut buf = [0u8; 46];
    let sized = LOWER
        .decoder()
        .decode(FOX_MIXED, &mut buf, DecodeOptions::default())
        .unwrap()
        .to_vec();

    let allocated = LOWER.decode_vec(FOX_MIXED, DecodeOptions::default()).unwrap();

    let mut sink = Vec::new();
    LOWER
        .decoder()
        .decode_to_sink(FOX_MIXED, &mut sink, DecodeOptions::default())
        .unwrap();

    const HELLO: [u8; 5] = match LOWER.decoder().decode_array(b"48656C6C6F", DecodeOptions::MIXED) {
        Ok(bytes) => bytes,
        Err(_) => panic!("invalid hex"),
    };

    assert_eq!(sized, FOX);
    assert_eq!(allocated, FOX);
    assert_eq!(sink, FOX);
    assert_eq!(&HELLO, b"Hello");
}
