use super::decoder::{DecodeOptions, Decoder};
use super::encoder::Encoder;
use super::errors::{AlphabetError, DecodeError, EncodeError};
use crate::core::alphabet::Alphabet;

/// Lower-case hex: `0-9a-f`.
pub const LOWER: Codec = Codec::new(Alphabet::LOWER);

/// Upper-case hex: `0-9A-F`.
pub const UPPER: Codec = Codec::new(Alphabet::UPPER);

/// An [`Encoder`] and a [`Decoder`] over the same alphabet.
///
/// Define your own with a `const` item to get compile-time alphabet validation:
///
/// ```
/// use hexd::{Alphabet, Codec, DecodeOptions};
///
/// // YubiKey "modhex"
/// const MODHEX: Codec = Codec::new(Alphabet::new(*b"cbdefghijklnrtuv"));
///
/// let encoded = MODHEX.encode_to_string(&[0x00, 0xFF]).unwrap();
/// assert_eq!(encoded, "ccvv");
/// assert_eq!(MODHEX.decode_vec("CCVV", DecodeOptions::default()).unwrap(), [0x00, 0xFF]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    encoder: Encoder,
    decoder: Decoder,
}

impl Codec {
    pub const fn new(alphabet: Alphabet) -> Self {
        Codec {
            encoder: Encoder::new(alphabet),
            decoder: Decoder::new(alphabet),
        }
    }

    /// Builds a codec from an alphabet only known at run time.
    pub fn try_new(symbols: &[u8]) -> Result<Self, AlphabetError> {
        Ok(Self::new(Alphabet::try_new(symbols)?))
    }

    pub const fn alphabet(&self) -> &Alphabet {
        self.encoder.alphabet()
    }

    pub const fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub const fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Shorthand for [`Encoder::encode_to_string`].
    pub fn encode_to_string(&self, input: &[u8]) -> Result<String, EncodeError> {
        self.encoder.encode_to_string(input)
    }

    /// Shorthand for [`Decoder::decode_vec`].
    pub fn decode_vec(
        &self,
        input: impl AsRef<[u8]>,
        options: DecodeOptions,
    ) -> Result<Vec<u8>, DecodeError> {
        self.decoder.decode_vec(input, options)
    }
}
