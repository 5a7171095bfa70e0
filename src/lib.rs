//! Base16 (hex) encoding and decoding over configurable 16-symbol alphabets.
//!
//! Two standard codecs are provided, [`LOWER`] (`0-9a-f`) and [`UPPER`] (`0-9A-F`).
//! Any other alphabet of 16 symbols that are distinct ignoring ASCII case can be used
//! through [`Codec::new`] (checked at compile time in a `const` item) or
//! [`Codec::try_new`] (checked at run time).
//!
//! Every encoder and decoder offers the same four shapes of call:
//!
//! | shape          | encode                          | decode                          |
//! |----------------|---------------------------------|---------------------------------|
//! | caller buffer  | [`Encoder::encode`]             | [`Decoder::decode`]             |
//! | allocating     | [`Encoder::encode_vec`]         | [`Decoder::decode_vec`]         |
//! | constant       | [`Encoder::encode_array`]       | [`Decoder::decode_array`]       |
//! | sink           | [`Encoder::encode_to_sink`]     | [`Decoder::decode_to_sink`]     |
//!
//! # Example
//!
//! ```
//! use hexd::{DecodeOptions, LOWER, UPPER};
//!
//! let encoded = UPPER.encode_to_string(b"hexd").unwrap();
//! assert_eq!(encoded, "68657864");
//!
//! // Either case is accepted unless decoding strictly
//! assert_eq!(LOWER.decode_vec("6865786A", DecodeOptions::default()).unwrap(), b"hexj");
//! assert!(LOWER.decode_vec("6865786A", DecodeOptions::strict()).is_err());
//! ```

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::alphabet::Alphabet;
pub use crate::core::config::{
    AlphabetConfig, AlphabetRegistry, FALLBACK_ALPHABET, LOCAL_OVERRIDE_FILE, RegistryError, Settings,
    find_closest_alphabet,
};
pub use crate::core::lookup::DecodeTable;
pub use encoders::codec::{Codec, LOWER, UPPER};
pub use encoders::decoder::{DecodeOptions, Decoder};
pub use encoders::encoder::{Encoder, HexDisplay};
pub use encoders::errors::{AlphabetError, DecodeError, EncodeError, SinkError};
pub use encoders::sink::{IoSink, Sink, SinkFull, SliceSink};

/// Encodes `data` as lower-case hex.
///
/// ```
/// assert_eq!(hexd::encode(b"\x01\xff"), "01ff");
/// ```
pub fn encode(data: impl AsRef<[u8]>) -> String {
    LOWER.encoder().display(data.as_ref()).to_string()
}

/// Decodes hex in either case.
///
/// ```
/// assert_eq!(hexd::decode("01Ff").unwrap(), [0x01, 0xFF]);
/// assert!(hexd::decode("0").is_err());
/// ```
pub fn decode(data: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    LOWER.decode_vec(data, DecodeOptions::default())
}

#[cfg(test)]
mod tests;
