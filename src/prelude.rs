//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use hexd::prelude::*;
//!
//! let bytes = UPPER.decode_vec("c0ffee", DecodeOptions::default()).unwrap();
//! assert_eq!(encode(&bytes), "c0ffee");
//! ```

pub use crate::{
    // Configuration
    AlphabetRegistry,

    // Codec building blocks
    Alphabet,
    Codec,
    DecodeOptions,
    Decoder,
    Encoder,
    LOWER,
    UPPER,

    // Sinks
    IoSink,
    Sink,
    SliceSink,

    // Errors
    AlphabetError,
    DecodeError,
    EncodeError,
    RegistryError,
    SinkError,

    // Convenience functions
    decode,
    encode,
};
