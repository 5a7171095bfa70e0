use std::collections::TryReserveError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors that can occur while validating an alphabet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The alphabet does not hold exactly 16 symbols
    #[error("alphabet must contain exactly 16 symbols, found {actual}")]
    WrongLength { actual: usize },
    /// Two positions hold the same symbol once ASCII case is folded
    #[error(
        "duplicate symbol '{}' at positions {first} and {second} (symbols are compared case-insensitively)",
        .symbol.escape_ascii()
    )]
    DuplicateSymbol {
        symbol: u8,
        first: usize,
        second: usize,
    },
}

/// Errors that can occur during encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The output buffer could not be allocated
    #[error("failed to allocate encode buffer: {0}")]
    OutOfMemory(#[from] TryReserveError),
    /// The alphabet holds non-ASCII symbols and the output is not valid UTF-8
    #[error("encoded output is not valid UTF-8: {0}")]
    NotUtf8(#[from] FromUtf8Error),
}

/// Errors that can occur during decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input has an odd number of symbols
    #[error("invalid length for decode: input is {length} symbols, expected an even number")]
    InvalidLength { length: usize },
    /// The input contains a symbol that is not in the alphabet
    #[error("invalid symbol '{}' at position {position}", .byte.escape_ascii())]
    InvalidByte { byte: u8, position: usize },
    /// The output buffer could not be allocated
    #[error("failed to allocate decode buffer: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

/// Error returned by the sink-based decoder: either the input was bad or the sink refused
/// a byte.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError<E> {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("sink rejected output: {0}")]
    Sink(E),
}
