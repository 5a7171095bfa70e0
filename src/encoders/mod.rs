pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod sink;

