use super::errors::EncodeError;
use super::sink::Sink;
use crate::core::alphabet::Alphabet;
use std::fmt;

/// Turns bytes into two symbols each: high nibble first, then low nibble.
///
/// All variants share [`Encoder::encode_byte`]; they differ only in where the
/// symbols go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    alphabet: Alphabet,
}

impl Encoder {
    pub const fn new(alphabet: Alphabet) -> Self {
        Encoder { alphabet }
    }

    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of symbols produced for `len` input bytes.
    ///
    /// # Panics
    ///
    /// Panics if `2 * len` does not fit in a `usize`. No real input is that long.
    #[inline]
    pub const fn calc_size(&self, len: usize) -> usize {
        match len.checked_mul(2) {
            Some(size) => size,
            None => panic!("encoded size overflows usize"),
        }
    }

    /// The two symbols for one byte.
    #[inline(always)]
    pub const fn encode_byte(&self, byte: u8) -> [u8; 2] {
        [self.alphabet.symbol(byte >> 4), self.alphabet.symbol(byte & 0x0F)]
    }

    /// Encodes `input` into the front of `output` and returns the written part.
    ///
    /// # Panics
    ///
    /// Panics if `output` is shorter than [`calc_size`](Self::calc_size) of the input.
    /// Sizing the destination is the caller's job.
    pub fn encode<'o>(&self, input: &[u8], output: &'o mut [u8]) -> &'o mut [u8] {
        let size = self.calc_size(input.len());
        assert!(
            output.len() >= size,
            "encode output buffer too small: need {} bytes, have {}",
            size,
            output.len()
        );

        let output = &mut output[..size];
        for (pair, &byte) in output.chunks_exact_mut(2).zip(input) {
            pair.copy_from_slice(&self.encode_byte(byte));
        }
        output
    }

    /// Encodes `input` into a freshly allocated buffer of exactly the required size.
    pub fn encode_vec(&self, input: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let size = self.calc_size(input.len());
        let mut output = Vec::new();
        output.try_reserve_exact(size)?;
        output.resize(size, 0);

        self.encode(input, &mut output);
        Ok(output)
    }

    /// Like [`encode_vec`](Self::encode_vec), but returns text.
    ///
    /// Only fails for allocation, or when a custom alphabet holds non-ASCII symbols
    /// that do not form valid UTF-8.
    pub fn encode_to_string(&self, input: &[u8]) -> Result<String, EncodeError> {
        Ok(String::from_utf8(self.encode_vec(input)?)?)
    }

    /// Encodes a constant input. Usable in `const` items.
    ///
    /// ```
    /// const KIWI: [u8; 8] = hexd::LOWER.encoder().encode_array(b"kiwi");
    /// assert_eq!(&KIWI, b"6b697769");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics (a compile error in `const` context) unless `M == 2 * N`.
    pub const fn encode_array<const N: usize, const M: usize>(&self, input: &[u8; N]) -> [u8; M] {
        assert!(M == N * 2, "encoded array must be exactly twice the input length");

        let mut output = [0u8; M];
        let mut i = 0;
        while i < N {
            let [high, low] = self.encode_byte(input[i]);
            output[i * 2] = high;
            output[i * 2 + 1] = low;
            i += 1;
        }
        output
    }

    /// Pushes each symbol to `sink` in order.
    ///
    /// A sink failure is returned immediately; symbols already accepted are left in
    /// the sink.
    pub fn encode_to_sink<S: Sink + ?Sized>(&self, input: &[u8], sink: &mut S) -> Result<(), S::Error> {
        for &byte in input {
            let [high, low] = self.encode_byte(byte);
            sink.put(high)?;
            sink.put(low)?;
        }
        Ok(())
    }

    /// Lazily formats `input` as text, without an intermediate buffer.
    ///
    /// Symbols are written as `char::from(symbol)`, which matches the byte output
    /// for ASCII alphabets.
    pub fn display<'a>(&'a self, input: &'a [u8]) -> HexDisplay<'a> {
        HexDisplay {
            encoder: self,
            input,
        }
    }
}

/// Returned by [`Encoder::display`].
#[derive(Debug, Clone, Copy)]
pub struct HexDisplay<'a> {
    encoder: &'a Encoder,
    input: &'a [u8],
}

impl fmt::Display for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for &byte in self.input {
            let [high, low] = self.encoder.encode_byte(byte);
            f.write_char(char::from(high))?;
            f.write_char(char::from(low))?;
        }
        Ok(())
    }
}
