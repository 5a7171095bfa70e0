use super::errors::{DecodeError, SinkError};
use super::sink::Sink;
use crate::core::alphabet::Alphabet;
use crate::core::lookup::DecodeTable;

/// Per-call decode settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Accept both cases of every alphabet symbol, checked symbol by symbol.
    /// When unset, only the exact configured symbols are accepted.
    pub mixed_case: bool,
}

impl DecodeOptions {
    /// Accept either case (the default).
    pub const MIXED: DecodeOptions = DecodeOptions { mixed_case: true };

    /// Accept only the exact configured symbols.
    pub const fn strict() -> Self {
        DecodeOptions { mixed_case: false }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::MIXED
    }
}

/// Turns pairs of symbols back into bytes.
///
/// Holds both reverse lookup tables for its alphabet, built once when the decoder
/// is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    alphabet: Alphabet,
    strict: DecodeTable,
    mixed: DecodeTable,
}

impl Decoder {
    pub const fn new(alphabet: Alphabet) -> Self {
        Decoder {
            strict: DecodeTable::build(&alphabet, false),
            mixed: DecodeTable::build(&alphabet, true),
            alphabet,
        }
    }

    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The lookup table used for `options`.
    pub const fn table(&self, options: DecodeOptions) -> &DecodeTable {
        if options.mixed_case {
            &self.mixed
        } else {
            &self.strict
        }
    }

    /// Number of bytes produced for `len` input symbols.
    ///
    /// Fails with [`DecodeError::InvalidLength`] if `len` is odd.
    pub const fn calc_size(&self, len: usize) -> Result<usize, DecodeError> {
        if len % 2 != 0 {
            return Err(DecodeError::InvalidLength { length: len });
        }
        Ok(len / 2)
    }

    /// Decodes `input` into the front of `output` and returns the written part.
    ///
    /// Stops at the first symbol outside the alphabet. Bytes decoded from earlier
    /// pairs are left in `output`; the failing pair and everything after it are not
    /// written.
    ///
    /// # Panics
    ///
    /// Panics if `output` is shorter than [`calc_size`](Self::calc_size) of the input.
    /// The length check runs first, so odd input is an error, not a panic.
    pub fn decode<'o>(
        &self,
        input: impl AsRef<[u8]>,
        output: &'o mut [u8],
        options: DecodeOptions,
    ) -> Result<&'o mut [u8], DecodeError> {
        let input = input.as_ref();
        let size = self.calc_size(input.len())?;
        assert!(
            output.len() >= size,
            "decode output buffer too small: need {} bytes, have {}",
            size,
            output.len()
        );

        let table = self.table(options);
        let output = &mut output[..size];
        for (index, (slot, pair)) in output.iter_mut().zip(input.chunks_exact(2)).enumerate() {
            *slot = decode_pair(table, pair[0], pair[1], index * 2)?;
        }
        Ok(output)
    }

    /// Decodes `input` into a freshly allocated buffer of exactly the required size.
    ///
    /// The length is validated before anything is allocated; the buffer is dropped if
    /// decoding fails.
    pub fn decode_vec(
        &self,
        input: impl AsRef<[u8]>,
        options: DecodeOptions,
    ) -> Result<Vec<u8>, DecodeError> {
        let input = input.as_ref();
        let size = self.calc_size(input.len())?;
        let mut output = Vec::new();
        output.try_reserve_exact(size)?;
        output.resize(size, 0);

        self.decode(input, &mut output, options)?;
        Ok(output)
    }

    /// Decodes a constant input. Usable in `const` items.
    ///
    /// ```
    /// use hexd::DecodeOptions;
    ///
    /// const MAGIC: [u8; 4] = match hexd::LOWER.decoder().decode_array(b"CAFEbabe", DecodeOptions::MIXED) {
    ///     Ok(bytes) => bytes,
    ///     Err(_) => panic!("not hex"),
    /// };
    /// assert_eq!(MAGIC, [0xCA, 0xFE, 0xBA, 0xBE]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics (a compile error in `const` context) unless `M == N / 2` for even `N`.
    pub const fn decode_array<const N: usize, const M: usize>(
        &self,
        input: &[u8; N],
        options: DecodeOptions,
    ) -> Result<[u8; M], DecodeError> {
        let size = match self.calc_size(N) {
            Ok(size) => size,
            Err(err) => return Err(err),
        };
        assert!(M == size, "decoded array must be exactly half the input length");

        let table = self.table(options);
        let mut output = [0u8; M];
        let mut i = 0;
        while i < M {
            output[i] = match decode_pair(table, input[i * 2], input[i * 2 + 1], i * 2) {
                Ok(byte) => byte,
                Err(err) => return Err(err),
            };
            i += 1;
        }
        Ok(output)
    }

    /// Pushes each decoded byte to `sink` in order.
    ///
    /// Odd-length input fails before anything reaches the sink. An invalid symbol or
    /// a sink failure is returned immediately; bytes already accepted stay in the sink.
    pub fn decode_to_sink<S: Sink + ?Sized>(
        &self,
        input: impl AsRef<[u8]>,
        sink: &mut S,
        options: DecodeOptions,
    ) -> Result<(), SinkError<S::Error>> {
        let input = input.as_ref();
        self.calc_size(input.len())?;

        let table = self.table(options);
        for (index, pair) in input.chunks_exact(2).enumerate() {
            let byte = decode_pair(table, pair[0], pair[1], index * 2)?;
            sink.put(byte).map_err(SinkError::Sink)?;
        }
        Ok(())
    }
}

/// Resolves one pair of symbols starting at `position` into a byte.
#[inline(always)]
const fn decode_pair(table: &DecodeTable, high: u8, low: u8, position: usize) -> Result<u8, DecodeError> {
    let Some(high_nibble) = table.get(high) else {
        return Err(DecodeError::InvalidByte {
            byte: high,
            position,
        });
    };
    let Some(low_nibble) = table.get(low) else {
        return Err(DecodeError::InvalidByte {
            byte: low,
            position: position + 1,
        });
    };
    Ok((high_nibble << 4) | low_nibble)
}
