//! Reverse lookup from input symbol to nibble value.

use super::alphabet::Alphabet;
use std::fmt;

/// A 256-entry table mapping every possible input byte to its nibble, or to
/// [`DecodeTable::INVALID`] when the byte is not part of the alphabet.
///
/// Tables are derived from an [`Alphabet`] and a case mode and are never mutated
/// afterwards. Building one is a `const fn`, so the tables of the standard codecs
/// live in read-only data.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DecodeTable([u8; 256]);

impl DecodeTable {
    /// Marker for bytes that do not belong to the alphabet.
    pub const INVALID: u8 = 0xFF;

    /// Builds the table for `alphabet`.
    ///
    /// With `mixed_case` set, both the lower- and upper-case form of each symbol map
    /// to the same nibble. Otherwise only the exact configured symbols are accepted.
    pub const fn build(alphabet: &Alphabet, mixed_case: bool) -> Self {
        let mut table = [Self::INVALID; 256];
        let symbols = alphabet.symbols();

        let mut nibble = 0;
        while nibble < symbols.len() {
            let symbol = symbols[nibble];
            if mixed_case {
                table[symbol.to_ascii_lowercase() as usize] = nibble as u8;
                table[symbol.to_ascii_uppercase() as usize] = nibble as u8;
            } else {
                table[symbol as usize] = nibble as u8;
            }
            nibble += 1;
        }

        DecodeTable(table)
    }

    /// Looks up the nibble for `symbol`.
    #[inline(always)]
    pub const fn get(&self, symbol: u8) -> Option<u8> {
        match self.0[symbol as usize] {
            Self::INVALID => None,
            nibble => Some(nibble),
        }
    }

    /// Raw table contents, indexed by input byte.
    pub const fn as_array(&self) -> &[u8; 256] {
        &self.0
    }

    /// Number of input bytes that map to a nibble.
    pub fn accepted(&self) -> usize {
        self.0.iter().filter(|&&v| v != Self::INVALID).count()
    }
}

impl fmt::Debug for DecodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeTable")
            .field("accepted", &self.accepted())
            .finish()
    }
}
