use crate::encoders::errors::AlphabetError;
use std::fmt;

/// An ordered set of 16 symbols, where the symbol at position `i` encodes the nibble `i`.
///
/// Symbols are compared case-insensitively (ASCII case folding) when checking for
/// duplicates, so an alphabet can never hold both `'a'` and `'A'`. This is what lets a
/// decoder accept either case of every symbol without ambiguity.
///
/// Alphabets built with [`Alphabet::new`] inside a `const` item are validated at compile
/// time. Alphabets that come from configuration go through [`Alphabet::try_new`].
///
/// ```compile_fail
/// use hexd::Alphabet;
///
/// // 'a' and 'A' collide once case is folded
/// const BROKEN: Alphabet = Alphabet::new(*b"0123456789abcdeA");
///
/// fn main() {
///     let _ = BROKEN.symbols();
/// }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: [u8; 16],
}

impl Alphabet {
    /// Lower-case hex digits: `0-9a-f`.
    pub const LOWER: Alphabet = Alphabet::new(*b"0123456789abcdef");

    /// Upper-case hex digits: `0-9A-F`.
    pub const UPPER: Alphabet = Alphabet::new(*b"0123456789ABCDEF");

    /// Creates an alphabet, panicking if two symbols collide case-insensitively.
    ///
    /// In a `const` context the panic surfaces as a compile error, so a misconfigured
    /// alphabet never makes it into a binary.
    pub const fn new(symbols: [u8; 16]) -> Self {
        if let Some((first, second)) = find_duplicate(&symbols) {
            panic!("{}", duplicate_message(first, second));
        }
        Alphabet { symbols }
    }

    /// Creates an alphabet from runtime data.
    ///
    /// Fails if `symbols` is not exactly 16 bytes long, or if two symbols are equal
    /// under ASCII case folding.
    pub fn try_new(symbols: &[u8]) -> Result<Self, AlphabetError> {
        let symbols: [u8; 16] = symbols
            .try_into()
            .map_err(|_| AlphabetError::WrongLength {
                actual: symbols.len(),
            })?;

        if let Some((first, second)) = find_duplicate(&symbols) {
            return Err(AlphabetError::DuplicateSymbol {
                symbol: symbols[second],
                first,
                second,
            });
        }

        Ok(Alphabet { symbols })
    }

    /// Returns the symbol for the low four bits of `nibble`.
    #[inline(always)]
    pub const fn symbol(&self, nibble: u8) -> u8 {
        self.symbols[(nibble & 0x0F) as usize]
    }

    /// All 16 symbols in nibble order.
    pub const fn symbols(&self) -> &[u8; 16] {
        &self.symbols
    }

    /// Whether every symbol is ASCII, i.e. encoded output is always valid UTF-8.
    pub fn is_ascii(&self) -> bool {
        self.symbols.is_ascii()
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = AlphabetError;

    fn try_from(symbols: &str) -> Result<Self, Self::Error> {
        Alphabet::try_new(symbols.as_bytes())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols.escape_ascii())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet(\"{}\")", self.symbols.escape_ascii())
    }
}

// Const panics only take a plain `&str`, so every message is spelled out up front.
macro_rules! duplicate_messages {
    ($first:expr, $second:expr; $($a:literal: [$($b:literal)*])*) => {
        match ($first, $second) {
            $($(($a, $b) => concat!(
                "alphabet has a duplicate symbol at positions ",
                $a,
                " and ",
                $b,
                " (compared case-insensitively)"
            ),)*)*
            _ => "alphabet contains a duplicate symbol (compared case-insensitively)",
        }
    };
}

const fn duplicate_message(first: usize, second: usize) -> &'static str {
    duplicate_messages!(first, second;
        0: [1 2 3 4 5 6 7 8 9 10 11 12 13 14 15]
        1: [2 3 4 5 6 7 8 9 10 11 12 13 14 15]
        2: [3 4 5 6 7 8 9 10 11 12 13 14 15]
        3: [4 5 6 7 8 9 10 11 12 13 14 15]
        4: [5 6 7 8 9 10 11 12 13 14 15]
        5: [6 7 8 9 10 11 12 13 14 15]
        6: [7 8 9 10 11 12 13 14 15]
        7: [8 9 10 11 12 13 14 15]
        8: [9 10 11 12 13 14 15]
        9: [10 11 12 13 14 15]
        10: [11 12 13 14 15]
        11: [12 13 14 15]
        12: [13 14 15]
        13: [14 15]
        14: [15]
    )
}

/// Finds the first pair of positions whose symbols are equal under ASCII case folding.
const fn find_duplicate(symbols: &[u8; 16]) -> Option<(usize, usize)> {
    let mut i = 0;
    while i < symbols.len() {
        let folded = symbols[i].to_ascii_lowercase();
        let mut j = i + 1;
        while j < symbols.len() {
            if symbols[j].to_ascii_lowercase() == folded {
                return Some((i, j));
            }
            j += 1;
        }
        i += 1;
    }
    None
}
