use std::fmt::{self, Display, Formatter};

use super::{AlphabetError, AlphabetOverflowError, EmptyAlphabetError};

/// A contiguous range of byte values which patterns and texts are made of.
///
/// Every byte in the range is mapped to a dense symbol index, starting at 0 for
/// [`first`](Alphabet::first). Tries allocate one child slot per symbol for every node, so a
/// smaller alphabet means a smaller arena.
///
/// The default alphabet is [`Alphabet::LOWERCASE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    first: u8,
    size: usize,
}

impl Alphabet {
    /// The 26 lowercase ASCII letters, `a` through `z`.
    pub const LOWERCASE: Alphabet = Alphabet { first: b'a', size: 26 };

    /// All 7-bit ASCII bytes.
    pub const ASCII: Alphabet = Alphabet { first: 0, size: 128 };

    /// Every possible byte.
    pub const BYTES: Alphabet = Alphabet { first: 0, size: 256 };

    /// Creates a new Alphabet of `size` symbols, starting at the byte `first`.
    ///
    /// Fails if the Alphabet would be empty or if it would extend past `u8::MAX`.
    pub const fn new(first: u8, size: usize) -> Result<Alphabet, AlphabetError> {
        if size == 0 {
            return Err(AlphabetError::EmptyAlphabet(EmptyAlphabetError));
        }

        if size > u8::MAX as usize + 1 - first as usize {
            return Err(AlphabetError::AlphabetOverflow(AlphabetOverflowError { first, size }));
        }

        Ok(Alphabet { first, size })
    }

    /// Returns the number of symbols in the Alphabet.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the first (lowest) byte in the Alphabet.
    pub const fn first(&self) -> u8 {
        self.first
    }

    /// Returns the last (highest) byte in the Alphabet.
    pub const fn last(&self) -> u8 {
        // The size is checked on construction, so this stays within u8.
        (self.first as usize + self.size - 1) as u8
    }

    /// Returns true if `byte` is a symbol of this Alphabet.
    pub const fn contains(&self, byte: u8) -> bool {
        self.index_of(byte).is_some()
    }

    /// Maps `byte` to its symbol index, or None if it isn't part of the Alphabet.
    #[inline]
    pub const fn index_of(&self, byte: u8) -> Option<usize> {
        let index = byte.wrapping_sub(self.first) as usize;
        if byte >= self.first && index < self.size {
            Some(index)
        } else {
            None
        }
    }

    /// Maps a symbol `index` back to its byte, or None if the index is out of range.
    pub const fn symbol(&self, index: usize) -> Option<u8> {
        if index < self.size {
            Some((self.first as usize + index) as u8)
        } else {
            None
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::LOWERCASE
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}-{}]",
            self.first.escape_ascii(),
            self.last().escape_ascii()
        )
    }
}
