//! Wordle word representation
//!
//! A Word is five uppercase ASCII letters stored inline, so it is `Copy` and cheap to compare.

use crate::error::WordError;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the alphabet (`A`-`Z`)
pub const ALPHABET_SIZE: usize = 26;

/// Map an uppercase ASCII letter to `0..26`
///
/// Callers only pass bytes that came out of a `Word`, which are always `A`-`Z`.
///
/// # Panics
/// Panics on overflow if `letter` is below `b'A'`. Bytes above `b'Z'` give an index past
/// [`ALPHABET_SIZE`].
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

/// Inverse of [`letter_index`]
#[inline]
#[must_use]
pub const fn letter_at(index: usize) -> u8 {
    b'A' + index as u8
}

/// A 5-letter word over `A`-`Z`
///
/// Ordering is alphabetical, which is what every sorted word list in the crate relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            if !byte.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Self(letters))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Always ASCII, so this never falls back.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Occurrences of every letter, indexed by [`letter_index`]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in &self.0 {
            counts[letter_index(letter)] += 1;
        }
        counts
    }

    /// Number of times `letter` appears
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        self.0.iter().filter(|&&l| l == letter).count() as u8
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
