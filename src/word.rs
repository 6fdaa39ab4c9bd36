//! The validated word type shared by secrets and guesses.

use std::{fmt::Display, ops::Deref};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{InvalidGuess, Result};

/// A playable five-letter word.
///
/// This struct represents a word that can act as a secret or a guess,
/// and its construction is validated to ensure that every instance is
/// exactly five letters of A-Z. Input is normalized to uppercase, so
/// `"crane"` and `"CRANE"` construct equal words.
///
/// # Examples
///
/// ```rust
/// # use std::ops::Deref;
/// # use wyrdl::Word;
/// #
/// let crane = Word::new("crane")?;
/// assert_eq!(crane.deref(), "CRANE");
///
/// assert!(Word::new("cran").is_err());
/// assert!(Word::new("cr4ne").is_err());
/// #
/// # Ok::<_, wyrdl::WyrdlError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Word {
    pub(crate) letters: [u8; 5],
}

impl Word {
    /// The number of letters in every word.
    pub const LENGTH: usize = 5;

    /// Creates a new [`Word`] from a string.
    ///
    /// Returns an error if the string is not exactly five characters
    /// long or contains anything other than letters. This is the format
    /// validation the whole crate relies on: once a [`Word`] exists it
    /// never needs to be re-checked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wyrdl::{InvalidGuess, Word, WyrdlError};
    /// #
    /// assert!(Word::new("slate").is_ok());
    ///
    /// assert!(matches!(
    ///     Word::new("cranes"),
    ///     Err(WyrdlError::Guess {
    ///         kind: InvalidGuess::WrongLength(6)
    ///     })
    /// ));
    /// assert!(matches!(
    ///     Word::new("cr-ne"),
    ///     Err(WyrdlError::Guess {
    ///         kind: InvalidGuess::NotAlphabetic('-')
    ///     })
    /// ));
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        let len = text.chars().count();
        if len != Self::LENGTH {
            return Err(InvalidGuess::WrongLength(len).into());
        }

        let mut letters = [0_u8; Self::LENGTH];
        for (slot, c) in letters.iter_mut().zip(text.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(InvalidGuess::NotAlphabetic(c).into());
            }
            *slot = (c as u8).to_ascii_uppercase();
        }

        Ok(Word { letters })
    }
}

/// Maps an uppercase letter to its 0-25 alphabet slot.
pub(crate) fn slot(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        // Always valid UTF-8: construction only admits ASCII letters.
        std::str::from_utf8(&self.letters).unwrap()
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.deref())
    }
}
