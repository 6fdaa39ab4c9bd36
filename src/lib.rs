#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod word;
pub use word::Word;

pub mod evaluate;
pub use evaluate::{evaluate, GuessResult, Verdict};

pub mod knowledge;
pub use knowledge::AlphabetKnowledge;

pub mod session;
pub use session::{Presenter, Session, Status};

pub mod words;
pub use words::{WordBank, WordSource};

/// Convenience alias used throughout `wyrdl`.
pub type Result<T> = std::result::Result<T, WyrdlError>;

/// The errors that `wyrdl` can produce.
#[derive(Debug, Error)]
pub enum WyrdlError {
    /// The submitted guess is not a playable word.
    ///
    /// This is recoverable: the session does not charge an attempt for
    /// it, so the caller can re-prompt and submit another guess.
    #[error("guess is not a playable word")]
    Guess {
        #[from]
        kind: InvalidGuess,
    },

    /// A guess was submitted to a session that has already ended.
    #[error("the game has already ended")]
    SessionClosed,

    /// A word bank was built from a corpus with no usable words in it.
    #[error("the wordlist contains no playable words")]
    EmptyWordlist,

    #[error("general IO error")]
    Io(#[from] std::io::Error),
}

/// The ways a guess can fail format validation.
///
/// A playable word is exactly five letters, A through Z. Anything else
/// is rejected before it reaches the evaluation engine.
#[derive(Debug, Error)]
pub enum InvalidGuess {
    /// The guess does not have exactly five letters.
    #[error("expected a five letter word, got {0} characters")]
    WrongLength(usize),

    /// The guess contains a character outside A-Z.
    #[error("the character {0:?} is not a letter")]
    NotAlphabetic(char),
}
