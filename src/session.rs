//! The game session state machine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    evaluate::{evaluate, GuessResult},
    knowledge::AlphabetKnowledge,
    word::Word,
    InvalidGuess, Result, WyrdlError,
};

/// Where a [`Session`] stands.
///
/// A session starts `InProgress` and moves to exactly one of the two
/// terminal states: `Won` on an exact word match, `Lost` when the
/// attempt budget runs out first. Terminal states accept no further
/// guesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Status {
    /// Guesses are still being accepted.
    InProgress,

    /// A guess matched the secret word.
    Won,

    /// Every attempt was spent without matching the secret.
    Lost,
}

/// Receives session events for rendering.
///
/// Implement this on whatever draws the game: a terminal, a widget
/// tree, a test recorder. [`Session::submit_to()`] calls exactly the
/// methods that apply to each submitted guess, always with immutable
/// snapshots, so a front end never has to re-derive transitions.
pub trait Presenter {
    /// The submitted text was not a playable word. No attempt was spent.
    fn invalid_guess(&mut self, error: &InvalidGuess);

    /// A guess was accepted and graded.
    fn guess_evaluated(&mut self, result: &GuessResult, knowledge: &AlphabetKnowledge);

    /// The last guess matched the secret word.
    fn won(&mut self, attempts_used: usize);

    /// The attempt budget ran out. The secret is revealed for display.
    fn lost(&mut self, secret: &Word);
}

/// A single game: one secret word and a budget of guesses.
///
/// The session owns the secret, counts attempts (1-based), keeps every
/// graded guess in order, and folds each one into an
/// [`AlphabetKnowledge`]. It is mutated only by submitting a guess, and
/// each submission runs to completion before the next; the session
/// itself is single-threaded.
///
/// # Examples
///
/// ```rust
/// use wyrdl::{Session, Status, Word};
///
/// let mut session = Session::new(Word::new("crane")?).max_attempts(3);
///
/// assert_eq!(session.submit_guess("react")?, Status::InProgress);
/// assert!(session.submit_guess("not a word").is_err()); // costs nothing
/// assert_eq!(session.attempt(), 2);
/// assert_eq!(session.submit_guess("crane")?, Status::Won);
/// #
/// # Ok::<_, wyrdl::WyrdlError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    secret: Word,
    max_attempts: usize,
    attempt: usize,
    history: Vec<GuessResult>,
    knowledge: AlphabetKnowledge,
    status: Status,
}

impl Session {
    /// The attempt budget sessions start with.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

    /// Creates a session around a freshly chosen secret word.
    ///
    /// The secret is trusted: it comes from a
    /// [`WordSource`](crate::WordSource) (or any other pre-validated
    /// [`Word`]) and is never format-checked again.
    pub fn new(secret: Word) -> Self {
        Session {
            secret,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            attempt: 1,
            history: Vec::new(),
            knowledge: AlphabetKnowledge::new(),
            status: Status::InProgress,
        }
    }

    /// Sets the attempt budget, which is fixed for the rest of the game.
    pub fn max_attempts(self, n: usize) -> Self {
        Session {
            max_attempts: n.max(1),
            ..self
        }
    }

    /// The current state of the game.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The 1-based number of the attempt currently being played.
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    /// Every graded guess so far, oldest first.
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    /// The best verdict observed for each letter across all guesses.
    pub fn knowledge(&self) -> &AlphabetKnowledge {
        &self.knowledge
    }

    /// Plays one guess.
    ///
    /// The raw text is validated first; a malformed guess returns
    /// [`WyrdlError::Guess`] and consumes nothing. An accepted guess is
    /// graded, recorded, and folded into the knowledge map, and the
    /// returned [`Status`] tells the caller where the game now stands:
    /// `Won` on an exact match regardless of attempts left, `Lost` when
    /// this was the final attempt and it missed, `InProgress` otherwise.
    ///
    /// Submitting to a finished game returns
    /// [`WyrdlError::SessionClosed`] and mutates nothing.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Status> {
        if self.status != Status::InProgress {
            return Err(WyrdlError::SessionClosed);
        }

        let guess = Word::new(raw)?;
        let result = evaluate(&self.secret, &guess);
        self.knowledge.update(&result);
        self.history.push(result);

        if guess == self.secret {
            self.status = Status::Won;
        } else if self.attempt >= self.max_attempts {
            self.status = Status::Lost;
        } else {
            self.attempt += 1;
        }

        Ok(self.status)
    }

    /// Plays one guess and reports what happened to a [`Presenter`].
    ///
    /// A malformed guess becomes an [`invalid_guess()`][ig] event and an
    /// `Ok(InProgress)` return, since the game itself is untouched.
    /// An accepted guess always produces [`guess_evaluated()`][ge],
    /// followed by [`won()`][w] or [`lost()`][l] if it ended the game.
    /// Only [`WyrdlError::SessionClosed`] is returned as an error.
    ///
    /// [ig]: Presenter::invalid_guess()
    /// [ge]: Presenter::guess_evaluated()
    /// [w]: Presenter::won()
    /// [l]: Presenter::lost()
    pub fn submit_to(&mut self, raw: &str, presenter: &mut dyn Presenter) -> Result<Status> {
        match self.submit_guess(raw) {
            Ok(status) => {
                // submit_guess only returns Ok after recording the guess.
                let result = self.history.last().unwrap();
                presenter.guess_evaluated(result, &self.knowledge);
                match status {
                    Status::InProgress => {}
                    Status::Won => presenter.won(self.history.len()),
                    Status::Lost => presenter.lost(&self.secret),
                }
                Ok(status)
            }
            Err(WyrdlError::Guess { kind }) => {
                presenter.invalid_guess(&kind);
                Ok(self.status)
            }
            Err(e) => Err(e),
        }
    }
}
