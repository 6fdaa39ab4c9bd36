//! Accumulated per-letter knowledge across a session.

use std::fmt::Display;

use itertools::Itertools;

use crate::{
    evaluate::{GuessResult, Verdict},
    word::slot,
};

/// The best verdict observed so far for each letter of the alphabet.
///
/// Every graded guess teaches something about each letter it uses. This
/// map folds those lessons together, keeping only the highest-ranked
/// verdict seen for each letter: `Correct` outranks `Misplaced`, which
/// outranks `Absent`, and a letter no guess has used yet is `None`.
/// Knowledge only ever improves; a letter that once graded `Correct`
/// stays `Correct` no matter what later guesses do with it.
///
/// # Examples
///
/// ```rust
/// use wyrdl::{evaluate, AlphabetKnowledge, Verdict, Word};
///
/// let secret = Word::new("crane")?;
/// let mut knowledge = AlphabetKnowledge::new();
///
/// knowledge.update(&evaluate(&secret, &Word::new("eerie")?));
/// assert_eq!(knowledge.best('E'), Some(Verdict::Misplaced));
///
/// // A later guess that places the E correctly upgrades it...
/// knowledge.update(&evaluate(&secret, &Word::new("pulse")?));
/// assert_eq!(knowledge.best('E'), Some(Verdict::Correct));
///
/// // ...and nothing ever downgrades it.
/// knowledge.update(&evaluate(&secret, &Word::new("ebony")?));
/// assert_eq!(knowledge.best('E'), Some(Verdict::Correct));
/// #
/// # Ok::<_, wyrdl::WyrdlError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlphabetKnowledge {
    best: [Option<Verdict>; 26],
}

impl AlphabetKnowledge {
    /// Creates an empty knowledge map: every letter starts unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one graded guess into the map.
    ///
    /// Each letter's entry is upgraded to the verdict it just received
    /// if that verdict outranks what was already known. Lower-ranked
    /// verdicts are ignored.
    pub fn update(&mut self, result: &GuessResult) {
        for (letter, verdict) in result.iter() {
            let best = &mut self.best[slot(letter as u8)];
            if Some(verdict) > *best {
                *best = Some(verdict);
            }
        }
    }

    /// The best verdict observed for `letter`, or `None` if no guess
    /// has used it yet (or if `letter` is not a letter at all).
    pub fn best(&self, letter: char) -> Option<Verdict> {
        let letter = letter.to_ascii_uppercase();
        if letter.is_ascii_uppercase() {
            self.best[slot(letter as u8)]
        } else {
            None
        }
    }

    /// Iterates over all 26 letters and their entries, in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<Verdict>)> + '_ {
        self.best
            .iter()
            .enumerate()
            .map(|(i, &v)| ((b'A' + i as u8) as char, v))
    }

    /// The letters currently holding `verdict`, in alphabet order.
    pub fn letters(&self, verdict: Verdict) -> impl Iterator<Item = char> + '_ {
        self.iter()
            .filter(move |&(_, v)| v == Some(verdict))
            .map(|(c, _)| c)
    }
}

impl Display for AlphabetKnowledge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "correct: {}  misplaced: {}  absent: {}",
            self.letters(Verdict::Correct).format(", "),
            self.letters(Verdict::Misplaced).format(", "),
            self.letters(Verdict::Absent).format(", "),
        )
    }
}
