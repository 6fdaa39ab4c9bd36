//! The guess-evaluation engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::word::{slot, Word};

/// How correct one letter of a guess is.
///
/// [`evaluate()`] produces one of these per guess position. `Correct`
/// means the letter is in the secret at that position, `Misplaced` means
/// the letter is in the secret somewhere else, and `Absent` means the
/// secret has no unclaimed copy of that letter.
///
/// The variants are declared in rank order, so the derived [`Ord`] is
/// the upgrade ranking used by
/// [`AlphabetKnowledge`](crate::AlphabetKnowledge):
/// `Absent < Misplaced < Correct`, and `None` (nothing observed yet)
/// sorts below all three as an `Option<Verdict>`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Verdict {
    /// The secret has no unclaimed copy of this letter.
    Absent,

    /// The letter is in the secret, but not at this position.
    Misplaced,

    /// The letter is in the secret at exactly this position.
    Correct,
}

/// The graded outcome of one guess.
///
/// Pairs the guessed word with one [`Verdict`] per position. Instances
/// are produced by [`evaluate()`] and never change afterwards.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct GuessResult {
    guess: Word,
    verdicts: [Verdict; Word::LENGTH],
}

impl GuessResult {
    /// The word this result grades.
    pub fn guess(&self) -> &Word {
        &self.guess
    }

    /// The verdicts, one per guess position.
    pub fn verdicts(&self) -> &[Verdict; Word::LENGTH] {
        &self.verdicts
    }

    /// Iterates over `(letter, verdict)` pairs in guess order.
    pub fn iter(&self) -> impl Iterator<Item = (char, Verdict)> + '_ {
        self.guess.chars().zip(self.verdicts.iter().copied())
    }
}

/// Grades `guess` against `secret`, one [`Verdict`] per letter.
///
/// This is a pure function: no state, no I/O, safe to call from
/// anywhere, and the same inputs always grade the same way.
///
/// Repeated letters are resolved with two passes. The first pass claims
/// every exact positional match, and only then does the second pass hand
/// out `Misplaced` from whatever copies of each letter remain. Together
/// that guarantees:
///
/// 1. A letter in the right position always grades `Correct`, even when
///    the same letter appears earlier in the guess in a wrong position.
/// 2. `Correct` and `Misplaced` together never outnumber the copies of
///    that letter in the secret. If the secret is `SOBER` and you guess
///    `SPOOL`, the first `O` grades `Misplaced` and the second `Absent`;
///    guess `SOAKS` and the first `S` grades `Correct` while the second
///    grades `Absent`.
///
/// # Examples
///
/// ```rust
/// use wyrdl::{evaluate, Verdict::*, Word};
///
/// let secret = Word::new("alloy")?;
/// let result = evaluate(&secret, &Word::new("llama")?);
///
/// // Only the L at position 1 sits on an L of the secret. The other L
/// // is misplaced, and only one A exists to be claimed.
/// assert_eq!(
///     result.verdicts(),
///     &[Misplaced, Correct, Misplaced, Absent, Absent],
/// );
/// #
/// # Ok::<_, wyrdl::WyrdlError>(())
/// ```
pub fn evaluate(secret: &Word, guess: &Word) -> GuessResult {
    let mut remaining = [0_u8; 26];
    for &letter in &secret.letters {
        remaining[slot(letter)] += 1;
    }

    let mut verdicts = [Verdict::Absent; Word::LENGTH];

    // Exact matches claim their copy of the letter before anything else.
    for (i, (&guessed, &answer)) in guess.letters.iter().zip(&secret.letters).enumerate() {
        if guessed == answer {
            verdicts[i] = Verdict::Correct;
            remaining[slot(guessed)] -= 1;
        }
    }

    // Remaining positions are misplaced while unclaimed copies last.
    for (i, &guessed) in guess.letters.iter().enumerate() {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        let copies = &mut remaining[slot(guessed)];
        if *copies > 0 {
            *copies -= 1;
            verdicts[i] = Verdict::Misplaced;
        }
    }

    GuessResult {
        guess: *guess,
        verdicts,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Result;

    fn str_to_verdicts(input: &str) -> [Verdict; 5] {
        let mut res = [Verdict::Absent; 5];
        for (i, c) in input.chars().enumerate() {
            match c {
                'c' => res[i] = Verdict::Correct,
                'm' => res[i] = Verdict::Misplaced,
                _ => {}
            }
        }
        res
    }

    macro_rules! grade_test {
        ($fn_name:ident[$secret:expr => $( [$guess:expr, $res:expr] );*]) => {
            #[test]
            fn $fn_name() -> Result<()> {
                let secret = Word::new($secret)?;

                $(
                    let guess = Word::new($guess)?;
                    let result = evaluate(&secret, &guess);
                    assert_eq!(result.verdicts(), &str_to_verdicts($res));
                    assert_eq!(result.guess(), &guess);
                )*

                Ok(())
            }
        };
    }

    grade_test! { exact_match_is_all_correct ["crane" =>
        ["crane", "ccccc"]]
    }

    grade_test! { disjoint_letters_are_all_absent ["crane" =>
        ["split", "....."]]
    }

    grade_test! { anagram_with_one_anchor ["crane" =>
        ["react", "mmcm."]]
    }

    grade_test! { double_letter_guess_single_letter_secret ["alloy" =>
        ["llama", "mcm.."]]
    }

    grade_test! { repeated_secret_letter_feeds_two_misplaced ["speed" =>
        ["erupt", "m..m."];
        ["eerie", "mm..."]]
    }

    grade_test! { exact_match_outranks_earlier_misplaced ["sober" =>
        ["spool", "c.m.."];
        ["soaks", "cc..."]]
    }

    grade_test! { surplus_copies_grade_absent ["spoon" =>
        ["odors", "m.c.m"]]
    }

    #[test]
    fn verdicts_follow_guess_case_insensitively() -> Result<()> {
        let secret = Word::new("CRANE")?;
        assert_eq!(
            evaluate(&secret, &Word::new("react")?),
            evaluate(&secret, &Word::new("REACT")?),
        );
        Ok(())
    }

    #[test]
    fn results_expose_letters_in_guess_order() -> Result<()> {
        let secret = Word::new("alloy")?;
        let result = evaluate(&secret, &Word::new("llama")?);

        let letters: Vec<char> = result.iter().map(|(c, _)| c).collect();
        assert_eq!(letters, vec!['L', 'L', 'A', 'M', 'A']);
        Ok(())
    }
}
