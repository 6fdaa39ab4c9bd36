//! The embedded word list and the word-source contract.

use rand::seq::SliceRandom;

use crate::{word::Word, Result, WyrdlError};

/// The built-in pool of secret words.
///
/// All five-letter, reasonably common words. [`WordBank::builtin()`]
/// wraps this list so the game can run without any external corpus.
pub const ANSWERS: &[&str] = &[
    "ABOUT", "ABOVE", "ACTOR", "ADMIT", "AGENT", "AGREE", "ALBUM", "ALERT",
    "ALLOW", "ALONE", "ANGLE", "APPLE", "ARENA", "ARGUE", "ARISE", "AWARD",
    "BADGE", "BASIC", "BEACH", "BEGIN", "BENCH", "BIRTH", "BLACK", "BLADE",
    "BLAME", "BLEND", "BLOCK", "BOARD", "BRAIN", "BREAD", "BRICK", "BROWN",
    "CABIN", "CABLE", "CANDY", "CARGO", "CHAIR", "CHALK", "CHARM", "CHESS",
    "CHEST", "CHIEF", "CHILD", "CIVIC", "CLAIM", "CLEAN", "CLEAR", "CLIMB",
    "CLOCK", "CLOUD", "COACH", "COAST", "COUNT", "COURT", "COVER", "CRAFT",
    "CRANE", "CREAM", "CRIME", "CROWD", "CROWN", "DAILY", "DANCE", "DELTA",
    "DEPTH", "DIARY", "DOUBT", "DOZEN", "DRAFT", "DRAMA", "DREAM", "DRESS",
    "DRINK", "DRIVE", "EAGLE", "EARLY", "EARTH", "EIGHT", "ELBOW", "EMPTY",
    "ENJOY", "ENTER", "EQUAL", "ERROR", "EVENT", "EXACT", "FAITH", "FANCY",
    "FAULT", "FENCE", "FIELD", "FIFTY", "FIGHT", "FINAL", "FLAME", "FLEET",
    "FLOOR", "FLOUR", "FOCUS", "FORGE", "FORTY", "FORUM", "FRAME", "FRESH",
    "FRONT", "FRUIT", "GIANT", "GLASS", "GLOBE", "GRACE", "GRADE", "GRAIN",
    "GRAND", "GRANT", "GRAPE", "GRASS", "GREEN", "GROUP", "GUARD", "GUEST",
    "GUIDE", "HABIT", "HAPPY", "HEART", "HEAVY", "HORSE", "HOTEL", "HOUSE",
    "HUMAN", "HUMOR", "IDEAL", "IMAGE", "INDEX", "INPUT", "ISSUE", "JOINT",
    "JUDGE", "JUICE", "KNIFE", "KNOCK", "LABEL", "LARGE", "LAUGH", "LAYER",
    "LEARN", "LEMON", "LEVEL", "LIGHT", "LIMIT", "LOCAL", "LOGIC", "LOYAL",
    "LUCKY", "LUNCH", "MAGIC", "MAJOR", "MAPLE", "MARCH", "MATCH", "MAYOR",
    "MEDAL", "MEDIA", "MERCY", "METAL", "MINOR", "MODEL", "MONEY", "MONTH",
    "MORAL", "MOTOR", "MOUNT", "MOUSE", "MOUTH", "MOVIE", "MUSIC", "NERVE",
    "NIGHT", "NOBLE", "NOISE", "NORTH", "NOVEL", "NURSE", "OCEAN", "OFFER",
    "OLIVE", "ONION", "OPERA", "ORBIT", "ORDER", "ORGAN", "OTHER", "OUNCE",
    "OWNER", "PAINT", "PANEL", "PAPER", "PARTY", "PEACE", "PEARL", "PHASE",
    "PHONE", "PIANO", "PILOT", "PITCH", "PLAIN", "PLANE", "PLANT", "PLATE",
    "POINT", "POUND", "POWER", "PRESS", "PRICE", "PRIDE", "PRIME", "PRINT",
    "PRIZE", "PROOF", "PROUD", "PUPIL", "QUEEN", "QUICK", "QUIET", "RADIO",
    "RAPID", "RATIO", "REACH", "REACT", "RIDGE", "RIGHT", "RIVER", "ROAST",
    "ROBIN", "ROUND", "ROUTE", "ROYAL", "RURAL", "SALAD", "SAUCE", "SCALE",
    "SCENE", "SCOPE", "SCORE", "SENSE", "SEVEN", "SHADE", "SHAKE", "SHAPE",
    "SHARE", "SHARP", "SHEEP", "SHEET", "SHELF", "SHELL", "SHIFT", "SHINE",
    "SHIRT", "SHORE", "SHORT", "SIGHT", "SKILL", "SLATE", "SLEEP", "SLICE",
    "SMALL", "SMART", "SMILE", "SMOKE", "SOLAR", "SOLID", "SOUND", "SOUTH",
    "SPACE", "SPARE", "SPEAK", "SPEED", "SPICE", "SPLIT", "SPORT", "STAFF",
    "STAGE", "STAND", "START", "STEAM", "STEEL", "STICK", "STILL", "STONE",
    "STORE", "STORM", "STORY", "STYLE", "SUGAR", "SWEET", "TABLE", "TASTE",
    "TEACH", "THEME", "THICK", "THING", "THINK", "THIRD", "TIGER", "TITLE",
    "TOAST", "TODAY", "TOKEN", "TOPIC", "TOTAL", "TOUCH", "TOWER", "TRACK",
    "TRADE", "TRAIN", "TREAT", "TREND", "TRIAL", "TRUCK", "TRUST", "TRUTH",
    "TWICE", "UNCLE", "UNION", "UNITY", "UPPER", "URBAN", "USAGE", "VALID",
    "VALUE", "VIDEO", "VISIT", "VITAL", "VOICE", "WAGON", "WASTE", "WATCH",
    "WATER", "WHEAT", "WHEEL", "WHILE", "WHITE", "WHOLE", "WOMAN", "WORLD",
    "WORRY", "WORTH", "WOUND", "WRIST", "WRITE", "WRONG", "YIELD", "YOUNG",
    "YOUTH",
];

/// Supplies the secret word for a new game.
///
/// The contract is simple: whatever comes back is a valid [`Word`], so
/// the session never re-validates it. Implementers take `&mut self` so
/// stateful sources (a shuffled deck, a daily rotation) fit too.
pub trait WordSource {
    /// Picks the word the player will have to guess.
    fn choose_secret_word(&mut self) -> Word;
}

/// A pool of validated secret words.
///
/// Built from any corpus of candidate strings; entries that are not
/// playable five-letter words are skipped, the way a wordlist file with
/// headers or blank lines would want. A corpus that leaves nothing
/// behind is an error, raised here so it surfaces before any game
/// starts.
///
/// # Examples
///
/// ```rust
/// use wyrdl::{WordBank, WordSource};
///
/// let mut bank = WordBank::new(["crane", "too long", "slate"])?;
/// assert_eq!(bank.len(), 2);
///
/// let secret = bank.choose_secret_word();
/// assert!(["CRANE", "SLATE"].contains(&&*secret));
/// #
/// # Ok::<_, wyrdl::WyrdlError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// Builds a bank from a corpus, keeping only the usable entries.
    ///
    /// Returns [`WyrdlError::EmptyWordlist`] if no entry survives.
    pub fn new<I>(corpus: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words: Vec<Word> = corpus
            .into_iter()
            .filter_map(|entry| Word::new(entry.as_ref().trim()).ok())
            .collect();

        if words.is_empty() {
            Err(WyrdlError::EmptyWordlist)
        } else {
            Ok(WordBank { words })
        }
    }

    /// The bank backed by [`ANSWERS`].
    pub fn builtin() -> Self {
        // The built-in list is non-empty and pre-validated.
        Self::new(ANSWERS).unwrap()
    }

    /// How many words the bank can choose from.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty banks.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordBank {
    fn choose_secret_word(&mut self) -> Word {
        // Non-empty by construction, so there is always a word to pick.
        *self.words.choose(&mut rand::thread_rng()).unwrap()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_list_is_fully_playable() {
        let bank = WordBank::builtin();
        assert_eq!(bank.len(), ANSWERS.len());
        assert!(ANSWERS
            .iter()
            .all(|w| w.len() == 5 && w.bytes().all(|b| b.is_ascii_uppercase())));
    }

    #[test]
    fn unusable_entries_are_skipped() -> Result<()> {
        let bank = WordBank::new(["# header", "", "crane", "slate ", "a"])?;
        assert_eq!(bank.len(), 2);
        Ok(())
    }

    #[test]
    fn a_corpus_with_nothing_usable_is_an_error() {
        assert!(matches!(
            WordBank::new(Vec::<String>::new()),
            Err(WyrdlError::EmptyWordlist)
        ));
        assert!(matches!(
            WordBank::new(["", "not-words", "123"]),
            Err(WyrdlError::EmptyWordlist)
        ));
    }

    #[test]
    fn chosen_words_come_from_the_bank() -> Result<()> {
        let mut bank = WordBank::new(["crane", "slate"])?;
        for _ in 0..20 {
            let word = bank.choose_secret_word();
            assert!(word == Word::new("crane")? || word == Word::new("slate")?);
        }
        Ok(())
    }
}
