//! Lexicon module - fixed Klingon lookup tables
//!
//! Every table is a `const` array. Lookups never fail: digits are total over
//! 0-9, phrases fall back to the input text, and calendar indices fall back
//! to the sentinels in [`crate::calendar`].

/// Klingon numerals, indexed by decimal digit.
pub const DIGIT_TOKENS: [&str; 10] = [
    "pagh", "wa'", "cha'", "wej", "loS", "vagh", "jav", "Soch", "chorgh", "Hut",
];

/// Suffix that turns a digit into its multiple of ten (`cha'` -> `cha'maH`).
pub const TENS_SUFFIX: &str = "maH";

/// Separator between the tokens of one number.
pub const TOKEN_SEPARATOR: &str = " ";

/// Known English phrases and their Klingon renderings.
pub const PHRASES: [(&str, &str); 4] = [
    ("Welcome to", "yI'el"),
    ("Klingon Clock", "tlhIngan rep"),
    ("Copyright", "ghItlh Soj"),
    ("May the force be with you", "Heghlu'meH QaQ jajvam"),
];

/// Day names, Sunday first.
pub const DAY_TOKENS: [&str; 7] = [
    "DaSjaj",
    "povjaj",
    "ghItlhjaj",
    "loghjaj",
    "buqjaj",
    "ghInjaj",
    "lojmItjaj",
];

/// Month names, January first. Klingon counts months ("month one", ...).
pub const MONTH_TOKENS: [&str; 12] = [
    "jar wa'",
    "jar cha'",
    "jar wej",
    "jar loS",
    "jar vagh",
    "jar jav",
    "jar Soch",
    "jar chorgh",
    "jar Hut",
    "jar wa'maH",
    "jar wa'maH wa'",
    "jar wa'maH cha'",
];

/// Look up an English phrase.
///
/// Returns the Klingon rendering when `text` is an exact key of
/// [`PHRASES`], otherwise `text` itself.
///
/// ```
/// use klingon_clock_core::phrase;
///
/// assert_eq!(phrase("Klingon Clock"), "tlhIngan rep");
/// assert_eq!(phrase("klingon clock"), "klingon clock");
/// ```
pub fn phrase(text: &str) -> &str {
    PHRASES
        .iter()
        .find(|(key, _)| *key == text)
        .map(|(_, token)| *token)
        .unwrap_or(text)
}
