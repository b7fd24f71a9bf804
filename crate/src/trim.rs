//! Trimming characters from either end of a string.
//!
//! By default only ASCII whitespace as commonly found around lines of text
//! (space, tab, newline, carriage return) is trimmed. Any char or set of
//! chars can be trimmed instead.
//!
//! # Examples
//!
//! ```
//! use stringkit::trim::{ltrim, rtrim, trim, TrimChars};
//!
//! assert_eq!(ltrim("   geddy", TrimChars::default()), "geddy");
//! assert_eq!(rtrim("geddy&&", '&'), "geddy");
//! assert_eq!(trim("-=geddy=-", "=-"), "geddy");
//! ```

/// The chars a trim function removes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrimChars<'a> {
    /// Space, tab, newline, and carriage return.
    Whitespace,
    /// One specific char.
    Single(char),
    /// Every char in the string is trimmed, in any order.
    Set(&'a str),
}

const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

impl Default for TrimChars<'_> {
    fn default() -> Self {
        TrimChars::Whitespace
    }
}

impl<'a> From<&'a str> for TrimChars<'a> {
    fn from(set: &'a str) -> Self {
        TrimChars::Set(set)
    }
}

impl From<char> for TrimChars<'_> {
    fn from(c: char) -> Self {
        TrimChars::Single(c)
    }
}

impl TrimChars<'_> {
    fn contains(&self, c: char) -> bool {
        match self {
            TrimChars::Whitespace => WHITESPACE.contains(&c),
            TrimChars::Set(set) => set.contains(c),
            TrimChars::Single(single) => *single == c,
        }
    }
}

/// Removes the leading chars of `s` which are in `chars`.
pub fn ltrim<'a, 'c>(s: &'a str, chars: impl Into<TrimChars<'c>>) -> &'a str {
    let chars = chars.into();
    s.trim_start_matches(|c: char| chars.contains(c))
}

/// Removes the trailing chars of `s` which are in `chars`.
pub fn rtrim<'a, 'c>(s: &'a str, chars: impl Into<TrimChars<'c>>) -> &'a str {
    let chars = chars.into();
    s.trim_end_matches(|c: char| chars.contains(c))
}

/// Removes both leading and trailing chars of `s` which are in `chars`.
pub fn trim<'a, 'c>(s: &'a str, chars: impl Into<TrimChars<'c>>) -> &'a str {
    let chars = chars.into();
    rtrim(ltrim(s, chars), chars)
}
