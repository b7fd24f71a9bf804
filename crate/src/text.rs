//! Plain text transforms: splitting, reversing, chopping, and truncating.
//!
//! # Examples
//!
//! ```
//! use stringkit::text::{reverse, to_array, truncate, TruncateOptions};
//!
//! assert_eq!(to_array("geddy"), vec!["g", "e", "d", "d", "y"]);
//! assert_eq!(reverse("yddeg"), "geddy");
//!
//! let opts = TruncateOptions { length: 8, ..TruncateOptions::default() };
//! assert_eq!(truncate("geddy rocks", &opts).unwrap(), "geddy...");
//! ```
use crate::{
    error::{Error, Result},
    util,
};
use std::borrow::Cow;

/// Splits a string into its chars, each as a one-char `&str`.
pub fn to_array(s: &str) -> Vec<&str> {
    s.char_indices()
        .map(|(i, c)| &s[i..i + c.len_utf8()])
        .collect()
}

/// Returns the chars of a string in reverse order.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Removes the last char of a string. A trailing "\r\n" counts as a single
/// char.
pub fn chop(s: &str) -> &str {
    if let Some(stripped) = s.strip_suffix("\r\n") {
        return stripped;
    }
    match s.char_indices().last() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Escapes all regex metacharacters in a string so that it matches itself
/// literally when used as a pattern.
pub fn escape_regexp_chars(s: &str) -> String {
    regex::escape(s)
}

/// How to truncate a string.
#[derive(Clone, Debug, PartialEq)]
pub struct TruncateOptions<'a> {
    /// The maximum length of the result, including the omission marker.
    /// Defaults to 30.
    pub length: usize,
    /// Appended to a string which was truncated. Defaults to "...".
    pub omission: &'a str,
    /// When set, the cut is moved back to the last occurrence of this
    /// string, so that words are not split in half.
    pub separator: Option<&'a str>,
}

impl Default for TruncateOptions<'_> {
    fn default() -> Self {
        Self {
            length: 30,
            omission: "...",
            separator: None,
        }
    }
}

impl TruncateOptions<'_> {
    /// The number of chars of the original string which fit before the
    /// omission marker.
    pub(crate) fn keep(&self) -> Result<usize> {
        let omission_len = util::char_len(self.omission);
        if self.length < omission_len {
            return Err(Error::invalid_argument(
                "length",
                format!(
                    "{} is shorter than the omission marker `{}`",
                    self.length, self.omission,
                ),
            ));
        }
        Ok(self.length - omission_len)
    }

    /// Cuts `s` down to at most `keep` chars, backing up to the separator if
    /// there is one.
    pub(crate) fn cut<'s>(&self, s: &'s str, keep: usize) -> &'s str {
        let prefix = util::char_prefix(s, keep);
        match self.separator {
            Some(sep) if !sep.is_empty() => match prefix.rfind(sep) {
                Some(idx) => &prefix[..idx],
                None => prefix,
            },
            _ => prefix,
        }
    }
}

/// Truncates a string to `opts.length` chars, ending it with
/// `opts.omission`. A string which already fits is returned as-is.
pub fn truncate<'a>(s: &'a str, opts: &TruncateOptions<'_>) -> Result<Cow<'a, str>> {
    let keep = opts.keep()?;
    if util::char_len(s) <= opts.length {
        return Ok(Cow::Borrowed(s));
    }
    Ok(Cow::Owned(format!("{}{}", opts.cut(s, keep), opts.omission)))
}
