//! English pluralization and singularization for identifiers.
//!
//! The rules here cover regular nouns only:
//!
//! * A consonant followed by "y" becomes "ies" ("category" => "categories").
//! * A word ending in a sibilant ("s", "x", "z", "ch", "sh") gets "es"
//!   ("box" => "boxes").
//! * Anything else gets "s" ("dog" => "dogs").
//!
//! Singularization undoes these. There is no table of irregular nouns, so
//! "person" becomes "persons" and "children" stays "children". Because of
//! this a word is never both singular and plural.
//!
//! A singular noun that itself ends in a single "s", like "bus" or "gas",
//! looks just like a regular plural. Only the short list in
//! [SINGULAR_S_NOUNS] is recognized as singular; any other such word is
//! treated as a plural, so "lens" singularizes to "len". Trailing
//! underscores are kept, and the word before them is inflected ("dog_" =>
//! "dogs_").
//!
//! # Examples
//!
//! ```
//! use stringkit::noun::Noun;
//! use stringkit::term::Term; // Provides the interesting methods
//!
//! let noun = Noun::new("snow_dog");
//! assert_eq!(noun.plural(), "snow_dogs");
//! assert_eq!(noun.singular(), "snow_dog");
//!
//! assert!(noun.is_singular());
//! assert!(!noun.is_plural());
//! ```
use crate::{term::Term, util};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

#[derive(Debug)]
struct Rule {
    regex: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(re: &str, replacement: &'static str) -> Self {
        Self {
            regex: Regex::new(re).expect("Could not parse inflection regex"),
            replacement,
        }
    }
}

// The rules are tried in order and the first match wins. Each one is
// anchored at both ends and captures everything it keeps as `stem`.
static PLURAL_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(r"(?i)\A(?P<stem>.*[^aeiou])y$", "${stem}ies"),
        Rule::new(r"(?i)\A(?P<stem>.*(?:s|x|z|ch|sh))$", "${stem}es"),
        Rule::new(r"(?i)\A(?P<stem>.+)$", "${stem}s"),
    ]
});

/// Singular nouns ending in a single "s". These are left alone by
/// singularization, and their "es" plurals singularize back to them.
pub const SINGULAR_S_NOUNS: &[&str] = &[
    "alias", "atlas", "bias", "bonus", "bus", "campus", "canvas", "census", "corpus", "gas",
    "status", "virus",
];

static SINGULAR_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let singular_s = SINGULAR_S_NOUNS.join("|");
    vec![
        Rule::new(&format!(r"(?i)\A(?P<stem>.*(?:{}))$", singular_s), "${stem}"),
        Rule::new(&format!(r"(?i)\A(?P<stem>.*(?:{}))es$", singular_s), "${stem}"),
        Rule::new(r"(?i)\A(?P<stem>.*[^aeiou])ies$", "${stem}y"),
        Rule::new(r"(?i)\A(?P<stem>.*(?:ss|x|z|ch|sh))es$", "${stem}"),
        Rule::new(r"(?i)\A(?P<stem>.*[^su])s$", "${stem}"),
    ]
});

/// A `Noun` is a single noun or an underscore-separated identifier which
/// ends in a noun, like "snow_dog".
#[derive(Debug)]
pub struct Noun<'a>(&'a str);

impl<'a> Term<'a> for Noun<'a> {
    /// Creates a new noun from a string. Nothing checks that this is really
    /// a noun, so `Noun::new("eat")` pluralizes to "eats".
    fn new(noun: &'a str) -> Self {
        Self(noun)
    }

    fn singular(&self) -> Cow<'a, str> {
        inflect_last_segment(self.0, &SINGULAR_RULES)
    }

    fn plural(&self) -> Cow<'a, str> {
        inflect_last_segment(self.0, &PLURAL_RULES)
    }

    fn is_singular(&self) -> bool {
        !self.is_plural()
    }

    fn is_plural(&self) -> bool {
        self.singular() != self.0
    }
}

/// Returns the plural of a noun. See [Noun] for details.
pub fn pluralize(word: &str) -> Cow<'_, str> {
    Noun::new(word).plural()
}

/// Returns the singular of a noun. See [Noun] for details.
pub fn singularize(word: &str) -> Cow<'_, str> {
    Noun::new(word).singular()
}

fn inflect_last_segment<'a>(word: &'a str, rules: &[Rule]) -> Cow<'a, str> {
    let body = word.trim_end_matches('_');
    let tail = &word[body.len()..];
    let (head, last) = match body.rfind('_') {
        Some(idx) => body.split_at(idx + 1),
        None => ("", body),
    };
    if last.is_empty() {
        return Cow::Borrowed(word);
    }

    match apply_rules(last, rules) {
        Cow::Borrowed(_) => Cow::Borrowed(word),
        Cow::Owned(new) if head.is_empty() && tail.is_empty() => Cow::Owned(new),
        Cow::Owned(new) => Cow::Owned(format!("{}{}{}", head, new, tail)),
    }
}

fn apply_rules<'a>(word: &'a str, rules: &[Rule]) -> Cow<'a, str> {
    for rule in rules {
        if let Some(caps) = rule.regex.captures(word) {
            let mut new_word = String::new();
            caps.expand(rule.replacement, &mut new_word);
            if new_word == word {
                return Cow::Borrowed(word);
            }
            #[cfg(feature = "debug")]
            println!(
                r#"  word '{}' matched regex {:?} and became {}"#,
                word, rule.regex, new_word,
            );
            return util::fix_case(word, Cow::Owned(new_word));
        }
    }

    #[cfg(feature = "debug")]
    println!(r#"  word '{}' did not match any rule"#, word);
    Cow::Borrowed(word)
}
