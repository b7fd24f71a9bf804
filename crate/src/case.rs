//! Converting identifiers between naming conventions.
//!
//! # Examples
//!
//! ```
//! use stringkit::case::{camelize, dasherize, snakeize, CamelizeOptions};
//!
//! assert_eq!(snakeize("geddyJs"), "geddy_js");
//! assert_eq!(dasherize("geddyJs", None), "geddy-js");
//!
//! let opts = CamelizeOptions { initial_cap: true, ..CamelizeOptions::default() };
//! assert_eq!(camelize("geddy_js", &opts), "GeddyJs");
//! ```
use std::borrow::Cow;

/// Options for [camelize]. Both default to `false`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CamelizeOptions {
    /// Uppercase the first letter of the result too, producing a type name
    /// like "GeddyJs" instead of "geddyJs".
    pub initial_cap: bool,
    /// Keep a single leading underscore, so "_geddy_js" becomes "_geddyJs"
    /// rather than "GeddyJs".
    pub leading_underscore: bool,
}

impl CamelizeOptions {
    /// Options for a type name: initial cap, no leading underscore.
    pub fn initial_cap() -> Self {
        Self {
            initial_cap: true,
            ..Self::default()
        }
    }
}

/// Uppercases the first char of a string.
pub fn capitalize(s: &str) -> Cow<'_, str> {
    map_first_char(s, char::is_uppercase, |c| c.to_uppercase().collect())
}

/// Lowercases the first char of a string.
pub fn decapitalize(s: &str) -> Cow<'_, str> {
    map_first_char(s, char::is_lowercase, |c| c.to_lowercase().collect())
}

fn map_first_char(
    s: &str,
    is_done: fn(char) -> bool,
    convert: fn(char) -> String,
) -> Cow<'_, str> {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if !is_done(c) => {
            let mut converted = convert(c);
            if converted.chars().eq(std::iter::once(c)) {
                return Cow::Borrowed(s);
            }
            converted.push_str(chars.as_str());
            Cow::Owned(converted)
        }
        _ => Cow::Borrowed(s),
    }
}

/// Turns an underscore-separated identifier into camelCase. The first
/// letter of each segment after the first is uppercased, and nothing is
/// lowercased.
pub fn camelize(s: &str, opts: &CamelizeOptions) -> String {
    let (prefix, rest) = match s.strip_prefix('_') {
        Some(rest) if opts.leading_underscore && !rest.starts_with('_') => ("_", rest),
        _ => ("", s),
    };

    let mut camelized = String::with_capacity(s.len());
    camelized.push_str(prefix);
    for (i, segment) in rest.split('_').enumerate() {
        if i == 0 && !opts.initial_cap {
            camelized.push_str(segment);
        } else {
            camelized.push_str(&capitalize(segment));
        }
    }
    camelized
}

/// Turns a camelCase identifier into snake_case.
pub fn snakeize(s: &str) -> String {
    separate_words(s, "_")
}

/// Turns a camelCase identifier into dash-case, or uses `replace` as the
/// separator if it is given.
pub fn dasherize(s: &str, replace: Option<&str>) -> String {
    separate_words(s, replace.unwrap_or("-"))
}

/// Same as `dasherize(s, Some("_"))`.
pub fn underscorize(s: &str) -> String {
    dasherize(s, Some("_"))
}

// Every uppercase char except the first starts a new word. Runs of capitals
// are not treated as acronyms, so "XMLHttp" becomes "x_m_l_http".
fn separate_words(s: &str, separator: &str) -> String {
    let mut separated = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                separated.push_str(separator);
            }
            separated.extend(c.to_lowercase());
        } else {
            separated.push(c);
        }
    }
    separated
}

#[cfg(test)]
mod tests {
    use super::CamelizeOptions;
    use std::borrow::Cow;

    #[test]
    fn capitalize() {
        let tests = [
            ("geddy", "Geddy"),
            ("Geddy", "Geddy"),
            ("geddy js", "Geddy js"),
            ("g", "G"),
            ("", ""),
            ("_geddy", "_geddy"),
            ("éclair", "Éclair"),
        ];
        for test in tests {
            assert_eq!(super::capitalize(test.0), test.1);
            assert_eq!(super::capitalize(&super::capitalize(test.0)), test.1);
        }
    }

    #[test]
    fn decapitalize() {
        let tests = [
            ("Geddy", "geddy"),
            ("geddy", "geddy"),
            ("GEDDY", "gEDDY"),
            ("", ""),
        ];
        for test in tests {
            assert_eq!(super::decapitalize(test.0), test.1);
        }
    }

    #[test]
    fn unchanged_is_borrowed() {
        for s in [
            super::capitalize("Geddy"),
            super::capitalize("_geddy"),
            super::decapitalize("geddy"),
        ] {
            let ok = match s {
                Cow::Borrowed(_) => true,
                Cow::Owned(_) => false,
            };
            assert!(ok, "a string which needs no change comes back as a Cow::Borrowed");
        }
    }

    #[test]
    fn camelize() {
        let tests = [
            ("geddy_js", "geddyJs"),
            ("geddy", "geddy"),
            ("snow_dog_house", "snowDogHouse"),
            ("geddy_JS", "geddyJS"),
            ("Geddy_js", "GeddyJs"),
            ("_geddy_js", "GeddyJs"),
            ("geddy__js", "geddyJs"),
            ("geddy_js_", "geddyJs"),
            ("", ""),
        ];
        for test in tests {
            assert_eq!(
                super::camelize(test.0, &CamelizeOptions::default()),
                test.1,
                "camelize({})",
                test.0,
            );
        }
    }

    #[test]
    fn camelize_with_initial_cap() {
        let opts = CamelizeOptions::initial_cap();
        assert_eq!(super::camelize("geddy_js", &opts), "GeddyJs");
        assert_eq!(super::camelize("snow_dog", &opts), "SnowDog");
    }

    #[test]
    fn camelize_with_leading_underscore() {
        let opts = CamelizeOptions {
            leading_underscore: true,
            ..CamelizeOptions::default()
        };
        assert_eq!(super::camelize("geddy_js", &opts), "geddyJs");
        assert_eq!(super::camelize("_geddy_js", &opts), "_geddyJs");
        // Only a single underscore is kept.
        assert_eq!(super::camelize("__geddy_js", &opts), "GeddyJs");

        let opts = CamelizeOptions {
            initial_cap: true,
            leading_underscore: true,
        };
        assert_eq!(super::camelize("_geddy_js", &opts), "_GeddyJs");
    }

    #[test]
    fn snakeize() {
        let tests = [
            ("geddyJs", "geddy_js"),
            ("GeddyJs", "geddy_js"),
            ("geddy", "geddy"),
            ("snow_dog", "snow_dog"),
            ("SnowDogHouse", "snow_dog_house"),
            ("XMLHttp", "x_m_l_http"),
            ("", ""),
        ];
        for test in tests {
            assert_eq!(super::snakeize(test.0), test.1);
        }
    }

    #[test]
    fn dasherize() {
        assert_eq!(super::dasherize("geddyJs", None), "geddy-js");
        assert_eq!(super::dasherize("geddyJs", Some("_")), "geddy_js");
        assert_eq!(super::dasherize("GeddyJsRocks", None), "geddy-js-rocks");
        assert_eq!(super::dasherize("geddyJs", Some("::")), "geddy::js");
    }

    #[test]
    fn underscorize() {
        assert_eq!(super::underscorize("geddyJs"), "geddy_js");
        assert_eq!(super::underscorize("GeddyJs"), "geddy_js");
    }
}
