use std::borrow::Cow;

/// The number of chars (not bytes) in a string. All widths and lengths in
/// this crate are measured this way.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Returns the first `n` chars of `s`, or all of `s` if it is shorter.
pub(crate) fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Builds a string of exactly `width` chars by repeating `unit`. The last
/// repetition is cut short if `width` is not a multiple of its length.
pub(crate) fn repeat_to_width(unit: &str, width: usize) -> String {
    unit.chars().cycle().take(width).collect()
}

// A single letter like "A" says nothing about the casing of a word, so an
// uppercase word needs at least two letters.
pub(crate) fn is_uppercase(word: &str) -> bool {
    let mut letters = 0;
    for c in word.chars().filter(|c| c.is_alphabetic()) {
        if !c.is_uppercase() {
            return false;
        }
        letters += 1;
    }
    letters > 1
}

/// Makes an inflected word follow the casing of the word it came from. The
/// inflection rules always add lowercase suffixes, so only an all-uppercase
/// original needs fixing ("BOX" => "BOXES", not "BOXes").
pub(crate) fn fix_case<'a>(orig: &str, new: Cow<'a, str>) -> Cow<'a, str> {
    if is_uppercase(orig) && !is_uppercase(&new) {
        return Cow::Owned(new.to_uppercase());
    }
    new
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    #[test]
    fn char_prefix() {
        let tests = [
            ("geddy", 0, ""),
            ("geddy", 3, "ged"),
            ("geddy", 5, "geddy"),
            ("geddy", 10, "geddy"),
            ("héllo", 2, "hé"),
        ];
        for test in tests {
            assert_eq!(super::char_prefix(test.0, test.1), test.2);
        }
    }

    #[test]
    fn repeat_to_width() {
        let tests = [
            ("&", 0, ""),
            ("&", 3, "&&&"),
            ("ab", 3, "aba"),
            ("abc", 2, "ab"),
        ];
        for test in tests {
            assert_eq!(super::repeat_to_width(test.0, test.1), test.2);
        }
    }

    #[test]
    fn casing() {
        assert!(super::is_uppercase("DOG"));
        assert!(super::is_uppercase("SNOW_DOG"));
        assert!(!super::is_uppercase("A"));
        assert!(!super::is_uppercase("Dog"));
    }

    #[test]
    fn fix_case() {
        let tests = [
            ("dog", "dogs", "dogs"),
            ("Dog", "Dogs", "Dogs"),
            ("DOG", "DOGs", "DOGS"),
            ("BOX", "BOXes", "BOXES"),
            ("A", "As", "As"),
        ];
        for test in tests {
            assert_eq!(
                super::fix_case(test.0, Cow::Borrowed(test.1)),
                test.2,
                "fix_case({}, {}) = {}",
                test.0,
                test.1,
                test.2,
            );
        }

        let ok = match super::fix_case("dog", Cow::Borrowed("dogs")) {
            Cow::Borrowed(_) => true,
            Cow::Owned(_) => false,
        };
        assert!(ok, "fix_case returns a Cow::Borrowed when it does not change the new string");
    }
}
