//! Padding a string out to a given width.
//!
//! The pad string is repeated as often as needed. If the space to fill is
//! not a multiple of the pad string's length, the last repetition is cut
//! short, so the result never overshoots the requested width. Widths are
//! counted in chars.
//!
//! # Examples
//!
//! ```
//! use stringkit::pad::{lpad, pad, rpad, PadOptions};
//!
//! let opts = PadOptions { pad: "&", width: Some(7) };
//! assert_eq!(lpad("geddy", &opts).unwrap(), "&&geddy");
//! assert_eq!(rpad("geddy", &opts).unwrap(), "geddy&&");
//! assert_eq!(pad("geddy", &opts).unwrap(), "&geddy&");
//!
//! // Without a width there is nothing to do.
//! assert_eq!(lpad("geddy", &PadOptions::default()).unwrap(), "geddy");
//! ```
use crate::{
    error::{Error, Result},
    util,
};
use std::borrow::Cow;

/// How to pad a string.
#[derive(Clone, Debug, PartialEq)]
pub struct PadOptions<'a> {
    /// The string to pad with. Defaults to a single space.
    pub pad: &'a str,
    /// The width of the padded string. When this is `None`, or not greater
    /// than the length of the string, the string is returned as-is.
    pub width: Option<usize>,
}

impl Default for PadOptions<'_> {
    fn default() -> Self {
        Self {
            pad: " ",
            width: None,
        }
    }
}

impl<'p> PadOptions<'p> {
    /// Pads with spaces to `width`.
    pub fn width(width: usize) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    /// Returns the number of chars needed to bring `s` to the requested
    /// width, or `None` if `s` is already wide enough.
    fn deficit(&self, s: &str) -> Result<Option<usize>> {
        let width = match self.width {
            Some(w) => w,
            None => return Ok(None),
        };
        let len = util::char_len(s);
        if width <= len {
            return Ok(None);
        }
        if self.pad.is_empty() {
            return Err(Error::invalid_argument(
                "pad",
                format!("cannot pad to width {} with an empty string", width),
            ));
        }
        Ok(Some(width - len))
    }
}

/// Pads `s` on the left.
pub fn lpad<'a>(s: &'a str, opts: &PadOptions<'_>) -> Result<Cow<'a, str>> {
    Ok(match opts.deficit(s)? {
        None => Cow::Borrowed(s),
        Some(n) => Cow::Owned(util::repeat_to_width(opts.pad, n) + s),
    })
}

/// Pads `s` on the right.
pub fn rpad<'a>(s: &'a str, opts: &PadOptions<'_>) -> Result<Cow<'a, str>> {
    Ok(match opts.deficit(s)? {
        None => Cow::Borrowed(s),
        Some(n) => {
            let mut padded = s.to_string();
            padded.push_str(&util::repeat_to_width(opts.pad, n));
            Cow::Owned(padded)
        }
    })
}

/// Pads `s` on both sides, centering it. When the padding cannot be split
/// evenly the extra char goes on the right.
pub fn pad<'a>(s: &'a str, opts: &PadOptions<'_>) -> Result<Cow<'a, str>> {
    Ok(match opts.deficit(s)? {
        None => Cow::Borrowed(s),
        Some(n) => {
            let left = n / 2;
            let mut padded = util::repeat_to_width(opts.pad, left);
            padded.push_str(s);
            padded.push_str(&util::repeat_to_width(opts.pad, n - left));
            Cow::Owned(padded)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::PadOptions;
    use crate::error::Error;
    use std::borrow::Cow;

    fn amp(width: Option<usize>) -> PadOptions<'static> {
        PadOptions { pad: "&", width }
    }

    #[test]
    fn lpad() {
        assert_eq!(super::lpad("geddy", &amp(Some(7))).unwrap(), "&&geddy");
        assert_eq!(super::lpad("geddy", &amp(None)).unwrap(), "geddy");
        assert_eq!(super::lpad("geddy", &PadOptions::default()).unwrap(), "geddy");
        assert_eq!(super::lpad("geddy", &PadOptions::width(7)).unwrap(), "  geddy");
        assert_eq!(super::lpad("geddy", &amp(Some(5))).unwrap(), "geddy");
        assert_eq!(super::lpad("geddy", &amp(Some(3))).unwrap(), "geddy");
    }

    #[test]
    fn rpad() {
        assert_eq!(super::rpad("geddy", &amp(Some(7))).unwrap(), "geddy&&");
        assert_eq!(super::rpad("geddy", &amp(None)).unwrap(), "geddy");
        assert_eq!(super::rpad("geddy", &PadOptions::default()).unwrap(), "geddy");
    }

    #[test]
    fn pad() {
        assert_eq!(super::pad("geddy", &amp(Some(7))).unwrap(), "&geddy&");
        assert_eq!(super::pad("geddy", &amp(Some(8))).unwrap(), "&geddy&&");
        assert_eq!(super::pad("geddy", &amp(None)).unwrap(), "geddy");
        assert_eq!(super::pad("geddy", &PadOptions::default()).unwrap(), "geddy");
    }

    #[test]
    fn multi_char_pad_is_truncated() {
        let opts = PadOptions {
            pad: "ab",
            width: Some(8),
        };
        assert_eq!(super::lpad("geddy", &opts).unwrap(), "abageddy");
        assert_eq!(super::rpad("geddy", &opts).unwrap(), "geddyaba");
        assert_eq!(super::pad("geddy", &opts).unwrap(), "ageddyab");
    }

    #[test]
    fn width_counts_chars() {
        assert_eq!(super::lpad("héllo", &amp(Some(6))).unwrap(), "&héllo");
    }

    #[test]
    fn unchanged_is_borrowed() {
        let ok = match super::pad("geddy", &amp(Some(2))).unwrap() {
            Cow::Borrowed(_) => true,
            Cow::Owned(_) => false,
        };
        assert!(ok, "pad returns a Cow::Borrowed when no padding is needed");
    }

    #[test]
    fn empty_pad() {
        let opts = PadOptions {
            pad: "",
            width: Some(7),
        };
        assert!(matches!(
            super::lpad("geddy", &opts),
            Err(Error::InvalidArgument { name: "pad", .. })
        ));
        assert!(matches!(
            super::rpad("geddy", &opts),
            Err(Error::InvalidArgument { name: "pad", .. })
        ));
        assert!(matches!(
            super::pad("geddy", &opts),
            Err(Error::InvalidArgument { name: "pad", .. })
        ));

        // An empty pad is fine when no padding is needed.
        let opts = PadOptions {
            pad: "",
            width: Some(3),
        };
        assert_eq!(super::lpad("geddy", &opts).unwrap(), "geddy");
    }
}
