/*!
Transforms for text which ends up in HTML or XML: line breaks, escaping, and
tag-aware truncation.
*/
use crate::{error::Result, text::TruncateOptions, util};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static NEWLINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("Could not parse newline regex"));

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Could not parse tag regex"));

static ENTITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?P<name>amp|lt|gt|quot|#39);").expect("Could not parse entity regex")
});

/// Replaces every newline ("\n", "\r\n", or "\r") with `<br />`.
pub fn nl2br(s: &str) -> Cow<'_, str> {
    NEWLINE_REGEX.replace_all(s, "<br />")
}

/// Escapes `&`, `<`, `>`, `"`, and `'` as XML entities.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// The inverse of [escape_xml]. Entities other than the five it produces
/// are left alone.
pub fn unescape_xml(s: &str) -> Cow<'_, str> {
    ENTITY_REGEX.replace_all(s, |caps: &Captures| {
        match &caps["name"] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            _ => "'",
        }
        .to_string()
    })
}

/// Removes all tags, leaving only the text between them.
pub fn strip_tags(s: &str) -> Cow<'_, str> {
    TAG_REGEX.replace_all(s, "")
}

/// Truncates the text of an HTML fragment. Only text outside of tags counts
/// towards `opts.length`, and every tag is kept, even those following the
/// cut, so that an element opened before the cut is still closed.
pub fn truncate_html<'a>(s: &'a str, opts: &TruncateOptions<'_>) -> Result<Cow<'a, str>> {
    let keep = opts.keep()?;
    if util::char_len(&strip_tags(s)) <= opts.length {
        return Ok(Cow::Borrowed(s));
    }

    let mut truncated = String::with_capacity(s.len());
    let mut remaining = keep;
    let mut done = false;
    let mut push_text = |text: &str, out: &mut String| {
        if done {
            return;
        }
        let len = util::char_len(text);
        if len <= remaining {
            out.push_str(text);
            remaining -= len;
            return;
        }
        out.push_str(opts.cut(text, remaining));
        out.push_str(opts.omission);
        done = true;
    };

    let mut last = 0;
    for tag in TAG_REGEX.find_iter(s) {
        push_text(&s[last..tag.start()], &mut truncated);
        truncated.push_str(tag.as_str());
        last = tag.end();
    }
    push_text(&s[last..], &mut truncated);

    Ok(Cow::Owned(truncated))
}
