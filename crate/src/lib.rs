// #![deny(missing_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Small, independent string transforms.
//!
//! Every function in this crate is a pure function of its arguments. None of
//! them keep state between calls, so they can be called from any number of
//! threads at once. The only source of nondeterminism is the
//! [uuid](mod@uuid) module, which uses a thread-local random number
//! generator.
//!
//! The functions fall into two groups. The primitives trim, pad, split,
//! reverse, escape, and truncate text. The naming functions convert
//! identifiers between conventions (camelCase, snake_case, dash-case) and
//! derive the singular and plural file, type, and property names for an
//! identifier:
//!
//! ```
//! use stringkit::get_inflections;
//!
//! let inflections = get_inflections("snow_dog").unwrap();
//! assert_eq!(inflections.filename.singular, "snow_dog");
//! assert_eq!(inflections.filename.plural, "snow_dogs");
//! assert_eq!(inflections.constructor.plural, "SnowDogs");
//! assert_eq!(inflections.property.singular, "snowDog");
//! ```
//!
//! Optional arguments are expressed as option structs with a [Default]
//! implementation, such as [PadOptions] and [CamelizeOptions], or as an
//! [Option] where there is only one.
//!
//! Wherever a function may return its input unchanged it returns a
//! [Cow](std::borrow::Cow) so that no new [String] is allocated in that
//! case.
//!
//! # Pluralization
//!
//! Pluralization only knows the rules for regular English nouns. See the
//! [noun] module for the exact rules.
//!
//! # Errors
//!
//! The only error is [Error::InvalidArgument], returned for values a
//! function cannot work with, like an empty identifier or an empty pad
//! string. Functions which cannot fail return their result directly.
//!
//! # Features
//!
//! Enabling the `debug` feature prints a line for every pluralization rule
//! that is tried against a word.

mod util;

pub mod case;
pub mod error;
pub mod inflection;
pub mod markup;
pub mod noun;
pub mod pad;
pub mod term;
pub mod text;
pub mod trim;
pub mod uuid;

pub use crate::{
    case::{
        camelize, capitalize, dasherize, decapitalize, snakeize, underscorize, CamelizeOptions,
    },
    error::{Error, Result},
    inflection::{get_inflection, get_inflections, Forms, InflectionForm, Inflections, Number},
    markup::{escape_xml, nl2br, strip_tags, truncate_html, unescape_xml},
    noun::{pluralize, singularize},
    pad::{lpad, pad, rpad, PadOptions},
    text::{chop, escape_regexp_chars, reverse, to_array, truncate, TruncateOptions},
    trim::{ltrim, rtrim, trim, TrimChars},
    uuid::{uuid, uuid_rfc4122, uuid_with_radix},
};
