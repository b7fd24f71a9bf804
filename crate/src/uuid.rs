//! Random identifiers.
//!
//! These are meant for things like temporary ids and file names. They are
//! not suitable for anything security related.
//!
//! # Examples
//!
//! ```
//! use stringkit::uuid::{uuid, uuid_rfc4122, uuid_with_radix};
//!
//! assert_eq!(uuid(Some(5)).len(), 5);
//! assert_eq!(uuid(None).len(), 32);
//!
//! let hex = uuid_with_radix(8, 16).unwrap();
//! assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
//!
//! assert_eq!(uuid_rfc4122().len(), 36);
//! ```
use crate::error::{Error, Result};
use rand::Rng;

const CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// The length of [uuid] when no length is given.
pub const DEFAULT_UUID_LENGTH: usize = 32;

/// Returns a random alphanumeric string of `length` chars, or
/// [DEFAULT_UUID_LENGTH] chars if `length` is `None`.
pub fn uuid(length: Option<usize>) -> String {
    random_chars(length.unwrap_or(DEFAULT_UUID_LENGTH), CHARS)
}

/// Returns a random string of `length` chars drawn from the first `radix`
/// chars of "0-9A-Za-z", so a radix of 16 gives uppercase hex and a radix
/// of 2 gives binary.
pub fn uuid_with_radix(length: usize, radix: usize) -> Result<String> {
    if !(2..=CHARS.len()).contains(&radix) {
        return Err(Error::invalid_argument(
            "radix",
            format!("{} is not between 2 and {}", radix, CHARS.len()),
        ));
    }
    Ok(random_chars(length, &CHARS[..radix]))
}

/// Returns a random id laid out like an RFC 4122 version 4 UUID, for
/// example "92329D39-6F5C-4520-ABFC-AAB64544E172".
pub fn uuid_rfc4122() -> String {
    let mut rng = rand::thread_rng();
    (0..36)
        .map(|i| match i {
            8 | 13 | 18 | 23 => '-',
            14 => '4',
            // The variant field must be one of 8, 9, A, or B.
            19 => CHARS[(rng.gen_range(0..16usize) & 0x3) | 0x8] as char,
            _ => CHARS[rng.gen_range(0..16usize)] as char,
        })
        .collect()
}

fn random_chars(length: usize, alphabet: &[u8]) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}
