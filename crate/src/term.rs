//! Provides the [Term] trait, which defines the methods shared by words
//! that have singular and plural forms.

use std::borrow::Cow;

/// This trait is implemented by words which can be inflected for number.
pub trait Term<'a> {
    fn new(word: &'a str) -> Self;

    /// Returns the singular form of the word. If the word is already
    /// singular it returns the word given to `new` without allocating a new
    /// [String](std::string::String).
    fn singular(&self) -> Cow<'a, str>;

    /// Returns the plural form of the word. An all-uppercase word stays
    /// uppercase, so "BOX" becomes "BOXES". Only the last segment of an
    /// underscore-separated identifier is inflected, so "snow_dog" becomes
    /// "snow_dogs".
    fn plural(&self) -> Cow<'a, str>;

    fn is_singular(&self) -> bool;

    fn is_plural(&self) -> bool;
}
