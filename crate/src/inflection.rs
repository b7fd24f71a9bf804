//! Naming forms for a single identifier.
//!
//! Given a base name like "snow_dog", [get_inflections] derives the names
//! code typically needs for it: a file name, a type (constructor) name, and
//! a property name, each in singular and plural.
//!
//! # Examples
//!
//! ```
//! use stringkit::inflection::{get_inflection, get_inflections, InflectionForm, Number};
//!
//! let inflections = get_inflections("snow_dog").unwrap();
//! assert_eq!(inflections.filename.plural, "snow_dogs");
//! assert_eq!(inflections.constructor.singular, "SnowDog");
//! assert_eq!(inflections.property.plural, "snowDogs");
//!
//! let name = get_inflection("SnowDog", InflectionForm::Property, Number::Plural).unwrap();
//! assert_eq!(name, "snowDogs");
//! ```
use crate::{
    case::{self, CamelizeOptions},
    error::{Error, Result},
    noun,
};
use std::str::FromStr;

/// A singular and plural pair of names.
#[derive(Clone, Debug, PartialEq)]
pub struct Forms {
    pub singular: String,
    pub plural: String,
}

impl Forms {
    pub fn get(&self, number: Number) -> &str {
        match number {
            Number::Singular => &self.singular,
            Number::Plural => &self.plural,
        }
    }
}

/// Every naming form of an identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct Inflections {
    /// snake_case, like "snow_dog" and "snow_dogs".
    pub filename: Forms,
    /// Type name case, like "SnowDog" and "SnowDogs".
    pub constructor: Forms,
    /// camelCase, like "snowDog" and "snowDogs".
    pub property: Forms,
}

impl Inflections {
    pub fn get(&self, form: InflectionForm, number: Number) -> &str {
        match form {
            InflectionForm::Filename => self.filename.get(number),
            InflectionForm::Constructor => self.constructor.get(number),
            InflectionForm::Property => self.property.get(number),
        }
    }
}

/// Selects one of the naming forms in an [Inflections].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InflectionForm {
    Filename,
    Constructor,
    Property,
}

impl FromStr for InflectionForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "filename" => Ok(InflectionForm::Filename),
            "constructor" => Ok(InflectionForm::Constructor),
            "property" => Ok(InflectionForm::Property),
            _ => Err(Error::invalid_argument(
                "form",
                format!("`{}` is not one of filename, constructor, or property", s),
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Singular,
    Plural,
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "singular" => Ok(Number::Singular),
            "plural" => Ok(Number::Plural),
            _ => Err(Error::invalid_argument(
                "number",
                format!("`{}` is not singular or plural", s),
            )),
        }
    }
}

/// Derives all naming forms from `name`. The name is first converted to
/// snake_case, which becomes the singular file name. Everything else is
/// derived from that and its plural.
///
/// Returns an error if `name` is empty or contains nothing but
/// underscores.
pub fn get_inflections(name: &str) -> Result<Inflections> {
    if name.is_empty() {
        return Err(Error::invalid_argument("name", "must not be empty"));
    }

    let singular = case::snakeize(name);
    if !singular.contains(|c: char| c != '_') {
        return Err(Error::invalid_argument(
            "name",
            format!("`{}` does not contain a word", name),
        ));
    }
    let plural = noun::pluralize(&singular).into_owned();

    let type_name = CamelizeOptions::initial_cap();
    let property_name = CamelizeOptions::default();
    Ok(Inflections {
        constructor: Forms {
            singular: case::camelize(&singular, &type_name),
            plural: case::camelize(&plural, &type_name),
        },
        property: Forms {
            singular: case::camelize(&singular, &property_name),
            plural: case::camelize(&plural, &property_name),
        },
        filename: Forms { singular, plural },
    })
}

/// Returns a single naming form of `name`.
pub fn get_inflection(name: &str, form: InflectionForm, number: Number) -> Result<String> {
    Ok(get_inflections(name)?.get(form, number).to_string())
}
