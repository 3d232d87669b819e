/// Shared data structures for the application state
///
/// These structs mirror the person objects returned by the people API
/// (`results[]` in the response envelope). Every section is optional on the
/// wire: a missing section decodes to its placeholder default instead of
/// failing the whole batch.

use chrono::DateTime;
use serde::Deserialize;
use std::fmt;

/// Shown in the detail card when a field is absent from the payload
pub const PLACEHOLDER: &str = "n/a";

/// Represents a single person in the roster
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Person {
    pub name: Name,
    pub email: String,
    pub phone: String,
    pub cell: String,
    pub location: Location,
    pub picture: Picture,
    pub dob: DateOfBirth,
    /// Nationality code (e.g. "US")
    pub nat: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Postcode,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

/// Postal code: the API sends a number for some nationalities
/// and a string (e.g. "EC1A 1BB") for others
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Postcode {
    Number(u64),
    Text(String),
}

impl Default for Postcode {
    fn default() -> Self {
        Postcode::Text(String::new())
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Number(n) => write!(f, "{}", n),
            Postcode::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Portrait URLs in three sizes
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DateOfBirth {
    /// ISO-8601 timestamp, e.g. "1992-03-08T15:13:16.688Z"
    pub date: String,
    pub age: u32,
}

impl Person {
    /// "First Last", the string the search filter matches against
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
            .trim()
            .to_string()
    }

    /// Full name with each word capitalized for display
    pub fn display_name(&self) -> String {
        capitalize_words(&self.full_name())
    }

    /// "City, State" line shown on the gallery card
    pub fn city_state(&self) -> String {
        match (self.location.city.is_empty(), self.location.state.is_empty()) {
            (false, false) => capitalize_words(&format!(
                "{}, {}",
                self.location.city, self.location.state
            )),
            (false, true) => capitalize_words(&self.location.city),
            (true, false) => capitalize_words(&self.location.state),
            (true, true) => PLACEHOLDER.to_string(),
        }
    }

    /// "8929 Valwood Pkwy, Billings, Michigan 63104"
    pub fn address_line(&self) -> String {
        let loc = &self.location;
        let mut parts = Vec::new();

        let street = match (loc.street.number, loc.street.name.is_empty()) {
            (0, true) => String::new(),
            (0, false) => loc.street.name.clone(),
            (n, true) => n.to_string(),
            (n, false) => format!("{} {}", n, loc.street.name),
        };
        if !street.is_empty() {
            parts.push(capitalize_words(&street));
        }
        if !loc.city.is_empty() {
            parts.push(capitalize_words(&loc.city));
        }

        let region = format!("{} {}", capitalize_words(&loc.state), loc.postcode)
            .trim()
            .to_string();
        if !region.is_empty() {
            parts.push(region);
        }

        if parts.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Birthday as MM/DD/YYYY, or None if the timestamp is missing or unparseable
    pub fn birthday(&self) -> Option<String> {
        DateTime::parse_from_rfc3339(&self.dob.date)
            .ok()
            .map(|dt| dt.format("%m/%d/%Y").to_string())
    }

    /// Phone number, falling back to the cell number
    pub fn contact_phone(&self) -> &str {
        if !self.phone.is_empty() {
            &self.phone
        } else if !self.cell.is_empty() {
            &self.cell
        } else {
            PLACEHOLDER
        }
    }
}

/// Uppercase the first letter of every whitespace-separated word
pub fn capitalize_words(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
