// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! People: identity tokens and the per-person record.

use alloc::string::String;
use core::fmt;

/// Stable identity token for a person.
///
/// Ids are opaque strings chosen by the data source (the conventional form is
/// `P0001`, `P0002`, …, but any non-empty token works). Equality is plain
/// string equality; the id carries no other semantics.
///
/// Relations and layout nodes refer to people by id only — see the crate
/// docs on weak references.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PersonId(String);

impl PersonId {
    /// Wraps a string token as a person id.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for PersonId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl PartialEq<str> for PersonId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl core::borrow::Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Recorded gender of a person.
///
/// The rendering layer uses this only to pick a card tint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

/// One individual in the family tree.
///
/// Only `id`, the name parts, and `gender` are required. Dates are opaque
/// ISO-8601 tokens (`YYYY-MM-DD`); this crate never parses them beyond the
/// year prefix used for display.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Person {
    /// Stable identity token, unique within a store.
    pub id: PersonId,
    /// Given name.
    pub given_name: String,
    /// Family name.
    pub surname: String,
    /// Recorded gender.
    pub gender: Gender,
    /// Birth date as an ISO-8601 token, if known.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub birth_date: Option<String>,
    /// Death date as an ISO-8601 token, if known.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub death_date: Option<String>,
    /// Birth place, free-form.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub birth_place: Option<String>,
    /// Free-form notes.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub notes: Option<String>,
    /// Reference to a portrait image (URL or host-defined token).
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub photo: Option<String>,
}

impl Person {
    /// Creates a person with the required fields; the rest start empty.
    pub fn new(
        id: impl Into<PersonId>,
        given_name: impl Into<String>,
        surname: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            id: id.into(),
            given_name: given_name.into(),
            surname: surname.into(),
            gender,
            birth_date: None,
            death_date: None,
            birth_place: None,
            notes: None,
            photo: None,
        }
    }

    /// `given_name` and `surname` joined with a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut name = String::with_capacity(self.given_name.len() + self.surname.len() + 1);
        name.push_str(&self.given_name);
        if !self.surname.is_empty() {
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(&self.surname);
        }
        name
    }

    /// The year prefix of the birth date, if one is recorded.
    #[must_use]
    pub fn birth_year(&self) -> Option<&str> {
        year_of(self.birth_date.as_deref())
    }

    /// The year prefix of the death date, if one is recorded.
    #[must_use]
    pub fn death_year(&self) -> Option<&str> {
        year_of(self.death_date.as_deref())
    }
}

fn year_of(date: Option<&str>) -> Option<&str> {
    let date = date?;
    let year = date.split('-').next().unwrap_or(date);
    (!year.is_empty()).then_some(year)
}

#[cfg(test)]
mod tests {
    use super::{Gender, Person};

    #[test]
    fn full_name_skips_empty_parts() {
        let p = Person::new("P0001", "Ana", "Viera", Gender::Female);
        assert_eq!(p.full_name(), "Ana Viera");

        let mononym = Person::new("P0002", "Teia", "", Gender::Female);
        assert_eq!(mononym.full_name(), "Teia");
    }

    #[test]
    fn years_are_date_prefixes() {
        let mut p = Person::new("P0001", "Ana", "Viera", Gender::Female);
        assert_eq!(p.birth_year(), None);

        p.birth_date = Some("1921-04-03".into());
        p.death_date = Some("2001".into());
        assert_eq!(p.birth_year(), Some("1921"));
        assert_eq!(p.death_year(), Some("2001"));
    }
}
