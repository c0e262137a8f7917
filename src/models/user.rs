//! Accounts: listeners/creators and record labels.

use serde::{Deserialize, Serialize};

use super::common::{id_string, lenient_string, require};
use crate::error::Result;

/// A logged-in or registered user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Email address; also the login name.
    pub email: String,

    /// Display name.
    #[serde(default, alias = "nama", deserialize_with = "lenient_string")]
    pub name: String,

    /// Gender as the backend encodes it.
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: String,

    /// Place of birth.
    #[serde(default, alias = "tempat_lahir", deserialize_with = "lenient_string")]
    pub birth_place: String,

    /// Date of birth, `YYYY-MM-DD`.
    #[serde(default, alias = "tanggal_lahir", deserialize_with = "lenient_string")]
    pub birth_date: String,

    /// Home town.
    #[serde(default, alias = "kota_asal", deserialize_with = "lenient_string")]
    pub city: String,

    /// Whether the account is verified.
    #[serde(default)]
    pub is_verified: bool,

    /// Whether the user has an active premium subscription.
    #[serde(default)]
    pub is_premium: bool,

    /// Artist role.
    #[serde(default)]
    pub is_artist: bool,

    /// Songwriter role.
    #[serde(default)]
    pub is_songwriter: bool,

    /// Podcaster role.
    #[serde(default)]
    pub is_podcaster: bool,

    /// Set when the account is a record label rather than a person.
    #[serde(default)]
    pub is_label: bool,
}

impl User {
    /// Names of the creator roles held by this user.
    pub fn roles(&self) -> Vec<&'static str> {
        [
            (self.is_artist, "artist"),
            (self.is_songwriter, "songwriter"),
            (self.is_podcaster, "podcaster"),
        ]
        .into_iter()
        .filter_map(|(held, name)| held.then_some(name))
        .collect()
    }

    /// Listener, premium listener, or label.
    pub fn account_kind(&self) -> &'static str {
        if self.is_label {
            "label"
        } else if self.is_premium {
            "premium"
        } else {
            "free"
        }
    }
}

/// A record label.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Label {
    /// Label id.
    #[serde(default, deserialize_with = "id_string")]
    pub id: String,

    /// Label name.
    #[serde(default, alias = "nama", deserialize_with = "lenient_string")]
    pub name: String,

    /// Contact email.
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,

    /// Contact phone or address.
    #[serde(default, alias = "kontak", deserialize_with = "lenient_string")]
    pub contact: String,
}

/// Sign-up form for a person.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub gender: String,
    pub birth_place: String,
    pub birth_date: String,
    pub city: String,
    /// Creator roles to request: `artist`, `songwriter`, `podcaster`.
    pub roles: Vec<String>,
}

impl RegisterUser {
    pub(crate) fn validate(&self) -> Result<()> {
        require("email", &self.email)?;
        require("password", &self.password)?;
        require("name", &self.name)?;
        require("gender", &self.gender)?;
        require("birth_place", &self.birth_place)?;
        require("birth_date", &self.birth_date)?;
        require("city", &self.city)
    }
}

/// Sign-up form for a record label.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RegisterLabel {
    pub email: String,
    pub password: String,
    pub name: String,
    pub contact: String,
}

impl RegisterLabel {
    pub(crate) fn validate(&self) -> Result<()> {
        require("email", &self.email)?;
        require("password", &self.password)?;
        require("name", &self.name)?;
        require("contact", &self.contact)
    }
}
