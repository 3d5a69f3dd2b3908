use serde::Deserialize;

use crate::serde::{deserialize_null_default, empty_string_as_none};

/// A country the sign-up form offers, with its dial code.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub short_name: Option<String>,
    /// International dial code without the leading `+`.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct CountryList {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub countries: Vec<Country>,
}
