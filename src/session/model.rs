use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::serde::{deserialize_null_default, empty_string_as_none};

/// The access level of an authenticated identity.
///
/// Server responses that omit the role hydrate to [`Role::User`]; the field
/// is never left unset.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Superadmin,
}

impl Role {
    /// Returns the role as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Superadmin => "superadmin",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authenticated user held by the [`Session`](crate::session::Session).
///
/// Created on successful sign-in, destroyed on logout or when the backing
/// credential store is cleared.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub token: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub topics: Vec<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub school_name: Option<String>,
}

impl Identity {
    /// A minimal identity with the default role and no profile fields.
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            id: None,
            name: String::new(),
            email: email.into(),
            role: Role::default(),
            token: token.into(),
            topics: Vec::new(),
            mobile: None,
            country: None,
            state: None,
            city: None,
            school_name: None,
        }
    }
}

/// In-progress sign-up form values, mirrored to the credential store after
/// every mutation so a restart doesn't lose them.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    pub name: String,
    pub mobile: String,
    pub country_code: String,
    pub email: String,
    pub date_of_birth: String,
    pub gender: String,
    pub password: String,
    pub confirm_password: String,
    pub country: String,
    pub country_short_name: String,
    pub state: String,
    pub city: String,
    pub school_name: String,
    pub new_school_name: String,
    pub terms_accepted: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identity_without_role_defaults_to_user() {
        let identity: Identity =
            serde_json::from_str(r#"{"email":"a@b.com","token":"t1"}"#).unwrap();
        assert_eq!(identity.role, Role::User);
        assert_eq!(identity.email, "a@b.com");
    }

    #[test]
    fn identity_with_null_fields() {
        let identity: Identity = serde_json::from_str(
            r#"{"_id":"68b9","name":null,"email":"a@b.com","role":"superadmin","token":"t1","topics":null,"mobile":""}"#,
        )
        .unwrap();
        assert_eq!(identity.id.as_deref(), Some("68b9"));
        assert_eq!(identity.role, Role::Superadmin);
        assert!(identity.name.is_empty());
        assert!(identity.topics.is_empty());
        assert_eq!(identity.mobile, None);
    }

    #[test]
    fn draft_round_trips_camel_case() {
        let mut draft = RegistrationDraft::default();
        draft.date_of_birth = "2008-04-12".to_string();
        draft.terms_accepted = true;

        let raw = serde_json::to_value(&draft).unwrap();
        assert_eq!(raw["dateOfBirth"], "2008-04-12");
        assert_eq!(raw["termsAccepted"], true);

        let back: RegistrationDraft = serde_json::from_value(raw).unwrap();
        assert_eq!(back, draft);
    }
}
