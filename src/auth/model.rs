use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::serde::empty_string_as_none;
use crate::session::RegistrationDraft;

/// Which sign-up flow a registration goes through. Students are tied to a
/// school, everyone else is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Student,
    Other,
}

impl UserType {
    pub(crate) fn endpoint(self) -> &'static str {
        match self {
            UserType::Student => "/auth/register-student",
            UserType::Other => "/auth/register-other",
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Other => "other",
        }
    }

    pub(crate) fn is_school_student(self) -> bool {
        matches!(self, UserType::Student)
    }
}

/// A sign-up submission. Validated client-side before any network call.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterRequest {
    pub user_type: UserType,
    pub name: String,
    /// National number without the dial code; the dial code is prepended on
    /// the wire.
    pub mobile: String,
    pub country_code: String,
    pub email: String,
    /// `YYYY-MM-DD`, as the sign-up form collects it.
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

impl RegisterRequest {
    /// Picks up a persisted [`RegistrationDraft`] where the sign-up form
    /// left off.
    pub fn from_draft(user_type: UserType, draft: &RegistrationDraft) -> Self {
        Self {
            user_type,
            name: draft.name.clone(),
            mobile: draft.mobile.clone(),
            country_code: draft.country_code.clone(),
            email: draft.email.clone(),
            date_of_birth: draft.date_of_birth.clone(),
            gender: draft.gender.clone(),
            password: draft.password.clone(),
            confirm_password: draft.confirm_password.clone(),
            country: draft.country.clone(),
            country_short_name: draft.country_short_name.clone(),
            state: draft.state.clone(),
            city: draft.city.clone(),
            school_name: draft.school_name.clone(),
            new_school_name: draft.new_school_name.clone(),
            terms_accepted: draft.terms_accepted,
        }
    }

    /// Required-field checks, mirroring what the sign-up form enforces
    /// before submission.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.trim().is_empty() {
            errors.push("name", "Name is required");
        }
        if self.mobile.trim().is_empty() {
            errors.push("mobile", "Mobile number is required");
        }
        if self.email.trim().is_empty() {
            errors.push("email", "Email is required");
        }
        if self.date_of_birth.trim().is_empty() {
            errors.push("dateOfBirth", "Date of birth is required");
        } else if NaiveDate::parse_from_str(self.date_of_birth.trim(), "%Y-%m-%d").is_err() {
            errors.push("dateOfBirth", "Enter a valid date of birth");
        }
        if self.gender.trim().is_empty() {
            errors.push("gender", "Gender is required");
        }
        if self.password.is_empty() {
            errors.push("password", "Password is required");
        }
        if self.password != self.confirm_password {
            errors.push("confirmPassword", "Passwords don't match");
        }
        if self.country.trim().is_empty() {
            errors.push("country", "Country is required");
        }
        if self.state.trim().is_empty() {
            errors.push("state", "State is required");
        }
        if self.city.trim().is_empty() {
            errors.push("city", "City is required");
        }
        if self.user_type == UserType::Student && self.school_name.trim().is_empty() {
            errors.push("schoolName", "School name is required");
        }
        if !self.terms_accepted {
            errors.push("termsAccepted", "Please accept terms and conditions");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// The wire form of a registration; derived from [`RegisterRequest`] with
/// the dial code folded into the mobile number.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterPayload<'a> {
    pub name: &'a str,
    pub mobile: String,
    pub country_code: &'a str,
    pub email: &'a str,
    pub date_of_birth: &'a str,
    pub gender: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub country: &'a str,
    pub country_short_name: &'a str,
    pub state: &'a str,
    pub city: &'a str,
    pub school_name: &'a str,
    pub new_school_name: &'a str,
    pub terms_accepted: bool,
    pub user_type: &'static str,
    pub is_school_student: bool,
}

impl<'a> From<&'a RegisterRequest> for RegisterPayload<'a> {
    fn from(req: &'a RegisterRequest) -> Self {
        Self {
            name: &req.name,
            mobile: format!("{}{}", req.country_code, req.mobile),
            country_code: &req.country_code,
            email: &req.email,
            date_of_birth: &req.date_of_birth,
            gender: &req.gender,
            password: &req.password,
            confirm_password: &req.confirm_password,
            country: &req.country,
            country_short_name: &req.country_short_name,
            state: &req.state,
            city: &req.city,
            school_name: &req.school_name,
            new_school_name: &req.new_school_name,
            terms_accepted: req.terms_accepted,
            user_type: req.user_type.as_str(),
            is_school_student: req.user_type.is_school_student(),
        }
    }
}

/// The `{ success, message }` shape the backend uses for acknowledgement
/// responses.
#[derive(Deserialize, Debug)]
pub struct Status {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub message: Option<String>,
}

/// Sign-in credentials for the super-admin console.
#[derive(Deserialize, Debug)]
pub(crate) struct SuperAdminSignIn {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub email: Option<String>,
    pub token: String,
}

#[cfg(test)]
mod test {
    use super::*;

    fn filled_request() -> RegisterRequest {
        RegisterRequest {
            user_type: UserType::Student,
            name: "Asha".to_string(),
            mobile: "9876543210".to_string(),
            country_code: "+91".to_string(),
            email: "asha@example.com".to_string(),
            date_of_birth: "2008-04-12".to_string(),
            gender: "female".to_string(),
            password: "hunter2!".to_string(),
            confirm_password: "hunter2!".to_string(),
            country: "India".to_string(),
            country_short_name: "IN".to_string(),
            state: "Kerala".to_string(),
            city: "Kochi".to_string(),
            school_name: "St. Mary's".to_string(),
            new_school_name: String::new(),
            terms_accepted: true,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(filled_request().validate().is_ok());
    }

    #[test]
    fn password_mismatch_is_flagged() {
        let mut req = filled_request();
        req.confirm_password = "different".to_string();
        let errors = req.validate().unwrap_err();
        assert!(errors
            .errors()
            .iter()
            .any(|e| e.field == "confirmPassword"));
    }

    #[test]
    fn school_required_for_students_only() {
        let mut req = filled_request();
        req.school_name.clear();
        assert!(req.validate().is_err());

        req.user_type = UserType::Other;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn garbled_date_is_flagged() {
        let mut req = filled_request();
        req.date_of_birth = "12/04/2008".to_string();
        let errors = req.validate().unwrap_err();
        assert!(errors.errors().iter().any(|e| e.field == "dateOfBirth"));
    }

    #[test]
    fn payload_combines_dial_code_and_mobile() {
        let req = filled_request();
        let payload = RegisterPayload::from(&req);
        assert_eq!(payload.mobile, "+919876543210");
        assert!(payload.is_school_student);

        let raw = serde_json::to_value(&payload).unwrap();
        assert_eq!(raw["userType"], "student");
        assert_eq!(raw["isSchoolStudent"], true);
        assert_eq!(raw["dateOfBirth"], "2008-04-12");
    }
}
