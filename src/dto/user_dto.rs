use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref EDUCATION_LEVEL_RE: Regex =
        Regex::new("^(school|college|university)$").unwrap();
    static ref GRADUATION_MONTH_RE: Regex = Regex::new(
        "^(January|February|March|April|May|June|July|August|September|October|November|December)$"
    )
    .unwrap();
    static ref GRADUATION_YEAR_RE: Regex = Regex::new("^(20[2-3][0-9])$").unwrap();
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(length(min = 5, max = 500))]
    pub about: String,
    #[serde(rename = "educationLevel")]
    #[validate(regex(path = *EDUCATION_LEVEL_RE))]
    pub education_level: String,
    #[serde(rename = "institutionName")]
    #[validate(length(min = 2, max = 100))]
    pub institution_name: String,
    #[validate(length(min = 2, max = 50))]
    pub major: String,
    #[serde(rename = "graduationMonth")]
    #[validate(regex(path = *GRADUATION_MONTH_RE))]
    pub graduation_month: String,
    #[serde(rename = "graduationYear")]
    #[validate(regex(path = *GRADUATION_YEAR_RE))]
    pub graduation_year: String,
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Sparse update: absent fields leave the stored values untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(rename = "educationLevel")]
    #[validate(regex(path = *EDUCATION_LEVEL_RE))]
    pub education_level: Option<String>,
    #[serde(rename = "institutionName")]
    #[validate(length(min = 2, max = 100))]
    pub institution_name: Option<String>,
    #[validate(length(min = 2, max = 50))]
    pub major: Option<String>,
    #[serde(rename = "graduationMonth")]
    #[validate(regex(path = *GRADUATION_MONTH_RE))]
    pub graduation_month: Option<String>,
    #[serde(rename = "graduationYear")]
    #[validate(regex(path = *GRADUATION_YEAR_RE))]
    pub graduation_year: Option<String>,
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 5, max = 500))]
    pub about: Option<String>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.education_level.is_none()
            && self.institution_name.is_none()
            && self.major.is_none()
            && self.graduation_month.is_none()
            && self.graduation_year.is_none()
            && self.name.is_none()
            && self.about.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignupRequest {
        SignupRequest {
            email: "u1@test.com".to_string(),
            name: "User One".to_string(),
            about: "A test user profile.".to_string(),
            education_level: "university".to_string(),
            institution_name: "Test University".to_string(),
            major: "Computer Science".to_string(),
            graduation_month: "May".to_string(),
            graduation_year: "2027".to_string(),
            password: "password123".to_string(),
        }
    }

    #[test]
    fn valid_signup_passes_validation() {
        assert!(valid_signup().validate().is_ok());
    }

    #[test]
    fn education_level_outside_enum_fails() {
        let mut req = valid_signup();
        req.education_level = "bootcamp".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn graduation_year_outside_window_fails() {
        for year in ["2019", "2040", "21xx"] {
            let mut req = valid_signup();
            req.graduation_year = year.to_string();
            assert!(req.validate().is_err(), "year {} should be rejected", year);
        }
    }

    #[test]
    fn short_password_fails() {
        let mut req = valid_signup();
        req.password = "1234567".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_validates_only_supplied_fields() {
        let update = UpdateProfileRequest {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_ok());

        let bad = UpdateProfileRequest {
            graduation_month: Some("Maytober".to_string()),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(UpdateProfileRequest::default().is_empty());
        let update = UpdateProfileRequest {
            about: Some("Updated about text.".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn camel_case_wire_names_deserialize() {
        let update: UpdateProfileRequest =
            serde_json::from_str(r#"{"educationLevel":"college","graduationYear":"2025"}"#)
                .unwrap();
        assert_eq!(update.education_level.as_deref(), Some("college"));
        assert_eq!(update.graduation_year.as_deref(), Some("2025"));
        assert!(update.name.is_none());
    }
}
