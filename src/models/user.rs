use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Stored account record, keyed by email in the user store.
///
/// Deliberately does not implement `Serialize`: everything that leaves the
/// process goes through [`UserView`], which carries no password hash.
#[derive(Debug, Clone)]
pub struct User {
    pub email: String,
    pub password_hash: String,
    pub education_level: String,
    pub institution_name: String,
    pub major: String,
    pub graduation_month: String,
    pub graduation_year: String,
    pub name: String,
    pub about: String,
    pub role: Role,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub profile_completed: bool,
    /// Base64 of the uploaded PDF bytes.
    pub resume: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// True iff every required profile field is non-empty.
    pub fn is_profile_complete(&self) -> bool {
        [
            &self.education_level,
            &self.institution_name,
            &self.major,
            &self.graduation_month,
            &self.graduation_year,
            &self.name,
            &self.about,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }

    /// Re-derives `profile_completed`. Called after any field-affecting
    /// mutation (signup, signin, profile update).
    pub fn recompute_profile_completed(&mut self) {
        self.profile_completed = self.is_profile_complete();
    }
}

/// External-facing projection of [`User`] without the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub email: String,
    #[serde(rename = "educationLevel")]
    pub education_level: String,
    #[serde(rename = "institutionName")]
    pub institution_name: String,
    pub major: String,
    #[serde(rename = "graduationMonth")]
    pub graduation_month: String,
    #[serde(rename = "graduationYear")]
    pub graduation_year: String,
    pub name: String,
    pub about: String,
    pub role: Role,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub profile_completed: bool,
    pub resume: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            education_level: user.education_level.clone(),
            institution_name: user.institution_name.clone(),
            major: user.major.clone(),
            graduation_month: user.graduation_month.clone(),
            graduation_year: user.graduation_year.clone(),
            name: user.name.clone(),
            about: user.about.clone(),
            role: user.role,
            is_blocked: user.is_blocked,
            created_at: user.created_at,
            last_login: user.last_login,
            profile_completed: user.profile_completed,
            resume: user.resume.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            email: "jane@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            education_level: "university".to_string(),
            institution_name: "Example University".to_string(),
            major: "Physics".to_string(),
            graduation_month: "June".to_string(),
            graduation_year: "2027".to_string(),
            name: "Jane Doe".to_string(),
            about: "Physics undergrad.".to_string(),
            role: Role::User,
            is_blocked: false,
            created_at: Utc::now(),
            last_login: None,
            profile_completed: false,
            resume: None,
        }
    }

    #[test]
    fn complete_profile_is_detected() {
        let mut user = sample_user();
        user.recompute_profile_completed();
        assert!(user.profile_completed);
    }

    #[test]
    fn any_empty_field_marks_profile_incomplete() {
        let mut user = sample_user();
        user.major = String::new();
        user.recompute_profile_completed();
        assert!(!user.profile_completed);
    }

    #[test]
    fn view_serializes_camel_case_without_password() {
        let user = sample_user();
        let view = UserView::from(&user);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["educationLevel"], "university");
        assert_eq!(json["role"], "user");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }
}
