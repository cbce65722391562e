use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::config::get_config;
use crate::dto::user_dto::{SignupRequest, UpdateProfileRequest};
use crate::error::{Error, Result};
use crate::models::user::{Role, User, UserView};
use crate::store::users::UserStore;
use crate::utils::{crypto, token};

const PDF_MEDIA_TYPE: &str = "application/pdf";

#[derive(Clone)]
pub struct UserService {
    store: UserStore,
}

impl UserService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Creates the bootstrap admin record. The only admin in the system;
    /// signup always produces regular users and no promotion path exists.
    pub fn seed_admin(&self, email: &str, password: &str) -> Result<()> {
        let admin = User {
            email: email.to_string(),
            password_hash: crypto::hash_password(password)?,
            education_level: "university".to_string(),
            institution_name: "Admin University".to_string(),
            major: "Computer Science".to_string(),
            graduation_month: "May".to_string(),
            graduation_year: "2020".to_string(),
            name: "Admin User".to_string(),
            about: "I am the admin of this platform.".to_string(),
            role: Role::Admin,
            is_blocked: false,
            created_at: Utc::now(),
            last_login: None,
            // Recomputed at first sign-in, like every other record.
            profile_completed: false,
            resume: None,
        };
        if !self.store.try_insert(admin) {
            return Err(Error::Conflict("Admin account already exists".to_string()));
        }
        Ok(())
    }

    pub fn signup(&self, payload: SignupRequest) -> Result<()> {
        info!(email = %payload.email, "Signup attempt");

        if self.store.contains(&payload.email) {
            warn!(email = %payload.email, "Signup failed: email already registered");
            return Err(Error::Conflict("Email already registered".to_string()));
        }

        let mut user = User {
            email: payload.email.clone(),
            password_hash: crypto::hash_password(&payload.password)?,
            education_level: payload.education_level,
            institution_name: payload.institution_name,
            major: payload.major,
            graduation_month: payload.graduation_month,
            graduation_year: payload.graduation_year,
            name: payload.name,
            about: payload.about,
            role: Role::User,
            is_blocked: false,
            created_at: Utc::now(),
            last_login: None,
            profile_completed: false,
            resume: None,
        };
        user.recompute_profile_completed();

        // A concurrent signup can win between the check above and here.
        if !self.store.try_insert(user) {
            warn!(email = %payload.email, "Signup failed: email already registered");
            return Err(Error::Conflict("Email already registered".to_string()));
        }

        info!(email = %payload.email, "User registered successfully");
        Ok(())
    }

    /// Verifies credentials and issues an access token. Unknown email and
    /// wrong password are deliberately indistinguishable to the caller.
    pub fn signin(&self, email: &str, password: &str) -> Result<String> {
        info!(email, "Signin attempt");

        let user = self.store.get(email).ok_or_else(|| {
            warn!(email, "Signin failed: invalid credentials");
            Error::BadRequest("Invalid email or password".to_string())
        })?;

        if !crypto::verify_password(password, &user.password_hash)? {
            warn!(email, "Signin failed: invalid credentials");
            return Err(Error::BadRequest("Invalid email or password".to_string()));
        }

        if user.is_blocked {
            warn!(email, "Signin failed: user is blocked");
            return Err(Error::Forbidden("User is blocked".to_string()));
        }

        self.store.update(email, |u| {
            u.last_login = Some(Utc::now());
            u.recompute_profile_completed();
        });

        let config = get_config();
        let access_token = token::create_access_token(
            email,
            Some(Duration::minutes(config.access_token_ttl_minutes)),
            &config.jwt_secret,
        )?;

        info!(email, "User signed in successfully");
        Ok(access_token)
    }

    /// Merges the supplied fields into the stored record; absent fields are
    /// left untouched.
    pub fn update_profile(&self, email: &str, update: UpdateProfileRequest) -> Result<UserView> {
        if update.is_empty() {
            return Err(Error::BadRequest("No fields provided for update".to_string()));
        }

        let updated = self
            .store
            .update(email, |user| {
                if let Some(v) = update.education_level {
                    user.education_level = v;
                }
                if let Some(v) = update.institution_name {
                    user.institution_name = v;
                }
                if let Some(v) = update.major {
                    user.major = v;
                }
                if let Some(v) = update.graduation_month {
                    user.graduation_month = v;
                }
                if let Some(v) = update.graduation_year {
                    user.graduation_year = v;
                }
                if let Some(v) = update.name {
                    user.name = v;
                }
                if let Some(v) = update.about {
                    user.about = v;
                }
                user.recompute_profile_completed();
            })
            .ok_or_else(|| Error::Unauthorized("Invalid authentication credentials".to_string()))?;

        info!(email, "Profile updated successfully");
        Ok(UserView::from(&updated))
    }

    /// Stores the uploaded resume as base64, overwriting any prior one.
    pub fn attach_resume(&self, email: &str, content_type: &str, data: &[u8]) -> Result<()> {
        if content_type != PDF_MEDIA_TYPE {
            warn!(email, content_type, "Resume upload rejected: not a PDF");
            return Err(Error::BadRequest("Only PDF files are allowed".to_string()));
        }

        let encoded = BASE64.encode(data);
        self.store
            .update(email, |user| user.resume = Some(encoded))
            .ok_or_else(|| Error::Unauthorized("Invalid authentication credentials".to_string()))?;

        info!(email, "Resume uploaded successfully");
        Ok(())
    }
}
