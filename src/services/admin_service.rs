use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::user::UserView;
use crate::store::users::UserStore;

#[derive(Clone)]
pub struct AdminService {
    store: UserStore,
}

impl AdminService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    pub fn list_users(&self) -> Vec<UserView> {
        self.store.list().iter().map(UserView::from).collect()
    }

    pub fn block_user(&self, admin_email: &str, email: &str) -> Result<()> {
        self.ensure_actionable(admin_email, email, "block")?;
        self.store
            .update(email, |user| user.is_blocked = true)
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;
        info!(admin = admin_email, email, "User blocked");
        Ok(())
    }

    pub fn unblock_user(&self, admin_email: &str, email: &str) -> Result<()> {
        self.ensure_actionable(admin_email, email, "unblock")?;
        self.store
            .update(email, |user| user.is_blocked = false)
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;
        info!(admin = admin_email, email, "User unblocked");
        Ok(())
    }

    /// Hard delete. Outstanding tokens for the email keep validating
    /// cryptographically but fail the gate's store lookup afterwards.
    pub fn remove_user(&self, admin_email: &str, email: &str) -> Result<()> {
        self.ensure_actionable(admin_email, email, "remove")?;
        self.store
            .remove(email)
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;
        info!(admin = admin_email, email, "User removed");
        Ok(())
    }

    /// Existence check first (404 wins over the self-protection 400,
    /// matching the endpoint contract), then the self-target guard.
    fn ensure_actionable(&self, admin_email: &str, email: &str, action: &str) -> Result<()> {
        if !self.store.contains(email) {
            warn!(admin = admin_email, email, action, "Admin action on unknown user");
            return Err(Error::NotFound("User not found".to_string()));
        }
        if email == admin_email {
            warn!(admin = admin_email, action, "Admin attempted to act on themselves");
            return Err(Error::BadRequest(format!("Cannot {} yourself", action)));
        }
        Ok(())
    }
}
