use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::user::User;

/// Process-lifetime user table, keyed by email.
///
/// A single lock serializes mutations; every read-modify-write runs inside
/// one write-lock acquisition, so readers never observe a torn record.
/// Critical sections are short and never await, so a blocking `RwLock` is
/// fine inside async handlers.
#[derive(Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<HashMap<String, User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, User>> {
        self.inner.read().expect("user store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, User>> {
        self.inner.write().expect("user store lock poisoned")
    }

    pub fn get(&self, email: &str) -> Option<User> {
        self.read().get(email).cloned()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.read().contains_key(email)
    }

    /// Inserts the record unless the email is already taken. The existence
    /// check and the insert happen under one write lock, so two concurrent
    /// signups for the same email cannot both succeed.
    pub fn try_insert(&self, user: User) -> bool {
        let mut table = self.write();
        if table.contains_key(&user.email) {
            return false;
        }
        table.insert(user.email.clone(), user);
        true
    }

    /// Atomic read-modify-write on one record. Returns the updated record,
    /// or `None` if the email is absent.
    pub fn update<F>(&self, email: &str, mutate: F) -> Option<User>
    where
        F: FnOnce(&mut User),
    {
        let mut table = self.write();
        let user = table.get_mut(email)?;
        mutate(user);
        Some(user.clone())
    }

    pub fn remove(&self, email: &str) -> Option<User> {
        self.write().remove(email)
    }

    pub fn list(&self) -> Vec<User> {
        self.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;
    use chrono::Utc;

    fn user(email: &str) -> User {
        User {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            education_level: "college".to_string(),
            institution_name: "Test College".to_string(),
            major: "Math".to_string(),
            graduation_month: "May".to_string(),
            graduation_year: "2026".to_string(),
            name: "Test User".to_string(),
            about: "About me.".to_string(),
            role: Role::User,
            is_blocked: false,
            created_at: Utc::now(),
            last_login: None,
            profile_completed: true,
            resume: None,
        }
    }

    #[test]
    fn insert_then_get_roundtrips() {
        let store = UserStore::new();
        assert!(store.try_insert(user("a@test.com")));
        let fetched = store.get("a@test.com").expect("record present");
        assert_eq!(fetched.email, "a@test.com");
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let store = UserStore::new();
        assert!(store.try_insert(user("a@test.com")));
        assert!(!store.try_insert(user("a@test.com")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_mutates_in_place() {
        let store = UserStore::new();
        store.try_insert(user("a@test.com"));
        let updated = store
            .update("a@test.com", |u| u.is_blocked = true)
            .expect("record present");
        assert!(updated.is_blocked);
        assert!(store.get("a@test.com").unwrap().is_blocked);
    }

    #[test]
    fn update_missing_returns_none() {
        let store = UserStore::new();
        assert!(store.update("ghost@test.com", |u| u.is_blocked = true).is_none());
    }

    #[test]
    fn remove_deletes_the_record() {
        let store = UserStore::new();
        store.try_insert(user("a@test.com"));
        assert!(store.remove("a@test.com").is_some());
        assert!(store.get("a@test.com").is_none());
        assert!(store.remove("a@test.com").is_none());
    }

    #[test]
    fn list_returns_all_records() {
        let store = UserStore::new();
        store.try_insert(user("a@test.com"));
        store.try_insert(user("b@test.com"));
        let mut emails: Vec<String> = store.list().into_iter().map(|u| u.email).collect();
        emails.sort();
        assert_eq!(emails, vec!["a@test.com", "b@test.com"]);
    }
}
