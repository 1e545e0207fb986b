/// Concurrent in-memory user directory, keyed by username.
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::AppError;
use crate::models::User;

/// The authoritative set of user records.
///
/// A single lock guards the map and the id counter together, so the
/// uniqueness check, id assignment and insert are one atomic step. Callers
/// always receive value copies; the only way to mutate a record is through
/// the write path here. Critical sections are O(1) — in particular, password
/// hashing happens in callers before any lock is taken.
pub struct UserDirectory {
    inner: RwLock<DirectoryInner>,
}

struct DirectoryInner {
    users: HashMap<String, User>,
    next_id: u64,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(DirectoryInner {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Insert a new record. Exactly one of any set of concurrent creators
    /// of the same username succeeds; the rest see `DuplicateUsername`.
    /// Ids are assigned in creation order and never reused.
    pub fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let mut inner = self.inner.write().expect("user directory lock poisoned");

        if inner.users.contains_key(username) {
            return Err(AppError::DuplicateUsername);
        }

        let user = User {
            id: inner.next_id,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        inner.next_id += 1;
        inner.users.insert(username.to_string(), user.clone());

        Ok(user)
    }

    /// Look up a record by username, returning a copy.
    pub fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        let inner = self.inner.read().expect("user directory lock poisoned");

        inner.users.get(username).cloned().ok_or(AppError::NotFound)
    }

    /// Partial update: only supplied, non-empty fields are applied. The
    /// password arrives already hashed. Supplying nothing is a successful
    /// no-op. Returns the resulting record.
    pub fn update(
        &self,
        username: &str,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<User, AppError> {
        let mut inner = self.inner.write().expect("user directory lock poisoned");

        let user = inner.users.get_mut(username).ok_or(AppError::NotFound)?;

        if let Some(email) = email.filter(|e| !e.is_empty()) {
            user.email = email.to_string();
        }
        if let Some(hash) = password_hash.filter(|h| !h.is_empty()) {
            user.password_hash = hash.to_string();
        }

        Ok(user.clone())
    }

    /// Remove a record. No tombstone: a subsequent lookup is `NotFound`.
    pub fn delete_by_username(&self, username: &str) -> Result<(), AppError> {
        let mut inner = self.inner.write().expect("user directory lock poisoned");

        inner
            .users
            .remove(username)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
