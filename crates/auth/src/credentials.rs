//! Credential store: user identity records keyed by email.
//!
//! # Invariants
//! - `email` is unique across the store (case-sensitive exact match).
//! - User records are immutable once created; there is no update or delete.
//! - The uniqueness check and the insertion happen under a single write lock,
//!   so two concurrent registrations of the same email produce exactly one
//!   record.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gamesplay_core::{DomainError, DomainResult, Entity, UserId};

/// A registered user.
///
/// The password is stored verbatim: the observed client contract echoes it
/// back on register/login, so hashing would break field-for-field equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Storage seam for user identity records.
pub trait CredentialStore: Send + Sync {
    /// Insert a new user, failing with [`DomainError::DuplicateEmail`] if the
    /// email is already taken. Check-and-insert is atomic.
    fn insert(&self, email: String, password: String) -> DomainResult<User>;

    /// Exact-match lookup by email.
    fn find_by_email(&self, email: &str) -> Option<User>;
}

/// In-memory credential store.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    // Keyed by email; email uniqueness falls out of the map key.
    inner: RwLock<HashMap<String, User>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn insert(&self, email: String, password: String) -> DomainResult<User> {
        let mut map = self.inner.write().expect("credential store poisoned");

        if map.contains_key(&email) {
            return Err(DomainError::DuplicateEmail);
        }

        let user = User {
            id: UserId::new(),
            email: email.clone(),
            password,
            created_at: Utc::now(),
        };
        map.insert(email, user.clone());
        Ok(user)
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        let map = self.inner.read().expect("credential store poisoned");
        map.get(email).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_find_by_email() {
        let store = InMemoryCredentialStore::new();
        let user = store
            .insert("alice@mail.com".into(), "123456".into())
            .unwrap();

        let found = store.find_by_email("alice@mail.com").unwrap();
        assert_eq!(found, user);
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let store = InMemoryCredentialStore::new();
        store
            .insert("alice@mail.com".into(), "123456".into())
            .unwrap();

        let err = store
            .insert("alice@mail.com".into(), "other".into())
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateEmail);

        // The original record is untouched.
        let found = store.find_by_email("alice@mail.com").unwrap();
        assert_eq!(found.password, "123456");
    }

    #[test]
    fn email_match_is_case_sensitive() {
        let store = InMemoryCredentialStore::new();
        store
            .insert("Alice@mail.com".into(), "123456".into())
            .unwrap();

        assert!(store.find_by_email("alice@mail.com").is_none());
    }

    #[test]
    fn concurrent_registrations_of_same_email_yield_one_record() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryCredentialStore::new());
        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                store.insert("race@mail.com".into(), format!("pw{i}"))
            }));
        }

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        assert!(results
            .iter()
            .filter(|r| r.is_err())
            .all(|r| matches!(r, Err(DomainError::DuplicateEmail))));
    }
}
