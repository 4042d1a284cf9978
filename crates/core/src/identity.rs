//! Request identity: the explicit "logged in vs guest" state machine.
//!
//! Every request handler receives one of these instead of reading auth state
//! from anywhere ambient. `Anonymous` is a first-class state, not an error:
//! catalog reads are public, and only the services decide which operations
//! demand an authenticated caller.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// The identity a request acts under.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Identity {
    /// No valid session token accompanied the request.
    Anonymous,
    /// A session token resolved to this user.
    Authenticated(UserId),
}

impl Identity {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::Authenticated(_))
    }

    /// The authenticated user id, if any.
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Identity::Anonymous => None,
            Identity::Authenticated(id) => Some(*id),
        }
    }
}

impl Default for Identity {
    fn default() -> Self {
        Identity::Anonymous
    }
}

impl From<Option<UserId>> for Identity {
    fn from(value: Option<UserId>) -> Self {
        match value {
            Some(id) => Identity::Authenticated(id),
            None => Identity::Anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_no_user_id() {
        assert_eq!(Identity::Anonymous.user_id(), None);
        assert!(!Identity::Anonymous.is_authenticated());
    }

    #[test]
    fn authenticated_exposes_user_id() {
        let id = UserId::new();
        let identity = Identity::Authenticated(id);
        assert_eq!(identity.user_id(), Some(id));
        assert!(identity.is_authenticated());
    }
}
