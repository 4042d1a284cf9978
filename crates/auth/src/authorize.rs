//! Ownership-based authorization gate.
//!
//! Pure policy decisions, no IO and no store access: the services look the
//! resource up first, then ask this module whether the caller may touch it.
//! The central invariant is the read/write asymmetry — reads are public for
//! everyone including anonymous callers, mutations are owner-only.

use gamesplay_core::{Identity, UserId};

/// The gated mutations on a catalog resource.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Update,
    Delete,
}

/// May `identity` mutate a resource owned by `owner_id`?
///
/// True iff the caller is authenticated *and* is the owner. Anonymous callers
/// are never implicitly permitted anything; the action itself does not affect
/// the decision (update and delete share one rule).
pub fn can_mutate(identity: Identity, owner_id: UserId, _action: Action) -> bool {
    match identity {
        Identity::Anonymous => false,
        Identity::Authenticated(user_id) => user_id == owner_id,
    }
}

/// May `identity` read the catalog?
///
/// Unconditionally yes — browsing and detail views are public.
pub fn can_read(_identity: Identity) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_may_update_and_delete() {
        let owner = UserId::new();
        let identity = Identity::Authenticated(owner);

        assert!(can_mutate(identity, owner, Action::Update));
        assert!(can_mutate(identity, owner, Action::Delete));
    }

    #[test]
    fn non_owner_is_denied() {
        let owner = UserId::new();
        let identity = Identity::Authenticated(UserId::new());

        assert!(!can_mutate(identity, owner, Action::Update));
        assert!(!can_mutate(identity, owner, Action::Delete));
    }

    #[test]
    fn anonymous_is_denied_mutation_but_may_read() {
        let owner = UserId::new();

        assert!(!can_mutate(Identity::Anonymous, owner, Action::Update));
        assert!(!can_mutate(Identity::Anonymous, owner, Action::Delete));
        assert!(can_read(Identity::Anonymous));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_action() -> impl Strategy<Value = Action> {
            prop_oneof![Just(Action::Update), Just(Action::Delete)]
        }

        proptest! {
            /// Property: anonymous callers can never mutate, regardless of
            /// owner or action.
            #[test]
            fn anonymous_never_mutates(owner in any::<u128>(), action in arb_action()) {
                let owner = UserId::from_uuid(uuid::Uuid::from_u128(owner));
                prop_assert!(!can_mutate(Identity::Anonymous, owner, action));
            }

            /// Property: the decision is exactly "authenticated id equals
            /// owner id".
            #[test]
            fn decision_is_id_equality(caller in any::<u128>(), owner in any::<u128>(), action in arb_action()) {
                let caller_id = UserId::from_uuid(uuid::Uuid::from_u128(caller));
                let owner_id = UserId::from_uuid(uuid::Uuid::from_u128(owner));

                let allowed = can_mutate(Identity::Authenticated(caller_id), owner_id, action);
                prop_assert_eq!(allowed, caller_id == owner_id);
            }

            /// Property: reads are public for every identity.
            #[test]
            fn reads_are_public(caller in proptest::option::of(any::<u128>())) {
                let identity = Identity::from(caller.map(|c| UserId::from_uuid(uuid::Uuid::from_u128(c))));
                prop_assert!(can_read(identity));
            }
        }
    }
}
