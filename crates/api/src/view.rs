//! View-state projection.
//!
//! Pure, stateless decisions about which affordances a client should expose,
//! derived entirely from `{identity present?, identity == owner?}`. This sits
//! downstream of every response and owns no state of its own; it exists so
//! the UI collaborator never re-derives auth rules.

use serde::Serialize;

use gamesplay_auth::authorize::{Action, can_mutate};
use gamesplay_core::{Identity, UserId};

/// Navigation affordances for the current identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    pub logged_in: bool,
    pub show_catalog: bool,
    pub show_create: bool,
    pub show_logout: bool,
    pub show_login: bool,
    pub show_register: bool,
}

/// Project the navigation bar state from the request identity.
pub fn nav_state(identity: Identity) -> NavState {
    let logged_in = identity.is_authenticated();
    NavState {
        logged_in,
        show_catalog: true,
        show_create: logged_in,
        show_logout: logged_in,
        show_login: !logged_in,
        show_register: !logged_in,
    }
}

/// Per-game affordances for the current identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameAffordances {
    pub can_edit: bool,
    pub can_delete: bool,
}

/// Project the edit/delete buttons from identity and resource ownership.
pub fn game_affordances(identity: Identity, owner_id: UserId) -> GameAffordances {
    GameAffordances {
        can_edit: can_mutate(identity, owner_id, Action::Update),
        can_delete: can_mutate(identity, owner_id, Action::Delete),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_sees_login_and_register_only() {
        let nav = nav_state(Identity::Anonymous);
        assert!(!nav.logged_in);
        assert!(nav.show_catalog);
        assert!(nav.show_login);
        assert!(nav.show_register);
        assert!(!nav.show_create);
        assert!(!nav.show_logout);
    }

    #[test]
    fn logged_in_user_sees_create_and_logout() {
        let nav = nav_state(Identity::Authenticated(UserId::new()));
        assert!(nav.logged_in);
        assert!(nav.show_catalog);
        assert!(nav.show_create);
        assert!(nav.show_logout);
        assert!(!nav.show_login);
        assert!(!nav.show_register);
    }

    #[test]
    fn owner_sees_edit_and_delete() {
        let owner = UserId::new();
        let affordances = game_affordances(Identity::Authenticated(owner), owner);
        assert!(affordances.can_edit);
        assert!(affordances.can_delete);
    }

    #[test]
    fn non_owner_and_guest_see_neither() {
        let owner = UserId::new();
        for identity in [
            Identity::Authenticated(UserId::new()),
            Identity::Anonymous,
        ] {
            let affordances = game_affordances(identity, owner);
            assert!(!affordances.can_edit);
            assert!(!affordances.can_delete);
        }
    }
}
