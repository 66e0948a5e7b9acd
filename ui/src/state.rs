use payloads::{Book, BorrowRecord, User};
use yewdux::prelude::*;

use crate::lifecycle::ResourceState;

/// Authentication slice. `session.data` holds the signed-in user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthSlice {
    pub session: ResourceState<Option<User>>,
    pub is_authenticated: bool,
    /// False until the startup session probe has answered either way;
    /// gates auth-dependent routing to avoid a redirect flicker.
    pub session_checked: bool,
}

/// Both borrow lists share one slice and one lifecycle, matching the
/// endpoints that feed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BorrowLists {
    /// The calling user's own borrowals.
    pub mine: Vec<BorrowRecord>,
    /// Every user's borrowals (admin view).
    pub all: Vec<BorrowRecord>,
}

/// Which overlay form is open. At most one at a time in practice; the
/// flags are independent because different pages own different popups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Popups {
    pub add_book: bool,
    pub record_borrow: bool,
    pub return_borrow: bool,
    pub add_admin: bool,
    pub settings: bool,
}

/// The process-wide state tree. Each server-backed domain owns a
/// disjoint subtree; constructed once by yewdux at first subscription
/// and threaded into actions as a `Dispatch` handle.
#[derive(Debug, Clone, PartialEq, Default, Store)]
pub struct State {
    pub auth: AuthSlice,
    pub books: ResourceState<Vec<Book>>,
    pub borrows: ResourceState<BorrowLists>,
    pub users: ResourceState<Vec<User>>,
    pub popups: Popups,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated
    }

    pub fn current_user(&self) -> Option<&User> {
        self.auth.session.data.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(User::is_admin)
    }

    /// Store the authenticated user after login, OTP verification, or a
    /// password reset.
    pub fn set_session(&mut self, user: User) {
        self.auth.session.data = Some(user);
        self.auth.is_authenticated = true;
        self.auth.session_checked = true;
    }

    /// Full reset: the session is gone, and with it every user-scoped
    /// list and any open popup.
    pub fn clear_session(&mut self) {
        self.auth.session.data = None;
        self.auth.is_authenticated = false;
        self.auth.session_checked = true;
        self.books = ResourceState::default();
        self.borrows = ResourceState::default();
        self.users = ResourceState::default();
        self.popups = Popups::default();
    }
}

#[cfg(test)]
mod tests {
    use payloads::{Role, UserId};

    use super::*;

    fn admin() -> User {
        User {
            id: UserId("u1".into()),
            name: "Root".into(),
            email: "root@example.com".into(),
            role: Role::Admin,
            avatar: None,
        }
    }

    #[test]
    fn set_session_authenticates() {
        let mut state = State::default();
        assert!(!state.is_admin());

        state.set_session(admin());
        assert!(state.is_authenticated());
        assert!(state.is_admin());
        assert!(state.auth.session_checked);
    }

    #[test]
    fn clear_session_drops_every_user_scoped_subtree() {
        let mut state = State::default();
        state.set_session(admin());
        state.users.data = vec![admin()];
        state.users.error = Some("stale".into());
        state.popups.add_book = true;

        state.clear_session();

        assert!(!state.is_authenticated());
        assert_eq!(state.current_user(), None);
        assert!(state.auth.session_checked);
        assert!(state.users.data.is_empty());
        assert_eq!(state.users.error, None);
        assert!(!state.popups.add_book);
    }
}
