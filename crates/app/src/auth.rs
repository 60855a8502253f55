use dioxus::prelude::*;
use shared_types::{DashboardShell, SessionUser};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Dashboard chrome for the signed-in user, recomposed when the user changes.
pub fn use_shell() -> Memo<DashboardShell> {
    let auth = use_auth();
    use_memo(move || DashboardShell::compose(auth.current_user.read().as_ref()))
}
