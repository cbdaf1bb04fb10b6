//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The session reconciler is the only writer,
//! through [`SignalObserver`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use marketplace_session::reconciler::Observer;
use marketplace_session::{AuthActions, ReconciledAuthState, SessionUser};

use crate::net::identity::BrowserIdentity;

/// Action handle provided through context next to the auth signal.
pub type SessionActions = AuthActions<BrowserIdentity>;

/// Context slot for [`SessionActions`]; the handle is `!Send`.
pub type ActionsHandle = StoredValue<SessionActions, LocalStorage>;

/// Fetch the session actions from context.
///
/// # Panics
///
/// Panics if called outside the app root that provides them.
pub fn use_session_actions() -> SessionActions {
    expect_context::<ActionsHandle>().get_value()
}

/// View-facing copy of the reconciled session snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::from(&ReconciledAuthState::default())
    }
}

impl From<&ReconciledAuthState> for AuthState {
    fn from(snapshot: &ReconciledAuthState) -> Self {
        Self {
            user: snapshot.current_user.clone(),
            token: snapshot.token.clone(),
            loading: snapshot.loading,
            error: snapshot.auth_error.clone(),
        }
    }
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::is_admin)
    }
}

/// Publishes reconciler snapshots into an `RwSignal`.
///
/// Reports teardown once the signal's owner has been disposed.
#[derive(Clone, Copy, Debug)]
pub struct SignalObserver {
    signal: RwSignal<AuthState>,
}

impl SignalObserver {
    pub fn new(signal: RwSignal<AuthState>) -> Self {
        Self { signal }
    }
}

impl Observer for SignalObserver {
    fn is_alive(&self) -> bool {
        self.signal.try_with_untracked(|_| ()).is_some()
    }

    fn publish(&mut self, snapshot: &ReconciledAuthState) {
        if self.signal.try_set(AuthState::from(snapshot)).is_some() {
            leptos::logging::log!("auth: snapshot dropped after teardown");
        }
    }
}
