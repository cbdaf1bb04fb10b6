use super::*;
use marketplace_session::{ApplicationUser, ProviderIdentity, Role};

fn session_user(role: Role) -> SessionUser {
    let identity = ProviderIdentity {
        uid: "g-1".to_owned(),
        email: Some("ann@example.com".to_owned()),
        display_name: Some("Ann".to_owned()),
        photo_url: None,
        email_verified: true,
    };
    let user = ApplicationUser {
        id: "1".to_owned(),
        name: String::new(),
        email: String::new(),
        role,
        approved: true,
        picture: None,
        profile: serde_json::Map::new(),
    };
    SessionUser::merge(&identity, user)
}

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
}

#[test]
fn snapshot_fields_are_copied() {
    let snapshot = ReconciledAuthState {
        current_user: Some(session_user(Role::User)),
        token: Some("T1".to_owned()),
        loading: false,
        auth_error: None,
    };
    let state = AuthState::from(&snapshot);
    assert_eq!(state.token.as_deref(), Some("T1"));
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(SessionUser::id), Some("1"));
    assert!(!state.is_admin());
}

#[test]
fn admin_role_is_exposed() {
    let snapshot = ReconciledAuthState {
        current_user: Some(session_user(Role::Admin)),
        token: Some("T1".to_owned()),
        loading: false,
        auth_error: None,
    };
    assert!(AuthState::from(&snapshot).is_admin());
}

#[test]
fn observer_publishes_into_signal() {
    let signal = RwSignal::new(AuthState::default());
    let mut observer = SignalObserver::new(signal);
    assert!(observer.is_alive());
    let snapshot = ReconciledAuthState {
        current_user: None,
        token: None,
        loading: false,
        auth_error: Some("Request failed with status code 500".to_owned()),
    };
    observer.publish(&snapshot);
    let state = signal.get_untracked();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Request failed with status code 500"));
}

#[test]
fn observer_reports_teardown_after_dispose() {
    let signal = RwSignal::new(AuthState::default());
    let observer = SignalObserver::new(signal);
    assert!(observer.is_alive());
    signal.dispose();
    assert!(!observer.is_alive());
}
