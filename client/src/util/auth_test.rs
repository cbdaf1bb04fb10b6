use super::*;
use marketplace_session::{ApplicationUser, ProviderIdentity, Role, SessionUser};

fn user(role: Role) -> SessionUser {
    let identity = ProviderIdentity {
        uid: "g-7".to_owned(),
        email: Some("bo@example.com".to_owned()),
        display_name: Some("Bo".to_owned()),
        photo_url: None,
        email_verified: false,
    };
    SessionUser::merge(
        &identity,
        ApplicationUser {
            id: "7".to_owned(),
            name: "Bo".to_owned(),
            email: "bo@example.com".to_owned(),
            role,
            approved: false,
            picture: None,
            profile: serde_json::Map::new(),
        },
    )
}

fn state(user: Option<SessionUser>, loading: bool) -> AuthState {
    AuthState { user, token: None, loading, error: None }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&state(None, false)));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&state(None, true)));
    assert!(!should_redirect_non_admin(&state(None, true)));
    assert!(!should_redirect_authed(&state(Some(user(Role::User)), true)));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&state(Some(user(Role::User)), false)));
}

#[test]
fn non_admin_is_sent_back_from_admin_routes() {
    assert!(should_redirect_non_admin(&state(Some(user(Role::User)), false)));
    assert!(!should_redirect_non_admin(&state(Some(user(Role::Admin)), false)));
}

#[test]
fn signed_out_visitor_is_left_to_the_unauth_guard() {
    assert!(!should_redirect_non_admin(&state(None, false)));
}

#[test]
fn signed_in_user_skips_login_form() {
    assert!(should_redirect_authed(&state(Some(user(Role::User)), false)));
    assert!(!should_redirect_authed(&state(None, false)));
}
