//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior. Nothing is
//! decided while the session is still loading, so a stored session never
//! flashes the login page on reload.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Signed-out visitors on a protected route go to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Admin-only routes send everyone else back to `/dashboard`.
pub fn should_redirect_non_admin(state: &AuthState) -> bool {
    !state.loading && state.user.is_some() && !state.is_admin()
}

/// Login and register pages forward an established session to `/dashboard`.
pub fn should_redirect_authed(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}

fn install_redirect<F>(auth: RwSignal<AuthState>, navigate: F, target: &'static str, check: fn(&AuthState) -> bool)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(check) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(auth, navigate, "/login", should_redirect_unauth);
}

/// Redirect non-admins to `/dashboard`.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(auth, navigate, "/dashboard", should_redirect_non_admin);
}

/// Redirect signed-in users away from the login/register forms.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(auth, navigate, "/dashboard", should_redirect_authed);
}
