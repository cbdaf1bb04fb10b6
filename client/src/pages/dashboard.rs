//! Authenticated dashboard landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Greets the signed-in user, shows the approval banner and notification
//! bell, and links admins to account review. Redirects to `/login` once the
//! session has settled without a user.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use marketplace_session::SessionUser;

use crate::components::approval_banner::ApprovalBanner;
use crate::components::notification_bell::NotificationBell;
use crate::state::auth::{AuthState, use_session_actions};
use crate::util::auth::install_unauth_redirect;

pub(crate) fn greeting(user: &SessionUser) -> String {
    format!("Welcome back, {}!", user.first_name())
}

pub(crate) fn role_label(user: &SessionUser) -> &'static str {
    if user.is_admin() {
        "Administrator"
    } else if user.is_approved() {
        "Seller"
    } else {
        "Pending seller"
    }
}

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let info = RwSignal::new(String::new());
    let on_logout = move |_| {
        let actions = use_session_actions();
        leptos::task::spawn_local(async move {
            if let Err(e) = actions.logout().await {
                info.set(format!("Failed to log out: {e}"));
            }
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>{move || auth.with(|s| s.user.as_ref().map(greeting).unwrap_or_default())}</h1>
                <span class="dashboard-header__role">
                    {move || auth.with(|s| s.user.as_ref().map(role_label).unwrap_or_default())}
                </span>
                <NotificationBell />
                <button class="dashboard-header__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <ApprovalBanner />
            <Show when=move || !info.get().is_empty()>
                <p class="dashboard-message">{move || info.get()}</p>
            </Show>
            <Show when=move || auth.with(AuthState::is_admin)>
                <nav class="dashboard-nav">
                    <a href="/dashboard/users">"Manage users"</a>
                </nav>
            </Show>
        </div>
    }
}
