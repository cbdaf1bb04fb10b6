//! Login page: Google popup, email + password, and password reset.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use marketplace_session::ProviderError;

use crate::state::auth::{AuthState, use_session_actions};
use crate::util::auth::install_authed_redirect;

/// Trim and check the email/password pair before calling the provider.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Message for a rejected sign-in; a dismissed popup is not an error.
pub(crate) fn login_failure_message(err: &ProviderError) -> Option<String> {
    match err {
        ProviderError::PopupClosed => None,
        other => Some(format!("Failed to log in: {other}")),
    }
}

pub(crate) fn reset_failure_message(err: &ProviderError) -> String {
    format!("Failed to reset password: {err}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_authed_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_email_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());
        let actions = use_session_actions();
        leptos::task::spawn_local(async move {
            if let Err(e) = actions.login_with_email(&email_value, &password_value).await {
                info.set(login_failure_message(&e).unwrap_or_default());
            }
            busy.set(false);
        });
    };

    let on_google = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());
        let actions = use_session_actions();
        leptos::task::spawn_local(async move {
            if let Err(e) = actions.login_with_google().await {
                info.set(login_failure_message(&e).unwrap_or_default());
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Car Marketplace"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <Show when=move || auth.with(|s| s.error.is_some())>
                    <p class="login-message login-message--error">
                        {move || auth.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <form class="login-form" on:submit=on_email_login>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <button class="login-button" on:click=on_google disabled=move || busy.get()>
                    "Sign in with Google"
                </button>
                <p class="login-card__links">
                    <a href="/forgot-password">"Forgot password?"</a>
                    " · "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

/// Password reset request form. Leaves the session untouched.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            info.set("Enter an email first.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());
        let actions = use_session_actions();
        leptos::task::spawn_local(async move {
            match actions.reset_password(&email_value).await {
                Ok(()) => info.set("Check your email inbox for further instructions.".to_owned()),
                Err(e) => info.set(reset_failure_message(&e)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Reset Password"</h1>
                <p class="login-card__subtitle">"Enter your email to receive reset instructions"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Reset Password" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__links"><a href="/login">"Back to sign in"</a></p>
            </div>
        </div>
    }
}
