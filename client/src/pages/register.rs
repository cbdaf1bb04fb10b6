//! Registration: email verification code, then account creation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend mails a code (`/auth/send-code`) and confirms it
//! (`/auth/verify-code`) before the account is created with the identity
//! provider. Account creation signs the user in; the session reconciler then
//! exchanges the identity, and the authed redirect moves to the dashboard only
//! once that exchange has produced a session.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use marketplace_session::ProviderError;

use crate::net::api::Api;
use crate::state::auth::{AuthState, use_session_actions};
use crate::util::auth::install_authed_redirect;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RegisterStep {
    Email,
    Code,
    Profile,
}

pub(crate) fn validate_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address");
    }
    Ok(email.to_owned())
}

pub(crate) fn validate_code(code: &str) -> Result<String, &'static str> {
    let code = code.trim();
    if code.is_empty() {
        return Err("Code is required");
    }
    Ok(code.to_owned())
}

pub(crate) fn validate_profile(name: &str, password: &str, confirm: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(name.to_owned())
}

/// Status line after account creation; the dashboard redirect waits for the session.
pub(crate) fn signup_message(result: &Result<(), ProviderError>) -> Result<&'static str, String> {
    match result {
        Ok(()) => Ok("Account created. Signing you in..."),
        Err(e) => Err(format!("Failed to create an account: {e}")),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<Api>();
    install_authed_redirect(auth, use_navigate());

    let step = RwSignal::new(RegisterStep::Email);
    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let api_send = api.clone();
    let on_send_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email(&email.get()) {
            Ok(v) => v,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);
        let api = api_send.clone();
        leptos::task::spawn_local(async move {
            match api.send_verification_code(&email_value).await {
                Ok(()) => {
                    info.set(format!("Verification code sent to {email_value}"));
                    step.set(RegisterStep::Code);
                }
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
    };

    let api_verify = api;
    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let code_value = match validate_code(&code.get()) {
            Ok(v) => v,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        let email_value = email.get().trim().to_owned();
        error.set(String::new());
        busy.set(true);
        let api = api_verify.clone();
        leptos::task::spawn_local(async move {
            match api.verify_code(&email_value, &code_value).await {
                Ok(()) => {
                    info.set("Verified! Please complete your profile.".to_owned());
                    step.set(RegisterStep::Profile);
                }
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = match validate_profile(&name.get(), &password.get(), &confirm.get()) {
            Ok(v) => v,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        error.set(String::new());
        busy.set(true);
        let actions = use_session_actions();
        leptos::task::spawn_local(async move {
            let result = actions.signup_with_email(&email_value, &password_value, &name_value).await;
            match signup_message(&result) {
                Ok(msg) => info.set(msg.to_owned()),
                Err(msg) => error.set(msg),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <Show when=move || auth.with(|s| s.error.is_some())>
                    <p class="login-message login-message--error">
                        {move || auth.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <form class="login-form" hidden=move || step.get() != RegisterStep::Email on:submit=on_send_code>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Send Code"
                    </button>
                </form>
                <form class="login-form" hidden=move || step.get() != RegisterStep::Code on:submit=on_verify_code>
                    <input
                        class="login-input login-input--code"
                        type="text"
                        placeholder="123456"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Verify Code"
                    </button>
                </form>
                <form class="login-form" hidden=move || step.get() != RegisterStep::Profile on:submit=on_register>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <p class="login-card__links"><a href="/login">"Already have an account? Sign in"</a></p>
            </div>
        </div>
    }
}
