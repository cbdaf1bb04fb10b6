//! Browser identity provider backed by the Firebase Auth JS SDK.
//!
//! SYSTEM CONTEXT
//! ==============
//! `js/identity.js` wraps the SDK; identities cross the boundary as JSON and
//! rejections as `{"code","message"}` strings. Decoding lives in plain
//! functions so it is testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! SDK error codes are folded into [`ProviderError`]. Outside the browser
//! every action fails with [`ProviderError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use marketplace_session::{AuthEvent, IdentityProvider, ProviderError, ProviderIdentity, Subscription};
use marketplace_session::ports::ChangeListener;
use serde::Deserialize;

#[cfg(feature = "csr")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(module = "/js/identity.js")]
    extern "C" {
        #[wasm_bindgen(js_name = onChange)]
        pub fn on_change(callback: &Closure<dyn Fn(Option<String>)>) -> js_sys::Function;

        #[wasm_bindgen(js_name = idToken, catch)]
        pub async fn id_token(uid: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = signInWithPopup, catch)]
        pub async fn sign_in_with_popup() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = signInWithEmail, catch)]
        pub async fn sign_in_with_email(email: &str, password: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = createAccount, catch)]
        pub async fn create_account(email: &str, password: &str, display_name: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = sendPasswordReset, catch)]
        pub async fn send_password_reset(email: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = signOut, catch)]
        pub async fn sign_out() -> Result<JsValue, JsValue>;
    }
}

#[derive(Debug, Deserialize)]
struct Rejection {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Decode a change callback payload: `None` means signed out.
///
/// # Errors
///
/// Returns the JSON error if a signed-in payload is not a valid identity.
pub fn decode_event(payload: Option<&str>) -> Result<AuthEvent, serde_json::Error> {
    match payload {
        None => Ok(AuthEvent::SignedOut),
        Some(json) => serde_json::from_str::<ProviderIdentity>(json).map(AuthEvent::SignedIn),
    }
}

/// Decode a change callback payload, reading an undecodable identity as signed out.
///
/// The reconciler stays loading until its first provider event, so a bad
/// payload must still produce one.
pub fn event_or_signed_out(payload: Option<&str>) -> AuthEvent {
    decode_event(payload).unwrap_or_else(|e| {
        leptos::logging::warn!("identity: undecodable provider payload, treating as signed out: {e}");
        AuthEvent::SignedOut
    })
}

/// Map an SDK error code onto the provider error taxonomy.
pub fn provider_error(code: &str, message: &str) -> ProviderError {
    match code {
        "auth/popup-closed-by-user" | "auth/cancelled-popup-request" => ProviderError::PopupClosed,
        "auth/invalid-credential" | "auth/wrong-password" | "auth/user-not-found" | "auth/invalid-login-credentials" => {
            ProviderError::InvalidCredentials
        }
        "auth/network-request-failed" | "auth/internal-error" => ProviderError::Unavailable(message.to_owned()),
        _ => ProviderError::Rejected { code: code.to_owned(), message: message.to_owned() },
    }
}

/// Parse a rejection string produced by the JS wrapper.
pub fn parse_rejection(raw: &str) -> ProviderError {
    match serde_json::from_str::<Rejection>(raw) {
        Ok(rejection) => provider_error(&rejection.code, &rejection.message),
        Err(_) => ProviderError::Unavailable(raw.to_owned()),
    }
}

#[cfg(feature = "csr")]
fn js_error(value: &wasm_bindgen::JsValue) -> ProviderError {
    match value.as_string() {
        Some(raw) => parse_rejection(&raw),
        None => ProviderError::Unavailable(format!("{value:?}")),
    }
}

#[cfg(feature = "csr")]
fn settle(result: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> Result<(), ProviderError> {
    result.map(|_| ()).map_err(|e| js_error(&e))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ProviderError {
    ProviderError::Unavailable("not available outside the browser".to_owned())
}

/// [`IdentityProvider`] talking to the page's Firebase Auth instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserIdentity;

#[async_trait::async_trait(?Send)]
impl IdentityProvider for BrowserIdentity {
    fn subscribe(&self, on_change: ChangeListener) -> Subscription {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::prelude::Closure;

            let callback = Closure::<dyn Fn(Option<String>)>::new(move |payload: Option<String>| {
                on_change(event_or_signed_out(payload.as_deref()));
            });
            let unsubscribe = bindings::on_change(&callback);
            Subscription::new(move || {
                if let Err(e) = unsubscribe.call0(&wasm_bindgen::JsValue::NULL) {
                    leptos::logging::warn!("identity: unsubscribe failed: {e:?}");
                }
                drop(callback);
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(on_change);
            Subscription::detached()
        }
    }

    async fn id_token(&self, identity: &ProviderIdentity) -> Result<String, ProviderError> {
        #[cfg(feature = "csr")]
        {
            let value = bindings::id_token(&identity.uid).await.map_err(|e| js_error(&e))?;
            value
                .as_string()
                .ok_or_else(|| ProviderError::Unavailable("identity token was not a string".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = identity;
            Err(unavailable())
        }
    }

    async fn sign_in_with_popup(&self) -> Result<(), ProviderError> {
        #[cfg(feature = "csr")]
        {
            settle(bindings::sign_in_with_popup().await)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    async fn sign_in_with_email(&self, email: &str, password: &str) -> Result<(), ProviderError> {
        #[cfg(feature = "csr")]
        {
            settle(bindings::sign_in_with_email(email, password).await)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(unavailable())
        }
    }

    async fn create_account(&self, email: &str, password: &str, display_name: &str) -> Result<(), ProviderError> {
        #[cfg(feature = "csr")]
        {
            settle(bindings::create_account(email, password, display_name).await)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password, display_name);
            Err(unavailable())
        }
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), ProviderError> {
        #[cfg(feature = "csr")]
        {
            settle(bindings::send_password_reset(email).await)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = email;
            Err(unavailable())
        }
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        #[cfg(feature = "csr")]
        {
            settle(bindings::sign_out().await)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }
}
