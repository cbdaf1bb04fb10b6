//! REST API helpers for the marketplace backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning errors, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The token exchange reports [`ExchangeError`] so the session reconciler can
//! pick the right `auth_error`. Every other call returns `Result<_, String>`
//! carrying the backend `message` when present; callers degrade the UI
//! instead of panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use marketplace_session::error::backend_message;
use marketplace_session::notifications::Notification;
use marketplace_session::{ApplicationSession, ApplicationUser, ExchangeBackend, ExchangeError};

#[cfg(feature = "csr")]
use super::storage::read_item;

#[cfg(any(test, feature = "csr"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(any(test, feature = "csr"))]
fn notification_read_endpoint(base: &str, id: &str) -> String {
    format!("{base}/notifications/{id}/read")
}

#[cfg(any(test, feature = "csr"))]
fn user_endpoint(base: &str, id: &str) -> String {
    format!("{base}/auth/users/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn user_approve_endpoint(base: &str, id: &str) -> String {
    format!("{base}/auth/users/{id}/approve")
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Backend `message` from an error body, else the generic status line.
#[cfg(any(test, feature = "csr"))]
fn request_failed_message(status: u16, body: &str) -> String {
    backend_message(body).unwrap_or_else(|| format!("Request failed with status code {status}"))
}

/// Decode a successful `POST /auth/login` body.
///
/// # Errors
///
/// Returns [`ExchangeError::Malformed`] if the body is not `{ token, user }`.
pub fn parse_session(body: &str) -> Result<ApplicationSession, ExchangeError> {
    let session: ApplicationSession = serde_json::from_str(body).map_err(|e| ExchangeError::Malformed(e.to_string()))?;
    if session.token.trim().is_empty() {
        return Err(ExchangeError::Malformed("empty token".to_owned()));
    }
    Ok(session)
}

/// Map a non-2xx exchange response onto [`ExchangeError::Rejected`].
#[must_use]
pub fn rejected_exchange(status: u16, body: &str) -> ExchangeError {
    ExchangeError::Rejected { status, message: backend_message(body) }
}

/// [`ExchangeBackend`] posting identity tokens to `{base}/auth/login`.
#[derive(Clone, Debug)]
pub struct HttpExchange {
    base: String,
}

impl HttpExchange {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self { base: base.to_owned() }
    }
}

#[async_trait::async_trait(?Send)]
impl ExchangeBackend for HttpExchange {
    async fn exchange(&self, id_token: &str) -> Result<ApplicationSession, ExchangeError> {
        #[cfg(feature = "csr")]
        {
            let payload = serde_json::json!({ "token": id_token });
            let resp = gloo_net::http::Request::post(&endpoint(&self.base, "/auth/login"))
                .json(&payload)
                .map_err(|e| ExchangeError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ExchangeError::Transport(e.to_string()))?;
            let body = resp.text().await.map_err(|e| ExchangeError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(rejected_exchange(resp.status(), &body));
            }
            parse_session(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.base, id_token);
            Err(ExchangeError::Transport("not available outside the browser".to_owned()))
        }
    }
}

/// Authenticated REST calls; the bearer token is read from storage per request.
#[derive(Clone, Debug)]
pub struct Api {
    base: String,
    token_key: String,
}

impl Api {
    #[must_use]
    pub fn new(base: &str, token_key: &str) -> Self {
        Self { base: base.to_owned(), token_key: token_key.to_owned() }
    }

    #[cfg(feature = "csr")]
    fn authorized(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match read_item(&self.token_key) {
            Some(token) => builder.header("Authorization", &bearer_header(&token)),
            None => builder,
        }
    }

    #[cfg(feature = "csr")]
    async fn expect_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, String> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(request_failed_message(status, &body))
    }

    /// `GET /notifications`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the request fails or the body is not a list.
    pub async fn fetch_notifications(&self) -> Result<Vec<Notification>, String> {
        #[cfg(feature = "csr")]
        {
            let req = self.authorized(gloo_net::http::Request::get(&endpoint(&self.base, "/notifications")));
            let resp = req.send().await.map_err(|e| e.to_string())?;
            let resp = Self::expect_ok(resp).await?;
            resp.json::<Vec<Notification>>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.base, &self.token_key);
            Err("not available outside the browser".to_owned())
        }
    }

    /// `PUT /notifications/{id}/read`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the request fails.
    pub async fn mark_notification_read(&self, id: &str) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let req = self.authorized(gloo_net::http::Request::put(&notification_read_endpoint(&self.base, id)));
            let resp = req.send().await.map_err(|e| e.to_string())?;
            Self::expect_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err("not available outside the browser".to_owned())
        }
    }

    /// `PUT /notifications/read-all`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the request fails.
    pub async fn mark_all_notifications_read(&self) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let req = self.authorized(gloo_net::http::Request::put(&endpoint(&self.base, "/notifications/read-all")));
            let resp = req.send().await.map_err(|e| e.to_string())?;
            Self::expect_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err("not available outside the browser".to_owned())
        }
    }

    /// `GET /auth/users` (admin only).
    ///
    /// # Errors
    ///
    /// Returns an error string if the request fails or is forbidden.
    pub async fn fetch_users(&self) -> Result<Vec<ApplicationUser>, String> {
        #[cfg(feature = "csr")]
        {
            let req = self.authorized(gloo_net::http::Request::get(&endpoint(&self.base, "/auth/users")));
            let resp = req.send().await.map_err(|e| e.to_string())?;
            let resp = Self::expect_ok(resp).await?;
            resp.json::<Vec<ApplicationUser>>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err("not available outside the browser".to_owned())
        }
    }

    /// `PUT /auth/users/{id}/approve` (admin only).
    ///
    /// # Errors
    ///
    /// Returns an error string if the request fails or is forbidden.
    pub async fn approve_user(&self, id: &str) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let req = self.authorized(gloo_net::http::Request::put(&user_approve_endpoint(&self.base, id)));
            let resp = req.send().await.map_err(|e| e.to_string())?;
            Self::expect_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err("not available outside the browser".to_owned())
        }
    }

    /// `DELETE /auth/users/{id}` (admin only): reject a pending account.
    ///
    /// # Errors
    ///
    /// Returns an error string if the request fails or is forbidden.
    pub async fn reject_user(&self, id: &str) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let req = self.authorized(gloo_net::http::Request::delete(&user_endpoint(&self.base, id)));
            let resp = req.send().await.map_err(|e| e.to_string())?;
            Self::expect_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err("not available outside the browser".to_owned())
        }
    }

    /// `POST /auth/send-code { email }`.
    ///
    /// # Errors
    ///
    /// Returns the backend message (or status line) if the code is not sent.
    pub async fn send_verification_code(&self, email: &str) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let payload = serde_json::json!({ "email": email });
            let resp = gloo_net::http::Request::post(&endpoint(&self.base, "/auth/send-code"))
                .json(&payload)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            Self::expect_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = email;
            Err("not available outside the browser".to_owned())
        }
    }

    /// `POST /auth/verify-code { email, code }`.
    ///
    /// # Errors
    ///
    /// Returns the backend message (or status line) if the code is rejected.
    pub async fn verify_code(&self, email: &str, code: &str) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let payload = serde_json::json!({ "email": email, "code": code });
            let resp = gloo_net::http::Request::post(&endpoint(&self.base, "/auth/verify-code"))
                .json(&payload)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            Self::expect_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, code);
            Err("not available outside the browser".to_owned())
        }
    }
}
