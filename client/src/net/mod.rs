//! Networking and browser-service adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and the token exchange, `identity` binds the
//! identity provider SDK, and `storage` wraps `localStorage`. Each one
//! implements a `marketplace-session` port so the reconciler never touches
//! browser APIs directly.

pub mod api;
pub mod identity;
pub mod storage;
