//! Client-side reactive state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each module owns one plain struct stored in an `RwSignal`. Session data is
//! written only by the reconciler observer; views treat it as read-only.

pub mod auth;
pub mod notifications;
