//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome while reading/writing shared state from
//! Leptos context providers.

pub mod approval_banner;
pub mod notification_bell;
