//! Background notification polling tied to the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once at the app root. A loop starts when a user signs in,
//! fetches immediately and then on every poll interval, and stops as soon as
//! the session ends. Each loop carries a [`PollGate`] generation so a fetch
//! that resolves after sign-out is discarded instead of repopulating the bell.

use std::time::Duration;

use leptos::prelude::*;
use marketplace_session::notifications::{PollChange, PollGate};

use crate::net::api::Api;
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationsState;

/// Start/stop the poll loop as `auth` changes.
pub fn install_notification_poller(
    auth: RwSignal<AuthState>,
    notes: RwSignal<NotificationsState>,
    api: Api,
    interval: Duration,
) {
    let gate = StoredValue::new(PollGate::default());

    Effect::new(move || {
        let signed_in = auth.with(|s| s.user.is_some());
        let Some(mut next) = gate.try_get_value() else {
            return;
        };
        let change = next.sync(signed_in);
        gate.set_value(next);
        match change {
            PollChange::Start(generation) => spawn_poll_loop(gate, generation, notes, api.clone(), interval),
            PollChange::Stop => notes.update(NotificationsState::clear),
            PollChange::Unchanged => {}
        }
    });

    on_cleanup(move || {
        if let Some(mut next) = gate.try_get_value() {
            next.sync(false);
            gate.set_value(next);
        }
    });
}

fn still_current(gate: StoredValue<PollGate>, generation: u64) -> bool {
    gate.try_with_value(|g| g.is_current(generation)).unwrap_or(false)
}

#[cfg(feature = "csr")]
fn spawn_poll_loop(
    gate: StoredValue<PollGate>,
    generation: u64,
    notes: RwSignal<NotificationsState>,
    api: Api,
    interval: Duration,
) {
    let period_ms = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
    leptos::task::spawn_local(async move {
        while still_current(gate, generation) {
            let result = api.fetch_notifications().await;
            if !still_current(gate, generation) {
                break;
            }
            notes.update(|n| n.apply_poll(result));
            gloo_timers::future::TimeoutFuture::new(period_ms).await;
        }
    });
}

#[cfg(not(feature = "csr"))]
fn spawn_poll_loop(
    gate: StoredValue<PollGate>,
    generation: u64,
    notes: RwSignal<NotificationsState>,
    api: Api,
    interval: Duration,
) {
    let _ = (still_current(gate, generation), notes, api, interval);
}
