//! Dashboard banner for accounts awaiting (or just granted) approval.
//!
//! The "approved" message is shown once per user: the first render records a
//! flag in `localStorage` under `hasSeenApprovedMessage_{id}`.

#[cfg(test)]
#[path = "approval_banner_test.rs"]
mod approval_banner_test;

use leptos::prelude::*;
use marketplace_session::approval::{ApprovalNotice, approval_notice, approved_notice_key};

use crate::net::storage::{read_item, write_item};
use crate::state::auth::AuthState;

pub(crate) fn notice_text(notice: ApprovalNotice) -> Option<&'static str> {
    match notice {
        ApprovalNotice::Pending => {
            Some("Your account is pending approval. An administrator will review it shortly.")
        }
        ApprovalNotice::JustApproved => Some("Your account has been approved. You can now list cars."),
        ApprovalNotice::None => None,
    }
}

#[component]
pub fn ApprovalBanner() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = RwSignal::new(ApprovalNotice::None);
    let shown_for = StoredValue::new(None::<(String, bool)>);

    Effect::new(move || {
        let Some(user) = auth.with(|s| s.user.clone()) else {
            notice.set(ApprovalNotice::None);
            shown_for.set_value(None);
            return;
        };
        let seen_key = (user.id().to_owned(), user.is_approved());
        if shown_for.with_value(|prev| prev.as_ref() == Some(&seen_key)) {
            return;
        }
        shown_for.set_value(Some(seen_key));
        let key = approved_notice_key(user.id());
        let next = approval_notice(&user, read_item(&key).is_some());
        if next == ApprovalNotice::JustApproved {
            if let Err(e) = write_item(&key, "true") {
                leptos::logging::warn!("approval: could not record notice: {e}");
            }
        }
        notice.set(next);
    });

    view! {
        {move || {
            let current = notice.get();
            notice_text(current).map(|text| {
                let class = if current == ApprovalNotice::Pending {
                    "approval-banner approval-banner--pending"
                } else {
                    "approval-banner approval-banner--approved"
                };
                view! { <div class=class>{text}</div> }
            })
        }}
    }
}
