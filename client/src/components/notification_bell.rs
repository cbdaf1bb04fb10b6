//! Header bell listing the signed-in user's notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the list kept fresh by the notification poller. Clicking an unread
//! item marks it read on the backend first; the local copy only flips once
//! the backend accepted the change.

#[cfg(test)]
#[path = "notification_bell_test.rs"]
mod notification_bell_test;

use leptos::prelude::*;
use marketplace_session::notifications::{self, Notification};

use crate::app::DASHBOARD_ROUTES;
use crate::net::api::Api;
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationsState;

const BADGE_CAP: usize = 9;

/// Badge text for `unread` items; `None` hides the badge.
pub(crate) fn badge_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
        n => Some(n.to_string()),
    }
}

pub(crate) fn item_class(notification: &Notification) -> &'static str {
    if notification.is_read { "notification-item" } else { "notification-item notification-item--unread" }
}

/// Click target for `notification`, limited to pages this app can render.
pub(crate) fn item_href(notification: &Notification, is_admin: bool) -> Option<String> {
    notifications::destination(notification, is_admin).filter(|href| {
        let path = href.split_once('?').map_or(href.as_str(), |(path, _)| path);
        DASHBOARD_ROUTES.contains(&path)
    })
}

fn mark_read(api: Api, notes: RwSignal<NotificationsState>, id: String) {
    leptos::task::spawn_local(async move {
        match api.mark_notification_read(&id).await {
            Ok(()) => notes.update(|n| n.mark_read(&id)),
            Err(e) => leptos::logging::warn!("notifications: mark read failed: {e}"),
        }
    });
}

#[component]
pub fn NotificationBell() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notes = expect_context::<RwSignal<NotificationsState>>();
    let api = StoredValue::new(expect_context::<Api>());

    let badge = move || notes.with(|n| badge_label(n.unread()));
    let toggle = move |_| notes.update(|n| n.open = !n.open);

    let on_mark_all = move |_| {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            match api.mark_all_notifications_read().await {
                Ok(()) => notes.update(NotificationsState::mark_all_read),
                Err(e) => leptos::logging::warn!("notifications: mark all read failed: {e}"),
            }
        });
    };

    view! {
        <div class="notification-bell">
            <button class="notification-bell__button" on:click=toggle>
                "🔔"
                {move || badge().map(|text| view! { <span class="notification-bell__badge">{text}</span> })}
            </button>
            <Show when=move || notes.with(|n| n.open)>
                <div class="notification-bell__dropdown">
                    <div class="notification-bell__header">
                        <span>"Notifications"</span>
                        <button class="notification-bell__mark-all" on:click=on_mark_all>
                            "Mark all read"
                        </button>
                    </div>
                    <Show
                        when=move || notes.with(|n| !n.items.is_empty())
                        fallback=|| view! { <p class="notification-bell__empty">"No notifications"</p> }
                    >
                        <For
                            each=move || notes.with(|n| n.items.clone())
                            key=|n| (n.id.clone(), n.is_read)
                            let:item
                        >
                            {
                                let is_admin = auth.with_untracked(AuthState::is_admin);
                                let href = item_href(&item, is_admin);
                                let class = item_class(&item);
                                let unread = !item.is_read;
                                let id = item.id.clone();
                                let on_click = move |_| {
                                    if unread {
                                        mark_read(api.get_value(), notes, id.clone());
                                    }
                                    notes.update(|n| n.open = false);
                                };
                                view! {
                                    <a class=class href=href on:click=on_click>
                                        <span class="notification-item__message">{item.message.clone()}</span>
                                        <span class="notification-item__time">{item.created_at.clone().unwrap_or_default()}</span>
                                    </a>
                                }
                            }
                        </For>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
