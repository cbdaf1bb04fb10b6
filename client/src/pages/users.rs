//! Admin user management: approve or reject pending accounts.
//!
//! Admins only; everyone else is sent back to `/dashboard`. Rejecting deletes
//! the account request. Both queues are refetched after every action.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use marketplace_session::ApplicationUser;
use marketplace_session::approval::{ReviewQueues, partition_for_review};

use crate::net::api::Api;
use crate::state::auth::AuthState;
use crate::util::auth::{install_admin_redirect, install_unauth_redirect};

pub(crate) fn user_label(user: &ApplicationUser) -> String {
    match (user.name.trim(), user.email.trim()) {
        ("", "") => format!("User #{}", user.id),
        ("", email) => email.to_owned(),
        (name, "") => name.to_owned(),
        (name, email) => format!("{name} <{email}>"),
    }
}

pub(crate) fn summary(queues: &ReviewQueues) -> String {
    format!("{} pending · {} approved", queues.pending.len(), queues.approved.len())
}

fn refresh(api: Api, queues: RwSignal<ReviewQueues>, info: RwSignal<String>, loading: RwSignal<bool>) {
    leptos::task::spawn_local(async move {
        match api.fetch_users().await {
            Ok(users) => queues.set(partition_for_review(users)),
            Err(e) => info.set(format!("Failed to load users: {e}")),
        }
        loading.set(false);
    });
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());
    install_admin_redirect(auth, navigate);

    let queues = RwSignal::new(ReviewQueues::default());
    let info = RwSignal::new(String::new());
    let loading = RwSignal::new(true);

    let api_load = api.clone();
    Effect::new(move || {
        if auth.with(AuthState::is_admin) {
            refresh(api_load.clone(), queues, info, loading);
        }
    });

    let api_approve = api.clone();
    let on_approve = Callback::new(move |id: String| {
        let api = api_approve.clone();
        leptos::task::spawn_local(async move {
            match api.approve_user(&id).await {
                Ok(()) => info.set("User approved successfully!".to_owned()),
                Err(e) => info.set(format!("Failed to approve user: {e}")),
            }
            refresh(api, queues, info, loading);
        });
    });

    let api_reject = api;
    let on_reject = Callback::new(move |id: String| {
        let api = api_reject.clone();
        leptos::task::spawn_local(async move {
            match api.reject_user(&id).await {
                Ok(()) => info.set("User request rejected.".to_owned()),
                Err(e) => info.set(format!("Failed to reject user: {e}")),
            }
            refresh(api, queues, info, loading);
        });
    });

    view! {
        <div class="users-page">
            <h1>"User Management"</h1>
            <Show when=move || !info.get().is_empty()>
                <p class="users-message">{move || info.get()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <p class="users-summary">{move || queues.with(summary)}</p>
                <h2>"Pending approval"</h2>
                <ul class="users-list">
                    <For
                        each=move || queues.with(|q| q.pending.clone())
                        key=|u| u.id.clone()
                        let:user
                    >
                        {
                            let id_approve = user.id.clone();
                            let id_reject = user.id.clone();
                            view! {
                                <li class="users-list__item">
                                    <span>{user_label(&user)}</span>
                                    <button on:click=move |_| on_approve.run(id_approve.clone())>"Approve"</button>
                                    <button on:click=move |_| on_reject.run(id_reject.clone())>"Reject"</button>
                                </li>
                            }
                        }
                    </For>
                </ul>
                <h2>"Approved"</h2>
                <ul class="users-list">
                    <For
                        each=move || queues.with(|q| q.approved.clone())
                        key=|u| u.id.clone()
                        let:user
                    >
                        <li class="users-list__item">{user_label(&user)}</li>
                    </For>
                </ul>
            </Show>
        </div>
    }
}
