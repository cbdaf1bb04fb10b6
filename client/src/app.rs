//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the session reconciler from the browser adapters, spawns its driver
//! on the local executor, and provides the auth signal plus action handle to
//! every route. Routes render only after the first provider event has been
//! resolved, so protected pages never flash a signed-out state on reload.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use marketplace_session::{Reconciler, mount};

use crate::config::ClientConfig;
use crate::net::api::{Api, HttpExchange};
use crate::net::identity::BrowserIdentity;
use crate::net::storage::LocalStorageTokenStore;
use crate::pages::{
    dashboard::DashboardPage,
    login::{ForgotPasswordPage, LoginPage},
    register::RegisterPage,
    users::UsersPage,
};
use crate::state::auth::{ActionsHandle, AuthState, SignalObserver};
use crate::state::notifications::NotificationsState;
use crate::util::notification_poll::install_notification_poller;

/// Dashboard paths this app routes; links elsewhere would hit the fallback.
pub(crate) const DASHBOARD_ROUTES: &[&str] = &["/dashboard", "/dashboard/users"];

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::default());
    let notes = RwSignal::new(NotificationsState::default());
    let api = Api::new(&config.api_base, &config.session.token_key);

    let reconciler = Reconciler::new(
        config.session.clone(),
        Rc::new(BrowserIdentity),
        HttpExchange::new(&config.api_base),
        LocalStorageTokenStore::new(&config.session.token_key),
    )
    .with_observer(SignalObserver::new(auth));
    let (actions, subscription, driver) = mount(reconciler);
    leptos::task::spawn_local(driver);

    // Released with the root owner, which unsubscribes from the provider.
    let _subscription = StoredValue::new_local(subscription);
    let actions: ActionsHandle = StoredValue::new_local(actions);

    provide_context(auth);
    provide_context(notes);
    provide_context(actions);
    provide_context(api.clone());

    install_notification_poller(auth, notes, api, config.session.poll_interval);

    view! {
        <Title text="Car Marketplace"/>

        <Show
            when=move || !auth.with(|s| s.loading)
            fallback=|| view! { <div class="app-loading">"Loading..."</div> }
        >
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("users")) view=UsersPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                </Routes>
            </Router>
        </Show>
    }
}
