//! Root component: context providers and routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reads its services from Leptos context. They are all cheap
//! handles (storage and clock are zero-sized, the API holds its base URL, the
//! shell holds a signal), so pages clone them freely into event handlers and
//! spawned tasks.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{StaticSegment, path};

use crate::components::toast_stack::ToastStack;
use crate::config::PortalConfig;
use crate::net::api::HttpApi;
use crate::net::fields::FormId;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::admin_lookup::AdminLookupPage;
use crate::pages::login::LoginPage;
use crate::pages::profile_form::ProfileFormPage;
use crate::pages::profile_view::ProfileViewPage;
use crate::state::notices::NoticeState;
use crate::state::profile_cache::SystemClock;
use crate::state::reconciler::ProfileReconciler;
use crate::util::shell::BrowserShell;
use crate::util::storage::LocalStorage;

/// Where the API returns the browser after sign-in, with `token` + `role` or
/// `error` in the query string.
const AUTH_CALLBACK_PATH: (StaticSegment<&str>, StaticSegment<&str>) = (StaticSegment("auth"), StaticSegment("callback.html"));

/// The reconciler as wired in the browser.
pub type PortalReconciler = ProfileReconciler<LocalStorage, HttpApi, SystemClock, BrowserShell>;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PortalConfig::from_build_env();
    log::info!("placement portal using API at {}", config.api_base_url);

    let notices = RwSignal::new(NoticeState::default());
    let api = HttpApi::new(config.api_base_url.clone());
    let reconciler: PortalReconciler =
        ProfileReconciler::new(LocalStorage, api.clone(), SystemClock, BrowserShell::new(notices), config.profile_ttl);

    provide_context(config);
    provide_context(notices);
    provide_context(api);
    provide_context(reconciler);

    view! {
        <Title text="Placement Portal"/>
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="app__not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=LoginPage/>
                    <Route path=path!("/auth/callback") view=LoginPage/>
                    <Route path=AUTH_CALLBACK_PATH view=LoginPage/>
                    <Route path=path!("/profile") view=ProfileViewPage/>
                    <Route
                        path=path!("/profile/personal")
                        view=|| view! { <ProfileFormPage form_id=FormId::Personal/> }
                    />
                    <Route
                        path=path!("/profile/academic")
                        view=|| view! { <ProfileFormPage form_id=FormId::Academic/> }
                    />
                    <Route
                        path=path!("/profile/skills")
                        view=|| view! { <ProfileFormPage form_id=FormId::Skills/> }
                    />
                    <Route path=path!("/admin") view=AdminDashboardPage/>
                    <Route path=path!("/admin/lookup") view=AdminLookupPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
