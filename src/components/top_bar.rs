//! Header shown on signed-in pages, with the sign-out action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::PortalReconciler;
use crate::state::reconciler::LOGIN_ROUTE;

/// One header link: `(label, href)`.
pub type NavLink = (&'static str, &'static str);

#[component]
pub fn TopBar(title: &'static str, links: &'static [NavLink]) -> impl IntoView {
    let reconciler = expect_context::<PortalReconciler>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        reconciler.sign_out();
        log::info!("signed out");
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <header class="top-bar">
            <span class="top-bar__title">{title}</span>
            <nav class="top-bar__links">
                {links
                    .iter()
                    .map(|(label, href)| view! { <a class="top-bar__link" href=*href>{*label}</a> })
                    .collect::<Vec<_>>()}
            </nav>
            <button class="top-bar__logout" type="button" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
