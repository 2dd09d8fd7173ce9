//! Admin landing page with aggregate placement counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Counters come from the API's dashboard endpoint on every visit; nothing
//! here is cached locally.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::app::PortalReconciler;
use crate::components::top_bar::TopBar;
#[cfg(feature = "csr")]
use crate::net::api::{ApiError, HttpApi};
use crate::net::types::DashboardStats;
use crate::pages::ADMIN_LINKS;
#[cfg(feature = "csr")]
use crate::state::reconciler::LOGIN_ROUTE;
use crate::state::session::Role;
use crate::util::auth::install_role_guard;
#[cfg(feature = "csr")]
use crate::util::shell::Shell;

/// Label/value pairs for the stat cards, in display order.
fn stat_cards(stats: &DashboardStats) -> Vec<(&'static str, String)> {
    vec![
        ("Total Students", stats.total_students.to_string()),
        ("Profiles Completed", stats.profiles_completed.to_string()),
        ("Profile Completion", format!("{:.1}%", stats.profile_completion_pct)),
        ("Students Placed", stats.students_placed.to_string()),
        ("Not Placed", stats.students_not_placed.to_string()),
        ("In Process", stats.students_in_process.to_string()),
        ("Higher Studies", stats.higher_studies.to_string()),
        ("Placement Rate", format!("{:.1}%", stats.placement_pct)),
        ("Average Package", format!("{:.2} LPA", stats.avg_package)),
        ("Highest Package", format!("{:.2} LPA", stats.max_package)),
        ("Lowest Package", format!("{:.2} LPA", stats.min_package)),
        ("Companies", stats.total_companies.to_string()),
    ]
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let reconciler = expect_context::<PortalReconciler>();
    install_role_guard(reconciler.session().clone(), Role::Admin, use_navigate());

    let stats = RwSignal::new(None::<DashboardStats>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let api = expect_context::<HttpApi>();
        let reconciler = reconciler.clone();
        if let Some(token) = reconciler.session().credential() {
            leptos::task::spawn_local(async move {
                match api.fetch_dashboard(&token).await {
                    Ok(loaded) => stats.set(Some(loaded)),
                    Err(ApiError::Unauthorized) => {
                        log::warn!("dashboard rejected credential; signing out");
                        reconciler.session().clear();
                        reconciler.shell().navigate(LOGIN_ROUTE);
                    }
                    Err(e) => {
                        log::error!("dashboard fetch failed: {e}");
                        error.set(Some(format!("Could not load dashboard: {e}")));
                    }
                }
            });
        }
    }

    view! {
        <TopBar title="Admin" links=ADMIN_LINKS/>
        <div class="dashboard-page">
            <h1 class="dashboard-page__title">"Placement Overview"</h1>
            {move || {
                if let Some(message) = error.get() {
                    return view! { <p class="dashboard-page__error">{message}</p> }.into_any();
                }
                let Some(loaded) = stats.get() else {
                    return view! { <p class="dashboard-page__status">"Loading dashboard..."</p> }.into_any();
                };
                stat_cards(&loaded)
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__value">{value}</span>
                                <span class="stat-card__label">{label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
