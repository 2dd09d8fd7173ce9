//! Read-only summary of the signed-in student's profile.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::app::PortalReconciler;
use crate::components::profile_sections::ProfileSections;
use crate::components::top_bar::TopBar;
use crate::net::fields::FormId;
use crate::net::types::Profile;
use crate::pages::STUDENT_LINKS;
use crate::state::session::Role;
use crate::util::auth::install_role_guard;

#[component]
pub fn ProfileViewPage() -> impl IntoView {
    let reconciler = expect_context::<PortalReconciler>();
    install_role_guard(reconciler.session().clone(), Role::Student, use_navigate());

    let profile = RwSignal::new(None::<Profile>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let fetched = reconciler.get_profile().await;
        profile.set(fetched);
        loading.set(false);
    });

    view! {
        <TopBar title="Student Profile" links=STUDENT_LINKS/>
        <div class="profile-page">
            {move || {
                if loading.get() {
                    return view! { <p class="profile-page__status">"Loading profile..."</p> }.into_any();
                }
                match profile.get() {
                    Some(found) if !found.is_empty() => view! { <ProfileSections profile=found/> }.into_any(),
                    _ => {
                        view! {
                            <div class="profile-page__empty">
                                <p>"No profile on record yet."</p>
                                <a class="form-button" href=FormId::Personal.route()>
                                    "Start your profile"
                                </a>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
