//! One step of the student profile form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The three steps share this page, rendered from the field catalog. On
//! mount the form is populated from the server profile and the draft;
//! "Back" and "Next" save the step into the draft before navigating, and the
//! last step submits the merged draft.

#[cfg(test)]
#[path = "profile_form_test.rs"]
mod profile_form_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::PortalReconciler;
use crate::components::top_bar::TopBar;
use crate::net::fields::{FieldKind, FieldSpec, FormId, InputType};
use crate::pages::STUDENT_LINKS;
use crate::state::session::Role;
use crate::util::auth::install_role_guard;
#[cfg(feature = "csr")]
use crate::state::notices::NoticeLevel;
#[cfg(feature = "csr")]
use crate::state::reconciler::SubmitOutcome;
#[cfg(feature = "csr")]
use crate::util::dom_form::DomForm;
#[cfg(feature = "csr")]
use crate::util::shell::Shell;

fn step_label(form_id: FormId) -> String {
    let position = FormId::ALL.iter().position(|f| *f == form_id).unwrap_or(0) + 1;
    format!("Step {position} of {}", FormId::ALL.len())
}

fn primary_label(form_id: FormId) -> &'static str {
    if form_id.next().is_some() { "Save & Next" } else { "Submit Profile" }
}

fn field_control(field: &'static FieldSpec) -> AnyView {
    let name = field.name;
    match field.kind {
        FieldKind::Input(ty) => {
            let step = (ty == InputType::Number).then_some("any");
            view! { <input class="form-input" type=ty.as_str() id=name name=name step=step/> }.into_any()
        }
        FieldKind::TextArea => view! { <textarea class="form-textarea" id=name name=name rows="3"></textarea> }.into_any(),
        FieldKind::Choice(options) => {
            let buttons = options
                .iter()
                .map(|option| {
                    view! {
                        <label class="form-choice__option">
                            <input type="radio" name=name value=*option/>
                            <span>{*option}</span>
                        </label>
                    }
                })
                .collect::<Vec<_>>();
            view! { <div class="form-choice" role="radiogroup" id=name>{buttons}</div> }.into_any()
        }
        FieldKind::File => view! { <input class="form-file" type="file" accept="image/*" id=name name=name/> }.into_any(),
    }
}

#[component]
pub fn ProfileFormPage(form_id: FormId) -> impl IntoView {
    let reconciler = expect_context::<PortalReconciler>();
    let navigate = use_navigate();
    install_role_guard(reconciler.session().clone(), Role::Student, navigate.clone());

    let form_ref = NodeRef::<leptos::html::Form>::new();
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let reconciler = reconciler.clone();
        Effect::new(move || {
            let Some(form) = form_ref.get() else {
                return;
            };
            let reconciler = reconciler.clone();
            leptos::task::spawn_local(async move {
                let dom = DomForm::new(form);
                if let Err(e) = reconciler.populate(form_id, &dom).await {
                    log::error!("failed to populate {form_id:?}: {e}");
                    reconciler.shell().notify(NoticeLevel::Warning, "Your saved draft could not be restored.");
                }
            });
        });
    }

    let save_then_go = {
        let reconciler = reconciler.clone();
        let navigate = navigate.clone();
        move |target: &'static str| {
            if busy.get_untracked() {
                return;
            }
            #[cfg(feature = "csr")]
            {
                let Some(form) = form_ref.get_untracked() else {
                    return;
                };
                busy.set(true);
                let reconciler = reconciler.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let dom = DomForm::new(form);
                    match reconciler.drafts().save(&dom).await {
                        Ok(_) => navigate(target, NavigateOptions::default()),
                        Err(e) => {
                            log::error!("failed to save {form_id:?}: {e}");
                            reconciler.shell().notify(NoticeLevel::Error, &format!("Could not save your answers: {e}"));
                            busy.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (target, &reconciler, &navigate);
            }
        }
    };

    let submit_profile = move || {
        if busy.get_untracked() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(form) = form_ref.get_untracked() else {
                return;
            };
            busy.set(true);
            let reconciler = reconciler.clone();
            leptos::task::spawn_local(async move {
                let dom = DomForm::new(form);
                match reconciler.submit(&[dom]).await {
                    Ok(SubmitOutcome::Submitted | SubmitOutcome::SessionExpired) => {}
                    Ok(_) => busy.set(false),
                    Err(e) => {
                        log::error!("failed to prepare submission: {e}");
                        reconciler.shell().notify(NoticeLevel::Error, &format!("Could not prepare your submission: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
    };

    let on_submit = {
        let save_then_go = save_then_go.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            match form_id.next() {
                Some(next) => save_then_go(next.route()),
                None => submit_profile(),
            }
        }
    };

    let back = form_id.previous().map(|previous| {
        let save_then_go = save_then_go.clone();
        view! {
            <button
                class="form-button form-button--secondary"
                type="button"
                disabled=move || busy.get()
                on:click=move |_| save_then_go(previous.route())
            >
                "Back"
            </button>
        }
    });

    let fields = form_id
        .fields()
        .iter()
        .map(|field| {
            view! {
                <div class="form-field">
                    <label class="form-field__label" for=field.name>{field.label}</label>
                    {field_control(field)}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <TopBar title="Student Profile" links=STUDENT_LINKS/>
        <div class="form-page">
            <p class="form-page__step">{step_label(form_id)}</p>
            <h1 class="form-page__title">{form_id.title()}</h1>
            <form class="profile-form" id=form_id.element_id() node_ref=form_ref on:submit=on_submit>
                {fields}
                <div class="form-actions">
                    {back}
                    <button class="form-button" type="submit" disabled=move || busy.get()>
                        {primary_label(form_id)}
                    </button>
                </div>
            </form>
        </div>
    }
}
