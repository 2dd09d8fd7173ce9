//! Read-only rendering of a profile, one section per form step.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the student's own summary page and the admin roll-number
//! lookup. Labels come from the field catalog so both stay in step with the
//! forms.

#[cfg(test)]
#[path = "profile_sections_test.rs"]
mod profile_sections_test;

use leptos::prelude::*;

use crate::net::fields::{FieldKind, FormId, PHOTO_FIELD};
use crate::net::types::Profile;

const NOT_PROVIDED: &str = "Not provided";

/// Label/value rows for one form section; photo fields are rendered apart.
fn section_rows(form_id: FormId, profile: &Profile) -> Vec<(&'static str, String)> {
    form_id
        .fields()
        .iter()
        .filter(|f| !matches!(f.kind, FieldKind::File))
        .map(|f| (f.label, profile.display(f.name).unwrap_or_else(|| NOT_PROVIDED.to_owned())))
        .collect()
}

/// Image source for the stored photo, if it is an inline image or a URL.
fn photo_src(profile: &Profile) -> Option<String> {
    profile
        .display(PHOTO_FIELD)
        .filter(|src| src.starts_with("data:image/") || src.starts_with("https://") || src.starts_with("http://"))
}

#[component]
pub fn ProfileSections(profile: Profile) -> impl IntoView {
    let photo = photo_src(&profile);
    let heading = profile.display("name").unwrap_or_else(|| "Student".to_owned());
    let subheading = profile.display("roll_no");

    let sections = FormId::ALL
        .into_iter()
        .map(|form_id| {
            let rows = section_rows(form_id, &profile)
                .into_iter()
                .map(|(label, value)| {
                    let missing = value == NOT_PROVIDED;
                    view! {
                        <div class="profile-row">
                            <dt class="profile-row__label">{label}</dt>
                            <dd class="profile-row__value" class:profile-row__value--missing=missing>{value}</dd>
                        </div>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <section class="profile-section">
                    <h2 class="profile-section__title">{form_id.title()}</h2>
                    <dl class="profile-section__rows">{rows}</dl>
                </section>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="profile-summary">
            <header class="profile-summary__header">
                {photo.map(|src| view! { <img class="profile-summary__photo" src=src alt="Profile photo"/> })}
                <div>
                    <h1 class="profile-summary__name">{heading}</h1>
                    {subheading.map(|roll| view! { <p class="profile-summary__roll">{roll}</p> })}
                </div>
            </header>
            {sections}
        </div>
    }
}
