//! Auto-dismissing toast notices.

use leptos::prelude::*;

use crate::state::notices::NoticeState;

#[component]
pub fn ToastStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div class=format!("toast {}", notice.level.css_modifier())>
                                <span class="toast__message">{notice.message}</span>
                                <button
                                    class="toast__close"
                                    type="button"
                                    aria-label="Dismiss"
                                    on:click=move |_| notices.update(|n| n.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
