//! User-facing side effects: notices and navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The reconciler reports outcomes through [`Shell`] instead of touching the
//! page itself. [`BrowserShell`] turns notices into toasts and navigation
//! into a location change.

use leptos::prelude::*;

use crate::state::notices::{NoticeLevel, NoticeState};

pub trait Shell {
    fn notify(&self, level: NoticeLevel, message: &str);
    fn navigate(&self, path: &str);
}

#[derive(Clone, Copy)]
pub struct BrowserShell {
    notices: RwSignal<NoticeState>,
}

impl BrowserShell {
    pub fn new(notices: RwSignal<NoticeState>) -> Self {
        Self { notices }
    }
}

impl Shell for BrowserShell {
    fn notify(&self, level: NoticeLevel, message: &str) {
        let mut id = 0;
        self.notices.update(|n| id = n.push(level, message));

        #[cfg(feature = "csr")]
        {
            let notices = self.notices;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::state::notices::NOTICE_TTL_MS).await;
                notices.update(|n| n.dismiss(id));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }

    fn navigate(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}
