//! Utility helpers shared across pages and state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, form controls, page
//! side effects) behind small traits so state logic stays testable.

pub mod auth;
#[cfg(feature = "csr")]
pub mod dom_form;
pub mod form_controls;
pub mod shell;
pub mod storage;
