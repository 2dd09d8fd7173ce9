//! Client state: persisted drafts, the cached profile, the session, and
//! toast notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is plain Rust over the storage, form, and API seams so it
//! runs under native unit tests. Pages wire it to the browser.

pub mod draft;
pub mod notices;
pub mod profile_cache;
pub mod reconciler;
pub mod session;
