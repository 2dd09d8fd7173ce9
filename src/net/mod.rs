//! Networking modules for the placement API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `fields` is the form field catalog shared by
//! rendering and submission, and `types` defines the wire schema.

pub mod api;
pub mod fields;
pub mod types;
