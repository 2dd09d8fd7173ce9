//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome while reading state from Leptos
//! context providers.

pub mod profile_sections;
pub mod toast_stack;
pub mod top_bar;
