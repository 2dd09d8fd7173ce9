//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

use crate::components::top_bar::NavLink;

pub mod admin_dashboard;
pub mod admin_lookup;
pub mod login;
pub mod profile_form;
pub mod profile_view;

pub(crate) const STUDENT_LINKS: &[NavLink] = &[
    ("Personal", "/profile/personal"),
    ("Academic", "/profile/academic"),
    ("Skills", "/profile/skills"),
    ("My Profile", "/profile"),
];

pub(crate) const ADMIN_LINKS: &[NavLink] = &[("Dashboard", "/admin"), ("Student Lookup", "/admin/lookup")];
