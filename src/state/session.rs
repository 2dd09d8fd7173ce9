//! Signed-in session: bearer credential and role.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API's login flow ends with a redirect back to this client carrying
//! `?token=…&role=…` (or `?error=…`). The credential and role are kept in
//! local storage and read by every authenticated call and route guard.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::{KeyValueStore, ROLE_KEY, StorageError, TOKEN_KEY};

/// Who is signed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }

    /// Parse a stored or query role; anything but `admin` is a student.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("admin") { Self::Admin } else { Self::Student }
    }

    /// Route a freshly signed-in user lands on.
    #[must_use]
    pub fn landing_route(self) -> &'static str {
        match self {
            Self::Student => crate::net::fields::FormId::Personal.route(),
            Self::Admin => "/admin",
        }
    }
}

/// Outcome of the login redirect's query parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthCallback {
    SignedIn { token: String, role: Role },
    Failed(String),
    Absent,
}

impl AuthCallback {
    /// Classify the `token`, `role`, and `error` query parameters.
    #[must_use]
    pub fn from_params(token: Option<&str>, role: Option<&str>, error: Option<&str>) -> Self {
        if let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) {
            return Self::SignedIn { token: token.to_owned(), role: role.map(Role::parse).unwrap_or_default() };
        }
        match error.map(str::trim).filter(|e| !e.is_empty()) {
            Some(message) => Self::Failed(message.to_owned()),
            None => Self::Absent,
        }
    }
}

/// URL that starts the API's login flow for `role`.
#[must_use]
pub fn login_url(api_base_url: &str, role: Role) -> String {
    format!("{api_base_url}/auth/login?role={}", role.as_str())
}

/// Session persistence over a key-value store.
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored bearer credential, if any.
    pub fn credential(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    /// The stored role; `None` when signed out.
    pub fn role(&self) -> Option<Role> {
        self.credential()?;
        Some(self.store.get(ROLE_KEY).as_deref().map(Role::parse).unwrap_or_default())
    }

    /// Persist a credential and role after a successful login redirect.
    ///
    /// # Errors
    ///
    /// Returns an error if storage rejects either write.
    pub fn establish(&self, token: &str, role: Role) -> Result<(), StorageError> {
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(ROLE_KEY, role.as_str())
    }

    /// Sign out locally.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(ROLE_KEY);
    }
}
