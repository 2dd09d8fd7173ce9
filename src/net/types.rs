//! Wire DTOs for the placement API.
//!
//! DESIGN
//! ======
//! The profile is kept as an open JSON object rather than a struct: the
//! server's flat schema grows independently of this client, and the
//! reconciler only ever reads it field-by-field through the catalog.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat student profile as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(Map<String, Value>);

impl Profile {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The value of `key` rendered as control text, if it is truthy.
    ///
    /// Truthy means a non-empty string, a non-zero number, or `true`.
    #[must_use]
    pub fn truthy_text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_owned()),
            _ => None,
        }
    }

    /// Display text for read-only views; falsy values render as `None`.
    #[must_use]
    pub fn display(&self, key: &str) -> Option<String> {
        self.truthy_text(key).filter(|v| v != crate::state::draft::SENTINEL)
    }
}

impl From<Map<String, Value>> for Profile {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Response body of the profile endpoints: `{ "profile": {...} }` or
/// `{ "student": {...} }`.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileEnvelope {
    #[serde(default)]
    pub profile: Option<Map<String, Value>>,
    #[serde(default)]
    pub student: Option<Map<String, Value>>,
}

impl ProfileEnvelope {
    /// Unwrap whichever key the server used, preferring `profile`.
    #[must_use]
    pub fn into_profile(self) -> Option<Profile> {
        self.profile.or(self.student).map(Profile)
    }
}

/// Body posted to the submission endpoint.
pub type SubmissionPayload = BTreeMap<String, String>;

/// Aggregate counts shown on the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_students: i64,
    pub profiles_completed: i64,
    pub profile_completion_pct: f64,
    pub students_placed: i64,
    pub students_not_placed: i64,
    pub students_in_process: i64,
    pub higher_studies: i64,
    pub placement_pct: f64,
    pub avg_package: f64,
    pub max_package: f64,
    pub min_package: f64,
    pub total_companies: i64,
}

/// Response body of the admin dashboard endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardEnvelope {
    #[serde(default)]
    pub stats: DashboardStats,
}
