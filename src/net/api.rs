//! REST helpers for the placement API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: every call returns [`ApiError::Unavailable`];
//! the reconciler is tested against its own [`ProfileApi`] fakes.
//!
//! ERROR HANDLING
//! ==============
//! Every call is bearer-authenticated and returns a typed [`ApiError`]. A 401
//! is split out so callers can drop the session; read paths above this layer
//! swallow errors into `None`.

#![allow(clippy::unused_async, async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{DashboardStats, Profile, SubmissionPayload};
#[cfg(feature = "csr")]
use super::types::{DashboardEnvelope, ProfileEnvelope};

#[cfg(any(test, feature = "csr"))]
const PROFILE_PATH: &str = "/api/student/profile";
#[cfg(any(test, feature = "csr"))]
const SUBMIT_PATH: &str = "/api/student/profile/complete";
#[cfg(any(test, feature = "csr"))]
const DASHBOARD_PATH: &str = "/api/admin/dashboard";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not signed in or session expired")]
    Unauthorized,
    #[error("request failed: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    #[cfg(any(test, feature = "csr"))]
    fn from_status(status: u16) -> Self {
        if status == 401 { Self::Unauthorized } else { Self::Status(status) }
    }
}

/// Profile read/submit calls used by the reconciler.
pub trait ProfileApi {
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body
    /// without a profile.
    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError>;

    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    async fn submit_profile(&self, token: &str, payload: &SubmissionPayload) -> Result<(), ApiError>;
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "csr"))]
fn roll_lookup_path(roll: &str) -> String {
    format!("/api/admin/students/roll/{}", roll.trim())
}

#[cfg(any(test, feature = "csr"))]
fn missing_profile_message(path: &str) -> String {
    format!("no profile in response from {path}")
}

/// `gloo-net` client rooted at the configured API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    #[cfg_attr(not(any(test, feature = "csr")), allow(dead_code))]
    base_url: String,
}

impl HttpApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[cfg(any(test, feature = "csr"))]
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[cfg(feature = "csr")]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, ApiError> {
        let resp = gloo_net::http::Request::get(&self.url(path))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch the admin dashboard counters.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a bad body.
    pub async fn fetch_dashboard(&self, token: &str) -> Result<DashboardStats, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body: DashboardEnvelope = self.get_json(DASHBOARD_PATH, token).await?;
            Ok(body.stats)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    /// Look up a student's full profile by roll number (admin only).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status (404 when the
    /// roll number is unknown), or a body without a profile.
    ///
    /// `roll` is sent as one path segment and is expected to be normalized
    /// already (letters, digits, `-` and `_`).
    pub async fn fetch_student_by_roll(&self, token: &str, roll: &str) -> Result<Profile, ApiError> {
        #[cfg(feature = "csr")]
        {
            let path = roll_lookup_path(roll);
            let body: ProfileEnvelope = self.get_json(&path, token).await?;
            body.into_profile().ok_or_else(|| ApiError::Decode(missing_profile_message(&path)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, roll);
            Err(ApiError::Unavailable)
        }
    }
}

impl ProfileApi for HttpApi {
    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body: ProfileEnvelope = self.get_json(PROFILE_PATH, token).await?;
            body.into_profile().ok_or_else(|| ApiError::Decode(missing_profile_message(PROFILE_PATH)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn submit_profile(&self, token: &str, payload: &SubmissionPayload) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(SUBMIT_PATH))
                .header("Authorization", &bearer(token))
                .json(payload)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::from_status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, payload);
            Err(ApiError::Unavailable)
        }
    }
}
