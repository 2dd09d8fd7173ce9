//! Profile reconciliation between the server, the local cache, and drafts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form pages call [`ProfileReconciler::populate`] on mount and
//! [`ProfileReconciler::submit`] on the final step. Step-to-step saves go
//! straight to the draft store.
//!
//! DESIGN
//! ======
//! Precedence is "database wins, but never blanks": a truthy profile value
//! overwrites the control, a falsy one leaves it alone, and the draft is then
//! overlaid only onto controls that are still blank. Submission sends the
//! whole catalog so the server always receives every field.
//!
//! ERROR HANDLING
//! ==============
//! Profile reads swallow network/HTTP failures into `None`. Submission
//! failures are reported through the shell and leave the draft and cache in
//! place for a retry. Only a corrupt stored draft propagates as an error.

#[cfg(test)]
#[path = "reconciler_test.rs"]
mod reconciler_test;

use std::time::Duration;

use crate::net::api::{ApiError, ProfileApi};
use crate::net::fields::{FieldKind, FormId};
use crate::net::types::Profile;
use crate::state::draft::{DraftError, DraftStore, normalize_payload};
use crate::state::notices::NoticeLevel;
use crate::state::profile_cache::{Clock, ProfileCache};
use crate::state::session::{Role, Session};
use crate::util::form_controls::FormControls;
use crate::util::shell::Shell;
use crate::util::storage::{KeyValueStore, StorageError};

pub const MUST_LOGIN_MESSAGE: &str = "Please log in before submitting your profile.";
pub const SUBMITTED_MESSAGE: &str = "Profile submitted successfully.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";

/// Read-only profile summary route, shown after a successful submission.
pub const PROFILE_VIEW_ROUTE: &str = "/profile";
/// Login route.
pub const LOGIN_ROUTE: &str = "/";

fn submit_failed_message(error: &ApiError) -> String {
    format!("Submission failed ({error}). Your answers are saved locally; please try again.")
}

/// How many controls each source wrote during [`ProfileReconciler::populate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopulateReport {
    pub from_profile: usize,
    pub from_draft: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    NotAuthenticated,
    SessionExpired,
    Rejected(u16),
    Failed(String),
}

pub struct ProfileReconciler<S, A, C, H> {
    drafts: DraftStore<S>,
    cache: ProfileCache<S, C>,
    session: Session<S>,
    api: A,
    shell: H,
}

impl<S, A, C, H> Clone for ProfileReconciler<S, A, C, H>
where
    S: Clone,
    A: Clone,
    C: Clone,
    H: Clone,
{
    fn clone(&self) -> Self {
        Self {
            drafts: self.drafts.clone(),
            cache: self.cache.clone(),
            session: self.session.clone(),
            api: self.api.clone(),
            shell: self.shell.clone(),
        }
    }
}

impl<S, A, C, H> ProfileReconciler<S, A, C, H>
where
    S: KeyValueStore + Clone,
    A: ProfileApi,
    C: Clock,
    H: Shell,
{
    pub fn new(store: S, api: A, clock: C, shell: H, ttl: Duration) -> Self {
        Self {
            drafts: DraftStore::new(store.clone()),
            cache: ProfileCache::new(store.clone(), clock, ttl),
            session: Session::new(store),
            api,
            shell,
        }
    }

    pub fn drafts(&self) -> &DraftStore<S> {
        &self.drafts
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn shell(&self) -> &H {
        &self.shell
    }

    /// Cached profile if fresh, otherwise a fetched (and re-cached) one.
    ///
    /// `None` means no data is available: signed out, or the fetch failed.
    pub async fn get_profile(&self) -> Option<Profile> {
        if let Some(profile) = self.cache.fresh() {
            log::debug!("profile cache hit");
            return Some(profile);
        }
        let token = self.session.credential()?;
        match self.api.fetch_profile(&token).await {
            Ok(profile) => {
                if let Err(e) = self.cache.put(&profile) {
                    log::warn!("failed to cache profile: {e}");
                }
                Some(profile)
            }
            Err(e) => {
                log::warn!("profile fetch failed: {e}");
                None
            }
        }
    }

    /// Drop the cached profile so the next read refetches.
    pub fn invalidate_profile(&self) {
        self.cache.invalidate();
    }

    /// Store the credential from a login callback.
    ///
    /// A draft saved under a different stored credential is discarded. With
    /// no stored credential the draft survives, so a student re-signing in
    /// after an expired session keeps their answers.
    ///
    /// # Errors
    ///
    /// Returns an error if storage rejects the session write.
    pub fn sign_in(&self, token: &str, role: Role) -> Result<(), StorageError> {
        if self.session.credential().is_some_and(|stored| stored != token) {
            log::info!("credential changed; discarding draft");
            self.drafts.clear();
        }
        self.invalidate_profile();
        self.session.establish(token, role)
    }

    /// Sign out and forget the draft and cached profile.
    pub fn sign_out(&self) {
        self.session.clear();
        self.drafts.clear();
        self.invalidate_profile();
    }

    /// Fill `form` from the profile, then restore unsaved draft values into
    /// whatever is still blank.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Corrupt`] when the stored draft does not parse.
    pub async fn populate<F: FormControls>(&self, form_id: FormId, form: &F) -> Result<PopulateReport, DraftError> {
        let from_profile = match self.get_profile().await {
            Some(profile) => apply_profile(form_id, &profile, form),
            None => 0,
        };
        let from_draft = self.drafts.load_selective(form)?;
        log::debug!("populated {form_id:?}: {from_profile} from profile, {from_draft} from draft");
        Ok(PopulateReport { from_profile, from_draft })
    }

    /// Save `forms`, normalize the merged draft, and post it.
    ///
    /// # Errors
    ///
    /// Returns an error only for local failures while saving the forms
    /// (corrupt draft, unreadable file, storage write). Server and network
    /// failures are reported through the shell and the returned outcome.
    pub async fn submit<F: FormControls>(&self, forms: &[F]) -> Result<SubmitOutcome, DraftError> {
        let Some(token) = self.session.credential() else {
            self.shell.notify(NoticeLevel::Error, MUST_LOGIN_MESSAGE);
            return Ok(SubmitOutcome::NotAuthenticated);
        };

        for form in forms {
            self.drafts.save(form).await?;
        }
        let payload = normalize_payload(&self.drafts.read()?);

        match self.api.submit_profile(&token, &payload).await {
            Ok(()) => {
                log::info!("profile submitted ({} fields)", payload.len());
                self.drafts.clear();
                self.cache.invalidate();
                self.shell.notify(NoticeLevel::Success, SUBMITTED_MESSAGE);
                self.shell.navigate(PROFILE_VIEW_ROUTE);
                Ok(SubmitOutcome::Submitted)
            }
            Err(ApiError::Unauthorized) => {
                log::warn!("profile submission rejected: session expired");
                self.session.clear();
                self.shell.notify(NoticeLevel::Warning, SESSION_EXPIRED_MESSAGE);
                self.shell.navigate(LOGIN_ROUTE);
                Ok(SubmitOutcome::SessionExpired)
            }
            Err(e) => {
                log::error!("profile submission failed: {e}");
                self.shell.notify(NoticeLevel::Error, &submit_failed_message(&e));
                Ok(match e {
                    ApiError::Status(status) => SubmitOutcome::Rejected(status),
                    other => SubmitOutcome::Failed(other.to_string()),
                })
            }
        }
    }
}

/// Write truthy profile values for `form_id`'s catalog fields into `form`.
///
/// Falsy or missing values leave the control untouched. Choice fields are
/// cleared before the matching option is checked. Returns how many fields
/// were written.
pub fn apply_profile<F: FormControls>(form_id: FormId, profile: &Profile, form: &F) -> usize {
    let mut written = 0;
    for field in form_id.fields().iter().filter(|f| f.is_populatable()) {
        let Some(value) = profile.truthy_text(field.name) else {
            continue;
        };
        match field.kind {
            FieldKind::Choice(_) => {
                form.clear_options(field.name);
                form.check_option(field.name, &value);
            }
            FieldKind::Input(_) | FieldKind::TextArea => form.set_value(field.name, &value),
            FieldKind::File => continue,
        }
        written += 1;
    }
    written
}
