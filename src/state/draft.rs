//! Persisted draft of unsaved form fields.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each form step saves its controls into one flat JSON object in local
//! storage, so a student can move between steps (or reload) without losing
//! edits. The final step reads the merged draft back, normalizes it, and
//! submits it.
//!
//! DESIGN
//! ======
//! Saves are shallow merges where the newly collected keys win. A selected
//! photo is read to completion before the single persist, so navigating
//! away right after `save` resolves can never drop it.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::collections::BTreeMap;

use crate::net::fields::{PHOTO_FIELD, all_fields};
use crate::util::form_controls::{ControlKind, FormControls, FormError, is_blank_value};
use crate::util::storage::{DRAFT_KEY, KeyValueStore, StorageError, load_json, save_json};

/// Placeholder submitted for fields intentionally left blank.
pub const SENTINEL: &str = "-";

/// Flat mapping from field name to value; `None` marks an emptied field.
pub type Draft = BTreeMap<String, Option<String>>;

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("stored draft is not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Draft persistence over a key-value store.
#[derive(Clone, Debug)]
pub struct DraftStore<S> {
    store: S,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted draft; an absent key is an empty draft.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Corrupt`] when the stored blob does not parse.
    pub fn read(&self) -> Result<Draft, DraftError> {
        load_json(&self.store, DRAFT_KEY)
            .map(Option::unwrap_or_default)
            .map_err(DraftError::Corrupt)
    }

    /// Write every non-null draft value into the matching control.
    ///
    /// Returns how many controls were written.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Corrupt`] when the stored blob does not parse.
    pub fn load<F: FormControls>(&self, form: &F) -> Result<usize, DraftError> {
        let draft = self.read()?;
        Ok(overlay(&draft, form, false))
    }

    /// Like [`Self::load`], but only fills controls that are still blank
    /// (empty or `"-"`), and radio groups with nothing checked.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Corrupt`] when the stored blob does not parse.
    pub fn load_selective<F: FormControls>(&self, form: &F) -> Result<usize, DraftError> {
        let draft = self.read()?;
        Ok(overlay(&draft, form, true))
    }

    /// Collect the form, merge it over the persisted draft, and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing draft is corrupt, a selected file
    /// cannot be read, or storage rejects the write.
    pub async fn save<F: FormControls>(&self, form: &F) -> Result<Draft, DraftError> {
        let mut collected = collect_fields(form);
        for name in form.names() {
            if form.kind(&name) != Some(ControlKind::File) {
                continue;
            }
            if let Some(upload) = form.read_file(&name).await? {
                collected.insert(PHOTO_FIELD.to_owned(), Some(upload.data_uri()));
            }
        }

        let mut merged = self.read()?;
        merged.extend(collected);
        save_json(&self.store, DRAFT_KEY, &merged)?;
        log::debug!("draft saved ({} fields)", merged.len());
        Ok(merged)
    }

    /// Drop the persisted draft.
    pub fn clear(&self) {
        self.store.remove(DRAFT_KEY);
    }
}

/// Read the form's value controls and checked groups into a flat mapping.
///
/// Empty strings become `None`. Groups with nothing checked are left out so
/// they never erase a value saved earlier; file controls are handled by
/// [`DraftStore::save`].
pub fn collect_fields<F: FormControls>(form: &F) -> Draft {
    let mut out = Draft::new();
    for name in form.names() {
        match form.kind(&name) {
            Some(ControlKind::Value) => {
                let value = form.value(&name).filter(|v| !v.is_empty());
                out.insert(name, value);
            }
            Some(ControlKind::Group) => {
                if let Some(value) = form.value(&name) {
                    out.insert(name, Some(value));
                }
            }
            Some(ControlKind::File) | None => {}
        }
    }
    out
}

fn overlay<F: FormControls>(draft: &Draft, form: &F, selective: bool) -> usize {
    let mut written = 0;
    for name in form.names() {
        let Some(Some(value)) = draft.get(&name) else {
            continue;
        };
        match form.kind(&name) {
            Some(ControlKind::Value) => {
                if selective && !is_blank_value(form.value(&name).as_deref()) {
                    continue;
                }
                form.set_value(&name, value);
                written += 1;
            }
            Some(ControlKind::Group) => {
                if selective && form.value(&name).is_some() {
                    continue;
                }
                if form.check_option(&name, value) {
                    written += 1;
                }
            }
            Some(ControlKind::File) | None => {}
        }
    }
    written
}

/// Whether a draft value must be replaced by the sentinel on submission.
#[must_use]
pub fn is_unset(value: Option<&str>) -> bool {
    value.is_none_or(|v| {
        let v = v.trim();
        v.is_empty() || v == "null"
    })
}

/// Build the submission payload: every catalog field plus any extra draft
/// keys, with unset values replaced by [`SENTINEL`].
#[must_use]
pub fn normalize_payload(draft: &Draft) -> BTreeMap<String, String> {
    let mut payload: BTreeMap<String, String> =
        all_fields().map(|f| (f.name.to_owned(), SENTINEL.to_owned())).collect();
    for (key, value) in draft {
        let value = if is_unset(value.as_deref()) { SENTINEL.to_owned() } else { value.clone().unwrap_or_default() };
        payload.insert(key.clone(), value);
    }
    payload
}
