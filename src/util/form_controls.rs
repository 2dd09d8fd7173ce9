//! Name-keyed binding to the controls of one rendered form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The draft store and reconciler never touch the DOM directly. They see a
//! form as a mapping from field name to a control binding: a value control,
//! a radio group, or a file picker. The browser build implements this over
//! an `HtmlFormElement` (`util::dom_form`); tests use an in-memory form.
//!
//! Lookups for names the form does not contain are silent no-ops.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "form_controls_test.rs"]
mod form_controls_test;

/// Shape of the control bound to a field name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// `input` (text-like), `select`, or `textarea`.
    Value,
    /// Radio or checkbox group sharing one name.
    Group,
    /// File picker.
    File,
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("failed to read selected file {name}: {message}")]
    FileRead { name: String, message: String },
}

/// A file chosen in a file control, read fully into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub mime: String,
    /// Base64 (standard alphabet) of the file contents.
    pub base64: String,
}

impl FileUpload {
    /// Render as a `data:` URI suitable for storing in the draft.
    #[must_use]
    pub fn data_uri(&self) -> String {
        let mime = if self.mime.is_empty() { "application/octet-stream" } else { &self.mime };
        format!("data:{mime};base64,{}", self.base64)
    }
}

/// Mapping from field name to the live control binding.
pub trait FormControls {
    /// Distinct control names in document order; a radio group appears once.
    fn names(&self) -> Vec<String>;

    fn kind(&self, name: &str) -> Option<ControlKind>;

    /// Current value: the text of a value control, or the checked option of
    /// a group. `None` for file controls, unchecked groups, and unknown names.
    fn value(&self, name: &str) -> Option<String>;

    /// Set the text of a value control.
    fn set_value(&self, name: &str, value: &str);

    /// Check the group option whose value equals `value` and uncheck its
    /// siblings. Returns `false` (and leaves the group alone) when no option
    /// matches.
    fn check_option(&self, name: &str, value: &str) -> bool;

    /// Uncheck every option of a group.
    fn clear_options(&self, name: &str);

    /// Read the first selected file of a file control to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser fails to read the file.
    async fn read_file(&self, name: &str) -> Result<Option<FileUpload>, FormError>;
}

/// Whether a control value counts as blank for selective overlays.
#[must_use]
pub fn is_blank_value(value: Option<&str>) -> bool {
    value.is_none_or(|v| {
        let v = v.trim();
        v.is_empty() || v == crate::state::draft::SENTINEL
    })
}
