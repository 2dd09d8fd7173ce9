//! In-memory fakes for the storage, form, API, clock, and shell seams.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::net::api::{ApiError, ProfileApi};
use crate::net::fields::{FieldKind, FormId};
use crate::net::types::{Profile, SubmissionPayload};
use crate::state::notices::NoticeLevel;
use crate::state::profile_cache::Clock;
use crate::util::form_controls::{ControlKind, FileUpload, FormControls, FormError};
use crate::util::shell::Shell;
use crate::util::storage::{KeyValueStore, StorageError};

/// Shared `HashMap` store; clones see the same entries.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write { key: key.to_owned() });
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Clone, Debug)]
enum Control {
    Value(String),
    Group(Vec<(String, bool)>),
    File(Result<Option<FileUpload>, String>),
}

/// Form whose controls live in a `Vec`, in insertion order.
#[derive(Default)]
pub struct MemoryForm {
    controls: RefCell<Vec<(String, Control)>>,
}

impl MemoryForm {
    /// Blank controls for every catalog field of `form_id`.
    pub fn for_form(form_id: FormId) -> Self {
        let form = Self::default();
        for field in form_id.fields() {
            let control = match field.kind {
                FieldKind::Input(_) | FieldKind::TextArea => Control::Value(String::new()),
                FieldKind::Choice(options) => Control::Group(options.iter().map(|o| ((*o).to_owned(), false)).collect()),
                FieldKind::File => Control::File(Ok(None)),
            };
            form.insert(field.name, control);
        }
        form
    }

    fn insert(&self, name: &str, control: Control) {
        let mut controls = self.controls.borrow_mut();
        match controls.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = control,
            None => controls.push((name.to_owned(), control)),
        }
    }

    pub fn with_value(self, name: &str, value: &str) -> Self {
        self.insert(name, Control::Value(value.to_owned()));
        self
    }

    pub fn with_group(self, name: &str, options: &[&str], checked: Option<&str>) -> Self {
        let options = options.iter().map(|o| ((*o).to_owned(), Some(*o) == checked)).collect();
        self.insert(name, Control::Group(options));
        self
    }

    pub fn with_file(self, name: &str, upload: Option<FileUpload>) -> Self {
        self.insert(name, Control::File(Ok(upload)));
        self
    }

    pub fn with_unreadable_file(self, name: &str) -> Self {
        self.insert(name, Control::File(Err("NotReadableError".to_owned())));
        self
    }

    /// Every checked option of a group, for asserting exclusivity.
    pub fn checked(&self, name: &str) -> Vec<String> {
        self.controls
            .borrow()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| match c {
                Control::Group(options) => options.iter().filter(|(_, on)| *on).map(|(o, _)| o.clone()).collect(),
                _ => Vec::new(),
            })
            .unwrap_or_default()
    }
}

impl FormControls for MemoryForm {
    fn names(&self) -> Vec<String> {
        self.controls.borrow().iter().map(|(n, _)| n.clone()).collect()
    }

    fn kind(&self, name: &str) -> Option<ControlKind> {
        self.controls.borrow().iter().find(|(n, _)| n == name).map(|(_, c)| match c {
            Control::Value(_) => ControlKind::Value,
            Control::Group(_) => ControlKind::Group,
            Control::File(_) => ControlKind::File,
        })
    }

    fn value(&self, name: &str) -> Option<String> {
        self.controls.borrow().iter().find(|(n, _)| n == name).and_then(|(_, c)| match c {
            Control::Value(v) => Some(v.clone()),
            Control::Group(options) => options.iter().find(|(_, on)| *on).map(|(o, _)| o.clone()),
            Control::File(_) => None,
        })
    }

    fn set_value(&self, name: &str, value: &str) {
        let mut controls = self.controls.borrow_mut();
        if let Some((_, Control::Value(v))) = controls.iter_mut().find(|(n, _)| n == name) {
            *v = value.to_owned();
        }
    }

    fn check_option(&self, name: &str, value: &str) -> bool {
        let mut controls = self.controls.borrow_mut();
        let Some((_, Control::Group(options))) = controls.iter_mut().find(|(n, _)| n == name) else {
            return false;
        };
        if !options.iter().any(|(o, _)| o == value) {
            return false;
        }
        for (option, on) in options.iter_mut() {
            *on = option == value;
        }
        true
    }

    fn clear_options(&self, name: &str) {
        let mut controls = self.controls.borrow_mut();
        if let Some((_, Control::Group(options))) = controls.iter_mut().find(|(n, _)| n == name) {
            for (_, on) in options.iter_mut() {
                *on = false;
            }
        }
    }

    async fn read_file(&self, name: &str) -> Result<Option<FileUpload>, FormError> {
        let control = self.controls.borrow().iter().find(|(n, _)| n == name).map(|(_, c)| c.clone());
        match control {
            Some(Control::File(Ok(upload))) => Ok(upload),
            Some(Control::File(Err(message))) => Err(FormError::FileRead { name: name.to_owned(), message }),
            _ => Ok(None),
        }
    }
}

#[derive(Debug)]
pub struct FakeApiState {
    pub profile: Result<Profile, ApiError>,
    pub submit_result: Result<(), ApiError>,
    pub fetch_calls: usize,
    pub submissions: Vec<(String, SubmissionPayload)>,
}

/// Scripted [`ProfileApi`]; clones share state.
#[derive(Clone)]
pub struct FakeApi {
    state: Rc<RefCell<FakeApiState>>,
}

impl FakeApi {
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            state: Rc::new(RefCell::new(FakeApiState {
                profile: Ok(profile),
                submit_result: Ok(()),
                fetch_calls: 0,
                submissions: Vec::new(),
            })),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        let api = Self::with_profile(Profile::default());
        api.state.borrow_mut().profile = Err(error);
        api
    }

    pub fn set_profile(&self, profile: Profile) {
        self.state.borrow_mut().profile = Ok(profile);
    }

    pub fn set_submit_result(&self, result: Result<(), ApiError>) {
        self.state.borrow_mut().submit_result = result;
    }

    pub fn fetch_calls(&self) -> usize {
        self.state.borrow().fetch_calls
    }

    pub fn submissions(&self) -> Vec<(String, SubmissionPayload)> {
        self.state.borrow().submissions.clone()
    }
}

impl ProfileApi for FakeApi {
    async fn fetch_profile(&self, _token: &str) -> Result<Profile, ApiError> {
        let mut state = self.state.borrow_mut();
        state.fetch_calls += 1;
        state.profile.clone()
    }

    async fn submit_profile(&self, token: &str, payload: &SubmissionPayload) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.submissions.push((token.to_owned(), payload.clone()));
        state.submit_result.clone()
    }
}

/// Manually advanced clock; clones share the current time.
#[derive(Clone, Default)]
pub struct FixedClock {
    now: Rc<Cell<i64>>,
}

impl FixedClock {
    pub fn at(now_ms: i64) -> Self {
        Self { now: Rc::new(Cell::new(now_ms)) }
    }

    pub fn advance(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}

/// Shell that records notices and navigations.
#[derive(Clone, Default)]
pub struct RecordingShell {
    notices: Rc<RefCell<Vec<(NoticeLevel, String)>>>,
    navigations: Rc<RefCell<Vec<String>>>,
}

impl RecordingShell {
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl Shell for RecordingShell {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push((level, message.to_owned()));
    }

    fn navigate(&self, path: &str) {
        self.navigations.borrow_mut().push(path.to_owned());
    }
}

/// Build a [`Profile`] from a `json!` object literal.
pub fn profile(value: serde_json::Value) -> Profile {
    serde_json::from_value(value).expect("profile fixture must be an object")
}
