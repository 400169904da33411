//! Registration form model.
//!
//! A [`RegistrationForm`] holds four [`FormControl`]s plus the group-level
//! password check. Controls track the `dirty`/`touched` state that drives
//! error display; see [`error_state`].

pub mod error_state;
pub mod validators;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validators::{Validator, ValidationError};

/// A single input field together with its validators.
pub struct FormControl {
    value: String,
    dirty: bool,
    touched: bool,
    validators: Vec<Validator>,
}

impl FormControl {
    pub fn new(validators: Vec<Validator>) -> Self {
        Self {
            value: String::new(),
            dirty: false,
            touched: false,
            validators,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value as the result of user input. Marks the control dirty.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.dirty = true;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Record that the field has lost focus.
    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Errors from this control's own validators, in declaration order.
    pub fn errors(&self) -> Vec<ValidationError> {
        self.validators
            .iter()
            .filter_map(|validate| validate(&self.value))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validators.iter().all(|validate| validate(&self.value).is_none())
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }
}

impl fmt::Debug for FormControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormControl")
            .field("dirty", &self.dirty)
            .field("touched", &self.touched)
            .field("validators", &self.validators.len())
            .finish_non_exhaustive()
    }
}

/// Names of the registration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    PasswordConfirmation,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::PasswordConfirmation,
    ];

    /// Input name, matching the JSON key of [`RegistrationValue`].
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordConfirmation => "passwordConfirmation",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("Unknown registration field: {}", s))
    }
}

/// The value submitted to the auth service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationValue {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl fmt::Debug for RegistrationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationValue")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .finish()
    }
}

/// Raw form post, including the client's interaction bookkeeping.
///
/// `dirty` and `touched` are comma separated field names.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSubmission {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirmation: String,
    #[serde(default)]
    pub dirty: String,
    #[serde(default)]
    pub touched: String,
}

impl RegistrationSubmission {
    fn value_of(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordConfirmation => &self.password_confirmation,
        }
    }
}

fn field_list(list: &str) -> impl Iterator<Item = Field> + '_ {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| name.parse().ok())
}

pub struct RegistrationForm {
    pub username: FormControl,
    pub email: FormControl,
    pub password: FormControl,
    pub password_confirmation: FormControl,
}

impl RegistrationForm {
    pub fn new() -> Self {
        let mut password = vec![validators::required()];
        password.extend(validators::password_rules());

        Self {
            username: FormControl::new(vec![validators::required()]),
            email: FormControl::new(vec![
                validators::required(),
                validators::pattern(validators::EMAIL_PATTERN.clone()),
            ]),
            password: FormControl::new(password),
            password_confirmation: FormControl::new(vec![validators::required()]),
        }
    }

    /// Rebuild the form state a client reported.
    ///
    /// A non-empty value differs from the initial one, so its control counts
    /// as dirty even when the client did not list it.
    pub fn from_submission(submission: &RegistrationSubmission) -> Self {
        let mut form = Self::new();
        for field in Field::ALL {
            let control = form.control_mut(field);
            control.value = submission.value_of(field).to_string();
            control.dirty = !control.value.is_empty();
        }
        for field in field_list(&submission.dirty) {
            form.control_mut(field).mark_dirty();
        }
        for field in field_list(&submission.touched) {
            form.control_mut(field).mark_touched();
        }
        form
    }

    pub fn control(&self, field: Field) -> &FormControl {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordConfirmation => &self.password_confirmation,
        }
    }

    pub fn control_mut(&mut self, field: Field) -> &mut FormControl {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PasswordConfirmation => &mut self.password_confirmation,
        }
    }

    /// Errors from validators that span several controls.
    pub fn group_errors(&self) -> Vec<ValidationError> {
        validators::check_passwords(self).into_iter().collect()
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|field| self.control(*field).is_valid())
            && self.group_errors().is_empty()
    }

    pub fn mark_all_as_touched(&mut self) {
        for field in Field::ALL {
            self.control_mut(field).mark_touched();
        }
    }

    pub fn value(&self) -> RegistrationValue {
        RegistrationValue {
            username: self.username.value().to_string(),
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
            password_confirmation: self.password_confirmation.value().to_string(),
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("value", &self.value())
            .field("valid", &self.is_valid())
            .finish()
    }
}
