//! When should a field be rendered in its error state?

use super::{Field, FormControl, RegistrationForm};

pub trait ErrorStateMatcher {
    fn is_error_state(&self, control: &FormControl, form: &RegistrationForm) -> bool;
}

/// Shows errors once an invalid field has been touched.
#[derive(Debug, Default, Clone, Copy)]
pub struct TouchedErrorStateMatcher;

impl ErrorStateMatcher for TouchedErrorStateMatcher {
    fn is_error_state(&self, control: &FormControl, _form: &RegistrationForm) -> bool {
        control.is_touched() && control.is_invalid()
    }
}

/// Also flags a dirty field while password and confirmation disagree,
/// so a mismatch shows up before the field loses focus.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordMismatchMatcher;

impl ErrorStateMatcher for PasswordMismatchMatcher {
    fn is_error_state(&self, control: &FormControl, form: &RegistrationForm) -> bool {
        let mismatch = form.password.value() != form.password_confirmation.value();

        (control.is_dirty() && mismatch) || TouchedErrorStateMatcher.is_error_state(control, form)
    }
}

/// Error state of `field`, using the matcher its input is rendered with.
pub fn field_error_state(form: &RegistrationForm, field: Field) -> bool {
    let control = form.control(field);
    match field {
        Field::Password | Field::PasswordConfirmation => {
            PasswordMismatchMatcher.is_error_state(control, form)
        }
        Field::Username | Field::Email => TouchedErrorStateMatcher.is_error_state(control, form),
    }
}
