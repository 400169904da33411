use super::components::snackbar;
use crate::{
    form::{error_state::field_error_state, Field, FormControl, RegistrationForm},
    navigation::{REGISTER_ROUTE, VALIDATE_ROUTE},
    notification::Notification,
};
use maud::{html, Markup, PreEscaped};

const SUBMIT_ID: &str = "register-submit";

pub fn register(form: &RegistrationForm, loading: bool, notifications: &[Notification]) -> Markup {
    html! {
        div class="max-w-md mx-auto" {
            h1 class="text-4xl font-black mb-8 text-primary" style="letter-spacing: -0.02em;" { "REGISTER" }

            (register_form(form, loading))

            // Login link
            div class="text-center mt-6" {
                p class="text-sm text-muted font-bold" {
                    "ALREADY HAVE AN ACCOUNT? "
                    a href="/auth" class="text-highlight orange" {
                        "LOGIN HERE"
                    }
                }
            }
        }

        (snackbar(notifications))

        // Track which fields were edited and which lost focus, so the
        // server can decide when to show errors. Capture phase runs before
        // htmx reads the form. A submit shows the loading state until the
        // next page arrives.
        script {
            (PreEscaped(r#"
            (function() {
                function mark(input, kind) {
                    const form = input.closest && input.closest('#register-form');
                    if (!form || !input.name || input.type === 'hidden') return;
                    const list = form.querySelector('input[name="' + kind + '"]');
                    const names = list.value ? list.value.split(',') : [];
                    if (names.indexOf(input.name) === -1) {
                        names.push(input.name);
                        list.value = names.join(',');
                    }
                }
                document.addEventListener('input', function(e) { mark(e.target, 'dirty'); }, true);
                document.addEventListener('focusout', function(e) { mark(e.target, 'touched'); }, true);
                document.addEventListener('submit', function(e) {
                    if (e.target.id !== 'register-form') return;
                    const button = document.getElementById('register-submit');
                    button.disabled = true;
                    button.setAttribute('aria-busy', 'true');
                    button.textContent = 'REGISTERING...';
                });
            })();
            "#))
        }
    }
}

/// The complete form element, rendered on page loads and full submits.
///
/// Live validation posts here through htmx but swaps nothing into the form
/// itself; see [`validation_feedback`].
pub fn register_form(form: &RegistrationForm, loading: bool) -> Markup {
    html! {
        form id="register-form" action=(REGISTER_ROUTE) method="post" novalidate
            hx-post=(VALIDATE_ROUTE) hx-trigger="input delay:300ms, focusout" hx-swap="none"
            class="card-brutal-inset space-y-6" {

            input type="hidden" name="dirty" value=(field_names(form, FormControl::is_dirty));
            input type="hidden" name="touched" value=(field_names(form, FormControl::is_touched));

            (field(form, Field::Username, "USERNAME", "text", "CHOOSE USERNAME"))
            (field(form, Field::Email, "EMAIL", "email", "YOUR@EMAIL.COM"))
            (field(form, Field::Password, "PASSWORD", "password", "CHOOSE STRONG PASSWORD"))
            (field(form, Field::PasswordConfirmation, "CONFIRM PASSWORD", "password", "CONFIRM PASSWORD"))

            div {
                (submit_button(form, loading, false))
            }
        }
    }
}

/// Out-of-band fragment for live validation: each field's feedback block
/// and the submit button. Inputs are left alone so typing in flight survives.
pub fn validation_feedback(form: &RegistrationForm) -> Markup {
    html! {
        @for field in Field::ALL {
            (field_feedback(form, field, true))
        }
        (submit_button(form, false, true))
    }
}

fn field(
    form: &RegistrationForm,
    field: Field,
    label: &str,
    input_type: &str,
    placeholder: &str,
) -> Markup {
    let control = form.control(field);

    html! {
        div class="form-field" {
            label for=(field.name()) class="label-brutal" {
                (label)
            }
            input type=(input_type) id=(field.name()) name=(field.name())
                value=(control.value())
                class="input-brutal-box w-full"
                aria-describedby=(feedback_id(field))
                placeholder=(placeholder);

            (field_feedback(form, field, false))
        }
    }
}

fn feedback_id(field: Field) -> String {
    format!("{}-feedback", field.name())
}

/// Error state of one field. `data-invalid` drives the input's error styling.
fn field_feedback(form: &RegistrationForm, field: Field, oob: bool) -> Markup {
    let show_error = field_error_state(form, field);
    let mut errors = form.control(field).errors();
    if field == Field::PasswordConfirmation {
        errors.extend(form.group_errors());
    }

    html! {
        div id=(feedback_id(field)) class="field-feedback" aria-live="polite"
            data-invalid[show_error]
            hx-swap-oob=[oob.then_some("true")] {
            @if show_error && !errors.is_empty() {
                ul class="field-errors" {
                    @for error in &errors {
                        li data-error=(error.tag()) { (error.to_string()) }
                    }
                }
            }
        }
    }
}

fn submit_button(form: &RegistrationForm, loading: bool, oob: bool) -> Markup {
    html! {
        button id=(SUBMIT_ID) type="submit" disabled[loading || !form.is_valid()]
            aria-busy=(if loading { "true" } else { "false" })
            hx-swap-oob=[oob.then_some("true")]
            class="w-full btn-brutal-fill" {
            @if loading { "REGISTERING..." } @else { "REGISTER" }
        }
    }
}

fn field_names(form: &RegistrationForm, flag: fn(&FormControl) -> bool) -> String {
    Field::ALL
        .iter()
        .filter(|field| flag(form.control(**field)))
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(password: &str, confirmation: &str) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.username.set_value("alice");
        form.email.set_value("alice@example.com");
        form.password.set_value(password);
        form.password_confirmation.set_value(confirmation);
        form
    }

    #[test]
    fn test_pristine_form_has_no_errors_and_disabled_submit() {
        let html = register_form(&RegistrationForm::new(), false).into_string();
        assert!(!html.contains("field-errors"));
        assert!(!html.contains("data-invalid"));
        assert!(html.contains("disabled"));
        assert!(html.contains(r#"name="passwordConfirmation""#));
    }

    #[test]
    fn test_touched_weak_password_lists_rules() {
        let mut form = filled("abcdefgh", "abcdefgh");
        form.password.mark_touched();

        let html = register_form(&form, false).into_string();
        assert!(html.contains(r#"data-error="at-least-one-digit""#));
        assert!(html.contains(r#"data-error="at-least-one-uppercase""#));
        assert!(html.contains(r#"data-error="at-least-one-special-character""#));
        assert!(!html.contains(r#"data-error="at-least-eight-characters""#));
        assert!(html.contains(r#"name="touched" value="password""#));
    }

    #[test]
    fn test_dirty_mismatch_shows_not_same() {
        let html = register_form(&filled("Abcdef1!", "Abcdef1?"), false).into_string();
        assert!(html.contains(r#"data-error="notSame""#));
        assert!(html.contains("Passwords do not match"));
        assert!(html.contains(r#"id="password-feedback" class="field-feedback" aria-live="polite" data-invalid"#));
    }

    #[test]
    fn test_valid_form_enables_submit() {
        let html = register_form(&filled("Abcdef1!", "Abcdef1!"), false).into_string();
        assert!(!html.contains("disabled"));
        assert!(!html.contains("field-errors"));
        assert!(html.contains(">REGISTER</button>"));
    }

    #[test]
    fn test_loading_disables_submit() {
        let html = register_form(&filled("Abcdef1!", "Abcdef1!"), true).into_string();
        assert!(html.contains("disabled"));
        assert!(html.contains(r#"aria-busy="true""#));
        assert!(html.contains("REGISTERING..."));
    }

    #[test]
    fn test_validation_feedback_leaves_inputs_alone() {
        let mut form = filled("Abcdef1!", "Abcdef1?");
        form.email.set_value("not-an-email");
        form.email.mark_touched();

        let html = validation_feedback(&form).into_string();
        assert!(!html.contains("<input"));
        assert!(!html.contains("<form"));
        assert!(!html.contains("alice@example.com"));
        for field in Field::ALL {
            assert!(html.contains(&format!(r#"id="{}""#, feedback_id(field))));
        }
        assert_eq!(html.matches(r#"hx-swap-oob="true""#).count(), Field::ALL.len() + 1);
        assert!(html.contains(r#"data-error="pattern""#));
        assert!(html.contains(r#"data-error="notSame""#));
        assert!(html.contains(r#"id="register-submit""#));
    }
}
