use super::{effects::PageEffects, AppState};
use crate::{
    form::{RegistrationForm, RegistrationSubmission},
    navigation::{REGISTERED_SUCCESS, REGISTER_ROUTE},
    notification::Notification,
    screen::{RegisterScreen, SubmissionOutcome, REGISTERED_MESSAGE},
    templates,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct AuthHomeQuery {
    registered: Option<String>,
}

fn register_document(
    form: &RegistrationForm,
    loading: bool,
    notifications: &[Notification],
) -> Html<String> {
    let content = templates::register(form, loading, notifications);
    let page = templates::base("Register", content);
    Html(page.into_string())
}

pub async fn auth_home_page(Query(params): Query<AuthHomeQuery>) -> Html<String> {
    let registered = params.registered.as_deref() == Some(REGISTERED_SUCCESS);
    let notifications = if registered {
        vec![Notification::timed(REGISTERED_MESSAGE)]
    } else {
        Vec::new()
    };

    let content = templates::auth_home(registered, &notifications);
    let page = templates::base("Login", content);
    Html(page.into_string())
}

pub async fn register_page() -> Html<String> {
    register_document(&RegistrationForm::new(), false, &[])
}

/// Live validation: error state for the values and interactions the client
/// reported, swapped out-of-band next to the inputs.
pub async fn validate_register_form(Form(submission): Form<RegistrationSubmission>) -> Html<String> {
    let form = RegistrationForm::from_submission(&submission);
    Html(templates::validation_feedback(&form).into_string())
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Form(submission): Form<RegistrationSubmission>,
) -> Response {
    let effects = Arc::new(PageEffects::default());
    let mut screen = RegisterScreen::new(
        REGISTER_ROUTE,
        state.auth.clone(),
        effects.clone(),
        effects.clone(),
    );

    let mut form = RegistrationForm::from_submission(&submission);
    form.mark_all_as_touched();
    screen.set_form(form);

    if !screen.form().is_valid() {
        tracing::warn!(
            "Rejected invalid registration form for user: {}",
            submission.username
        );
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            register_document(screen.form(), screen.is_loading(), &[]),
        )
            .into_response();
    }

    match screen.register().await {
        SubmissionOutcome::Registered => match effects.take_navigation() {
            Some(target) => Redirect::to(&target.to_url()).into_response(),
            None => {
                tracing::error!("Registration succeeded without a navigation target");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
        SubmissionOutcome::Failed(_) | SubmissionOutcome::Cancelled => {
            register_document(
                screen.form(),
                screen.is_loading(),
                &effects.take_notifications(),
            )
            .into_response()
        }
    }
}
