//! The registration screen: form state plus the submission flow.
//!
//! A screen is created when the page is initialized and torn down with
//! [`RegisterScreen::destroy`] (or by dropping it). Teardown cancels any
//! submission still waiting on the auth service, so none of its completion
//! effects run afterwards.

use crate::{
    auth::AuthService,
    form::{error_state, Field, RegistrationForm},
    navigation::{NavigationTarget, Navigator, REGISTERED_PARAM, REGISTERED_SUCCESS},
    notification::{Notification, Notifier},
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio_util::sync::CancellationToken;

pub const REGISTERED_MESSAGE: &str = "User Registered! Now, you can login";

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Registered,
    Failed(String),
    /// The screen was torn down before the auth service answered.
    Cancelled,
}

/// Sets the loading flag for as long as it lives.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct RegisterScreen {
    route: String,
    form: RegistrationForm,
    loading: AtomicBool,
    destroy: CancellationToken,
    auth: Arc<dyn AuthService>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl RegisterScreen {
    /// Initialize the screen mounted at `route` with an empty form.
    pub fn new(
        route: impl Into<String>,
        auth: Arc<dyn AuthService>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            route: route.into(),
            form: RegistrationForm::new(),
            loading: AtomicBool::new(false),
            destroy: CancellationToken::new(),
            auth,
            navigator,
            notifier,
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    /// Replace the form, e.g. with state restored from a client post.
    pub fn set_form(&mut self, form: RegistrationForm) {
        self.form = form;
    }

    /// Whether `field` should be rendered in its error state.
    pub fn shows_error(&self, field: Field) -> bool {
        error_state::field_error_state(&self.form, field)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroy.is_cancelled()
    }

    /// Submit the current form value to the auth service.
    ///
    /// On success navigates to the parent route with `registered=success`
    /// and shows a confirmation; on failure shows the error message. The
    /// loading flag is cleared whatever the outcome.
    pub async fn register(&self) -> SubmissionOutcome {
        let _loading = LoadingGuard::start(&self.loading);
        let value = self.form.value();

        let result = tokio::select! {
            biased;
            _ = self.destroy.cancelled() => {
                tracing::debug!("Registration for {} abandoned, screen destroyed", value.username);
                return SubmissionOutcome::Cancelled;
            }
            result = self.auth.register(&value) => result,
        };

        match result {
            Ok(()) => {
                tracing::info!("New user registered: {}", value.username);
                let target = NavigationTarget::relative(&self.route, "..")
                    .with_query(REGISTERED_PARAM, REGISTERED_SUCCESS);
                self.navigator.navigate(target);
                self.notifier.open(Notification::timed(REGISTERED_MESSAGE));
                SubmissionOutcome::Registered
            }
            Err(e) => {
                tracing::error!("Registration failed for {}: {}", value.username, e);
                let message = e.message();
                self.notifier.open(Notification::timed(message.clone()));
                SubmissionOutcome::Failed(message)
            }
        }
    }

    /// Tear the screen down. Only the first call has an effect.
    pub fn destroy(&self) {
        if !self.destroy.is_cancelled() {
            tracing::debug!("Destroying register screen at {}", self.route);
            self.destroy.cancel();
        }
    }
}

impl Drop for RegisterScreen {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthError;
    use crate::form::RegistrationValue;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::{oneshot, Notify};

    #[derive(Default)]
    struct Recorder {
        targets: Mutex<Vec<NavigationTarget>>,
        notifications: Mutex<Vec<Notification>>,
    }

    impl Navigator for Recorder {
        fn navigate(&self, target: NavigationTarget) {
            self.targets.lock().unwrap().push(target);
        }
    }

    impl Notifier for Recorder {
        fn open(&self, notification: Notification) {
            self.notifications.lock().unwrap().push(notification);
        }
    }

    /// Auth service that signals when called and then waits for a verdict.
    struct GatedAuth {
        started: Notify,
        verdict: Mutex<Option<oneshot::Receiver<Result<(), AuthError>>>>,
        received: Mutex<Vec<RegistrationValue>>,
    }

    impl GatedAuth {
        fn new() -> (Arc<Self>, oneshot::Sender<Result<(), AuthError>>) {
            let (tx, rx) = oneshot::channel();
            let auth = Arc::new(Self {
                started: Notify::new(),
                verdict: Mutex::new(Some(rx)),
                received: Mutex::new(Vec::new()),
            });
            (auth, tx)
        }
    }

    #[async_trait]
    impl AuthService for GatedAuth {
        async fn register(&self, value: &RegistrationValue) -> Result<(), AuthError> {
            self.received.lock().unwrap().push(value.clone());
            let rx = self.verdict.lock().unwrap().take().expect("called once");
            self.started.notify_one();
            match rx.await {
                Ok(result) => result,
                Err(_) => std::future::pending().await,
            }
        }
    }

    fn screen(auth: Arc<GatedAuth>, recorder: &Arc<Recorder>) -> RegisterScreen {
        let mut screen = RegisterScreen::new(
            "/auth/register",
            auth,
            recorder.clone(),
            recorder.clone(),
        );
        let form = screen.form_mut();
        form.username.set_value("alice");
        form.email.set_value("alice@example.com");
        form.password.set_value("Abcdef1!");
        form.password_confirmation.set_value("Abcdef1!");
        screen
    }

    #[tokio::test]
    async fn test_successful_registration() {
        let (auth, verdict) = GatedAuth::new();
        let recorder = Arc::new(Recorder::default());
        let screen = screen(auth.clone(), &recorder);
        assert!(!screen.is_loading());

        let (outcome, _) = tokio::join!(screen.register(), async {
            auth.started.notified().await;
            assert!(screen.is_loading());
            verdict.send(Ok(())).unwrap();
        });

        assert_eq!(outcome, SubmissionOutcome::Registered);
        assert!(!screen.is_loading());

        let targets = recorder.targets.lock().unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].to_url(), "/auth?registered=success");

        let notifications = recorder.notifications.lock().unwrap();
        assert_eq!(*notifications, vec![Notification::timed(REGISTERED_MESSAGE)]);

        let received = auth.received.lock().unwrap();
        assert_eq!(received[0].username, "alice");
        assert_eq!(received[0].password_confirmation, "Abcdef1!");
    }

    #[tokio::test]
    async fn test_failed_registration() {
        let (auth, verdict) = GatedAuth::new();
        let recorder = Arc::new(Recorder::default());
        let screen = screen(auth.clone(), &recorder);

        let (outcome, _) = tokio::join!(screen.register(), async {
            auth.started.notified().await;
            assert!(screen.is_loading());
            verdict
                .send(Err(AuthError::Rejected {
                    status: 409,
                    message: "Username already taken".to_string(),
                }))
                .unwrap();
        });

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed("Username already taken".to_string())
        );
        assert!(!screen.is_loading());
        assert!(recorder.targets.lock().unwrap().is_empty());

        let notifications = recorder.notifications.lock().unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].message, "Username already taken");
        assert_eq!(notifications[0].duration, std::time::Duration::from_secs(3));

        // the form is left as the user entered it
        assert_eq!(screen.form().username.value(), "alice");
        assert!(screen.form().is_valid());
    }

    #[tokio::test]
    async fn test_destroy_abandons_pending_submission() {
        let (auth, verdict) = GatedAuth::new();
        let recorder = Arc::new(Recorder::default());
        let screen = screen(auth.clone(), &recorder);

        let (outcome, _) = tokio::join!(screen.register(), async {
            auth.started.notified().await;
            screen.destroy();
        });

        assert_eq!(outcome, SubmissionOutcome::Cancelled);
        assert!(screen.is_destroyed());
        assert!(!screen.is_loading());

        // a late answer has nowhere to go
        let _ = verdict.send(Ok(()));
        tokio::task::yield_now().await;

        assert!(recorder.targets.lock().unwrap().is_empty());
        assert!(recorder.notifications.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_after_destroy_does_nothing() {
        let (auth, _verdict) = GatedAuth::new();
        let recorder = Arc::new(Recorder::default());
        let screen = screen(auth.clone(), &recorder);

        screen.destroy();
        screen.destroy();

        assert_eq!(screen.register().await, SubmissionOutcome::Cancelled);
        assert!(auth.received.lock().unwrap().is_empty());
        assert!(recorder.notifications.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_shows_error_uses_mismatch_policy() {
        let (auth, _verdict) = GatedAuth::new();
        let recorder = Arc::new(Recorder::default());
        let mut screen = screen(auth, &recorder);

        assert!(!screen.shows_error(Field::Password));
        screen.form_mut().password_confirmation.set_value("Abcdef1?");
        assert!(screen.shows_error(Field::Password));
        assert!(screen.shows_error(Field::PasswordConfirmation));
        assert!(!screen.shows_error(Field::Username));
    }
}
