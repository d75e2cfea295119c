use tracing::{info, instrument, warn};

use crate::registration::traits::{FormSource, Navigator, Notifier, RegistrationApi, SubmitControl};
use crate::registration::types::{SubmitControlState, FAULT_NOTICE};
use crate::services::config::RegistrationConfig;

/// How a single submit attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Passwords differed; nothing was sent
    PasswordMismatch,
    /// Server accepted the registration and the page was sent to the login path
    Registered,
    /// Server answered with a non-success status
    Rejected { status: u16 },
    /// Transport, parse or navigation failure
    Fault,
}

/// Holds the submit control in its busy state until dropped.
///
/// Dropping restores the idle state, so every exit from an attempt
/// (including the attempt's future being dropped mid-request) re-enables
/// the button.
pub struct SubmitGuard<'a> {
    control: &'a dyn SubmitControl,
}

impl<'a> SubmitGuard<'a> {
    pub fn acquire(control: &'a dyn SubmitControl) -> Self {
        control.apply(SubmitControlState::busy());
        Self { control }
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.control.apply(SubmitControlState::idle());
    }
}

/// Drives one registration form: validation, request, notice, redirect
pub struct RegistrationController {
    form: Box<dyn FormSource>,
    control: Box<dyn SubmitControl>,
    api: Box<dyn RegistrationApi>,
    notifier: Box<dyn Notifier>,
    navigator: Box<dyn Navigator>,
    config: RegistrationConfig,
}

impl RegistrationController {
    pub fn new(
        form: impl FormSource + 'static,
        control: impl SubmitControl + 'static,
        api: impl RegistrationApi + 'static,
        notifier: impl Notifier + 'static,
        navigator: impl Navigator + 'static,
        config: RegistrationConfig,
    ) -> Self {
        Self {
            form: Box::new(form),
            control: Box::new(control),
            api: Box::new(api),
            notifier: Box::new(notifier),
            navigator: Box::new(navigator),
            config,
        }
    }

    /// Run one submit attempt against the current form values.
    ///
    /// The caller is responsible for suppressing the browser's default form
    /// submission before calling this.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> SubmissionOutcome {
        let request = match self.form.read_fields().into_request() {
            Ok(request) => request,
            Err(e) => {
                info!("Registration blocked locally: {}", e);
                self.notifier.notify(&e.to_string());
                return SubmissionOutcome::PasswordMismatch;
            }
        };

        let _guard = SubmitGuard::acquire(self.control.as_ref());

        info!("Submitting registration for {}", request.email);
        let reply = match self.api.register(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(transport = e.is_transport(), "Registration request failed: {}", e);
                self.notifier.notify(FAULT_NOTICE);
                return SubmissionOutcome::Fault;
            }
        };

        self.notifier.notify(&reply.notice());

        if !reply.is_success() {
            info!("Registration rejected with status {}", reply.status);
            return SubmissionOutcome::Rejected {
                status: reply.status,
            };
        }

        match self.navigator.redirect(&self.config.login_path) {
            Ok(()) => {
                info!("Registration accepted, redirecting to {}", self.config.login_path);
                SubmissionOutcome::Registered
            }
            Err(e) => {
                warn!("Redirect after registration failed: {}", e);
                self.notifier.notify(FAULT_NOTICE);
                SubmissionOutcome::Fault
            }
        }
    }
}
