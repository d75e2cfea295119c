//! Registration form controller
//!
//! Handles one user-initiated submit of the account registration form:
//!
//! - checks that the password and its confirmation match
//! - posts `{name, email, number, password}` to the registration endpoint
//! - shows the server's message (or a generic fault notice) in a blocking alert
//! - redirects to the login page on success
//!
//! The submit button is disabled for the duration of the request and always
//! restored afterwards. Collaborators are injected through [`traits`], so the
//! controller is shared by the Dioxus page and the server-rendered binding.

pub mod controller;
pub mod signal_view;
pub mod traits;
pub mod types;

pub use controller::{RegistrationController, SubmissionOutcome, SubmitGuard};
pub use signal_view::SignalRegistrationView;
pub use traits::*;
pub use types::*;
