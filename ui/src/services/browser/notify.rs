//! Browser implementations of the notice and navigation seams

use web_sys::window;

use crate::console_error;
use crate::registration::traits::{Navigator, Notifier};
use crate::services::errors::{RegistrationError, RegistrationResult};

/// `window.alert`, blocking until the user dismisses it
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&self, message: &str) {
        let Some(window) = window() else {
            console_error!("No window object, dropping notice: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            console_error!("Failed to show alert: {:?}", e);
        }
    }
}

/// Full page navigation through `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl Navigator for BrowserLocation {
    fn redirect(&self, path: &str) -> RegistrationResult<()> {
        let window = window().ok_or_else(|| RegistrationError::Browser {
            message: "No window object".to_string(),
        })?;
        window
            .location()
            .set_href(path)
            .map_err(|e| RegistrationError::browser("Failed to set location", e))
    }
}
