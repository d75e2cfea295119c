// Core types for the registration form - no dioxus imports needed here
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::services::errors::{RegistrationError, RegistrationResult};

/// Submit button label while no attempt is running
pub const REGISTER_LABEL: &str = "Register";
/// Submit button label while an attempt is in flight
pub const REGISTERING_LABEL: &str = "Registering...";
/// Notice shown for any transport or parse fault
pub const FAULT_NOTICE: &str = "Something went wrong.";

/// Local validation failures, detected before anything is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Raw field values as they appear in the form at submit time
#[derive(Clone, Default, PartialEq)]
pub struct RegistrationFields {
    pub name: String,
    pub email: String,
    pub number: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationFields {
    /// Check the password confirmation and build the outbound request.
    ///
    /// Name, email and number are trimmed. Both passwords are compared and
    /// sent exactly as typed.
    pub fn into_request(self) -> Result<RegistrationRequest, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(RegistrationRequest {
            name: trim_input(&self.name),
            email: trim_input(&self.email),
            number: trim_input(&self.number),
            password: self.password,
        })
    }
}

/// Whitespace as browsers strip it from input values: Unicode white space
/// plus the byte order mark, but not NEL (U+0085)
fn is_input_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

fn trim_input(value: &str) -> String {
    value.trim_matches(is_input_whitespace).to_string()
}

/// JSON body posted to the registration endpoint
#[derive(Serialize, Clone, PartialEq)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub number: String,
    pub password: String,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("number", &self.number)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What the registration endpoint answered
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationReply {
    pub status: u16,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl RegistrationReply {
    /// Parse a response body the way the page script reads it.
    ///
    /// Any JSON value is accepted except `null`, which the script cannot read
    /// properties from. Falsy fields (`""`, `0`, `false`, `null`) count as absent.
    pub fn parse(status: u16, body: &str) -> RegistrationResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| RegistrationError::InvalidResponse {
                message: format!("Failed to parse response: {}", e),
            })?;

        if value.is_null() {
            return Err(RegistrationError::InvalidResponse {
                message: "Response body is null".to_string(),
            });
        }

        Ok(Self {
            status,
            message: text_field(&value, "message"),
            error: text_field(&value, "error"),
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Text for the blocking notification: `message`, else `error`, else empty
    pub fn notice(&self) -> String {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

fn text_field(value: &serde_json::Value, key: &str) -> Option<String> {
    match &value[key] {
        serde_json::Value::String(text) if !text.is_empty() => Some(text.clone()),
        serde_json::Value::Bool(true) => Some("true".to_string()),
        serde_json::Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        // Arrays and objects stringify to browser-specific text; not worth showing
        _ => None,
    }
}

/// Enabled flag and label of the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControlState {
    pub disabled: bool,
    pub label: &'static str,
}

impl SubmitControlState {
    pub const fn idle() -> Self {
        Self {
            disabled: false,
            label: REGISTER_LABEL,
        }
    }

    pub const fn busy() -> Self {
        Self {
            disabled: true,
            label: REGISTERING_LABEL,
        }
    }
}

impl Default for SubmitControlState {
    fn default() -> Self {
        Self::idle()
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum RegistrationAction {
    SetName(String),
    SetEmail(String),
    SetNumber(String),
    SetPassword(String),
    SetConfirmPassword(String),
    SetSubmitControl(SubmitControlState),
}

/// Form state backing the Dioxus registration page
#[derive(Clone, Default, PartialEq)]
pub struct RegistrationState {
    pub fields: RegistrationFields,
    pub control: SubmitControlState,
}

impl RegistrationState {
    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::SetName(name) => {
                self.fields.name = name;
            }
            RegistrationAction::SetEmail(email) => {
                self.fields.email = email;
            }
            RegistrationAction::SetNumber(number) => {
                self.fields.number = number;
            }
            RegistrationAction::SetPassword(password) => {
                self.fields.password = password;
            }
            RegistrationAction::SetConfirmPassword(confirm) => {
                self.fields.confirm_password = confirm;
            }
            RegistrationAction::SetSubmitControl(control) => {
                self.control = control;
            }
        }
    }
}
