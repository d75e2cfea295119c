use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Browser API error: {message}")]
    Browser { message: String },

    #[error("Element not found: #{id}")]
    MissingElement { id: String },
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

impl RegistrationError {
    /// Wrap a JavaScript exception raised by a browser API call
    pub fn browser(context: &str, value: impl std::fmt::Debug) -> Self {
        RegistrationError::Browser {
            message: format!("{}: {:?}", context, value),
        }
    }

    /// Whether the failure came from the exchange with the endpoint (sending
    /// the request or reading its reply) rather than from the browser page
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RegistrationError::Network { .. } | RegistrationError::InvalidResponse { .. }
        )
    }
}

impl From<reqwest::Error> for RegistrationError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            RegistrationError::InvalidResponse {
                message: error.to_string(),
            }
        } else {
            RegistrationError::Network {
                message: error.to_string(),
            }
        }
    }
}
