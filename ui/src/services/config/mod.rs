use crate::console_warn;

/// Default origin used when the page origin cannot be read (Flask dev server)
pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_PATH: &str = "/login";

/// Where the registration form talks to and where it goes afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationConfig {
    /// Scheme, host and port of the serving page, without trailing slash
    pub origin: String,
    pub register_path: String,
    pub login_path: String,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            register_path: REGISTER_PATH.to_string(),
            login_path: LOGIN_PATH.to_string(),
        }
    }
}

impl RegistrationConfig {
    /// Same-origin configuration for the page currently loaded in the browser
    pub fn from_window() -> Self {
        match web_sys::window().map(|w| w.location().origin()) {
            Some(Ok(origin)) => Self::default().with_origin(&origin),
            Some(Err(e)) => {
                console_warn!("Could not read page origin ({:?}), using {}", e, DEFAULT_ORIGIN);
                Self::default()
            }
            None => {
                console_warn!("No window object, using {}", DEFAULT_ORIGIN);
                Self::default()
            }
        }
    }

    pub fn with_origin(mut self, origin: &str) -> Self {
        self.origin = origin.trim_end_matches('/').to_string();
        self
    }

    /// Absolute URL of the registration endpoint
    pub fn register_url(&self) -> String {
        format!("{}{}", self.origin, self.register_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegistrationConfig::default();
        assert_eq!(config.register_path, "/api/auth/register");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.register_url(), "http://localhost:5000/api/auth/register");
    }

    #[test]
    fn test_with_origin_strips_trailing_slash() {
        let config = RegistrationConfig::default().with_origin("https://farm.example.com/");
        assert_eq!(config.origin, "https://farm.example.com");
        assert_eq!(
            config.register_url(),
            "https://farm.example.com/api/auth/register"
        );
        assert_eq!(config.login_path, "/login");
    }
}
