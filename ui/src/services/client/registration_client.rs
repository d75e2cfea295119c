use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info, instrument};

use crate::registration::traits::RegistrationApi;
use crate::registration::types::{RegistrationReply, RegistrationRequest};
use crate::services::config::RegistrationConfig;
use crate::services::errors::{RegistrationError, RegistrationResult};

/// HTTP client for the account registration endpoint
#[derive(Clone)]
pub struct RegistrationClient {
    http_client: Client,
    register_url: String,
}

impl RegistrationClient {
    pub fn new(config: &RegistrationConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    /// Use a preconfigured reqwest client (proxy, timeouts, ...)
    pub fn with_http_client(http_client: Client, config: &RegistrationConfig) -> Self {
        Self {
            http_client,
            register_url: config.register_url(),
        }
    }

    pub fn register_url(&self) -> &str {
        &self.register_url
    }
}

#[async_trait(?Send)]
impl RegistrationApi for RegistrationClient {
    #[instrument(skip(self, request), fields(email = %request.email), err)]
    async fn register(&self, request: &RegistrationRequest) -> RegistrationResult<RegistrationReply> {
        info!("Posting registration to {}", self.register_url);

        let response = self
            .http_client
            .post(&self.register_url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| RegistrationError::Network {
                message: format!("Failed to call register endpoint: {}", e),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read registration response ({}): {}", status, e);
            RegistrationError::from(e)
        })?;

        info!("Register endpoint answered {}", status);
        RegistrationReply::parse(status.as_u16(), &body)
    }
}
