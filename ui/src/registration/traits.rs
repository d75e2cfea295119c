//! Seams between the registration controller and its environment
//!
//! Everything the controller touches goes through one of these traits, so
//! the same submit logic drives the Dioxus page, a server-rendered page and
//! the unit tests. Implementations are single-threaded; futures are `!Send`.

use async_trait::async_trait;

use crate::registration::types::{
    RegistrationFields, RegistrationReply, RegistrationRequest, SubmitControlState,
};
use crate::services::errors::RegistrationResult;

/// Current values of the form inputs
pub trait FormSource {
    fn read_fields(&self) -> RegistrationFields;
}

/// The submit button: a disabled flag and a text label
pub trait SubmitControl {
    fn apply(&self, state: SubmitControlState);
}

/// Blocking, modal user notification
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Page-level navigation
pub trait Navigator {
    fn redirect(&self, path: &str) -> RegistrationResult<()>;
}

/// The remote registration endpoint.
///
/// `Ok` means a response body was received and read, whatever its status.
#[async_trait(?Send)]
pub trait RegistrationApi {
    async fn register(&self, request: &RegistrationRequest) -> RegistrationResult<RegistrationReply>;
}
