// Client-side functionality for the registration endpoint
//
// The browser posts registrations directly to the serving site's auth API;
// there is no intermediate server component in this crate.

pub mod registration_client;

pub use registration_client::RegistrationClient;
