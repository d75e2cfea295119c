//! Browser-side adapters: DOM form binding, alerts and navigation

pub mod dom;
pub mod notify;

pub use dom::{attach_to_document, DomRegistrationForm};
#[cfg(feature = "web")]
pub use dom::bind_register_form;
pub use notify::{BrowserAlert, BrowserLocation};
