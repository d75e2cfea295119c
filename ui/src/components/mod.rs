//! User Interface Components
//!
//! - **forms**: the registration form
//! - **input**: labelled, controlled input fields

pub mod forms;
pub mod input;
