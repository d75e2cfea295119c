//! Binding to a server-rendered registration form
//!
//! The page provides the markup; this module looks the elements up once,
//! wires the form's submit event to a [`RegistrationController`] and lets the
//! controller read and update the live elements.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::registration::controller::RegistrationController;
use crate::registration::traits::{FormSource, SubmitControl};
use crate::registration::types::{RegistrationFields, SubmitControlState};
use crate::services::browser::notify::{BrowserAlert, BrowserLocation};
use crate::services::client::RegistrationClient;
use crate::services::config::RegistrationConfig;
use crate::services::errors::{RegistrationError, RegistrationResult};
use crate::{console_debug, console_info};

pub const FORM_ID: &str = "registerForm";
pub const NAME_ID: &str = "name";
pub const EMAIL_ID: &str = "email";
pub const NUMBER_ID: &str = "number";
pub const PASSWORD_ID: &str = "password";
pub const CONFIRM_PASSWORD_ID: &str = "confirmPassword";
pub const SUBMIT_ID: &str = "submitBtn";

/// Typed lookup of an element by id
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> RegistrationResult<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| RegistrationError::MissingElement { id: id.to_string() })?
        .dyn_into::<T>()
        .map_err(|_| RegistrationError::Browser {
            message: format!("#{} is not the expected element type", id),
        })
}

/// Live references to the registration inputs and submit button
#[derive(Clone)]
pub struct DomRegistrationForm {
    name: HtmlInputElement,
    email: HtmlInputElement,
    number: HtmlInputElement,
    password: HtmlInputElement,
    confirm_password: HtmlInputElement,
    submit: HtmlButtonElement,
}

impl DomRegistrationForm {
    pub fn from_document(document: &Document) -> RegistrationResult<Self> {
        Ok(Self {
            name: element_by_id(document, NAME_ID)?,
            email: element_by_id(document, EMAIL_ID)?,
            number: element_by_id(document, NUMBER_ID)?,
            password: element_by_id(document, PASSWORD_ID)?,
            confirm_password: element_by_id(document, CONFIRM_PASSWORD_ID)?,
            submit: element_by_id(document, SUBMIT_ID)?,
        })
    }
}

impl FormSource for DomRegistrationForm {
    fn read_fields(&self) -> RegistrationFields {
        RegistrationFields {
            name: self.name.value(),
            email: self.email.value(),
            number: self.number.value(),
            password: self.password.value(),
            confirm_password: self.confirm_password.value(),
        }
    }
}

impl SubmitControl for DomRegistrationForm {
    fn apply(&self, state: SubmitControlState) {
        self.submit.set_disabled(state.disabled);
        self.submit.set_text_content(Some(state.label));
    }
}

/// Attach the registration controller to `#registerForm` in `document`.
///
/// The listener lives for the rest of the page's lifetime.
pub fn attach_to_document(document: &Document, config: RegistrationConfig) -> RegistrationResult<()> {
    let form: HtmlFormElement = element_by_id(document, FORM_ID)?;
    let view = DomRegistrationForm::from_document(document)?;
    let client = RegistrationClient::new(&config);

    let controller = Rc::new(RegistrationController::new(
        view.clone(),
        view,
        client,
        BrowserAlert,
        BrowserLocation,
        config,
    ));

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let controller = Rc::clone(&controller);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = controller.submit().await;
            console_debug!("Registration attempt finished: {:?}", outcome);
        });
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|e| RegistrationError::browser("Failed to attach submit listener", e))?;
    on_submit.forget();

    console_info!("Registration form bound to #{}", FORM_ID);
    Ok(())
}

/// JavaScript entry point for pages that render the form themselves
#[cfg(feature = "web")]
#[wasm_bindgen(js_name = bindRegisterForm)]
pub fn bind_register_form() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    attach_to_document(&document, RegistrationConfig::from_window())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
