//! Browser tests for the server-rendered form binding.
//!
//! Run with `wasm-pack test --headless --chrome ui`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit, HtmlButtonElement, HtmlElement, HtmlInputElement};

use ui::registration::{FormSource, SubmitControl, SubmitControlState};
use ui::services::browser::dom::{attach_to_document, element_by_id, DomRegistrationForm};
use ui::services::config::RegistrationConfig;
use ui::services::errors::RegistrationError;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Render the registration markup into a fresh container and return it
fn mount_form(document: &Document) -> HtmlElement {
    let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    container.set_inner_html(
        r#"
        <form id="registerForm">
            <input id="name" value="  Rahim  ">
            <input id="email" value=" a@b.com ">
            <input id="number" value=" 01700000000 ">
            <input id="password" type="password" value=" pw ">
            <input id="confirmPassword" type="password" value=" pw ">
            <button id="submitBtn" type="submit">Register</button>
        </form>
        "#,
    );
    document.body().unwrap().append_child(&container).unwrap();
    container
}

#[wasm_bindgen_test]
fn reads_raw_field_values() {
    let document = document();
    let container = mount_form(&document);

    let view = DomRegistrationForm::from_document(&document).unwrap();
    let fields = view.read_fields();

    assert_eq!(fields.name, "  Rahim  ");
    assert_eq!(fields.email, " a@b.com ");
    assert_eq!(fields.number, " 01700000000 ");
    assert_eq!(fields.password, " pw ");
    assert_eq!(fields.confirm_password, " pw ");

    // Values are read live, not captured at construction
    let name: HtmlInputElement = element_by_id(&document, "name").unwrap();
    name.set_value("Karim");
    assert_eq!(view.read_fields().name, "Karim");

    container.remove();
}

#[wasm_bindgen_test]
fn applies_submit_control_state() {
    let document = document();
    let container = mount_form(&document);

    let view = DomRegistrationForm::from_document(&document).unwrap();
    let button: HtmlButtonElement = element_by_id(&document, "submitBtn").unwrap();

    view.apply(SubmitControlState::busy());
    assert!(button.disabled());
    assert_eq!(button.text_content().unwrap(), "Registering...");

    view.apply(SubmitControlState::idle());
    assert!(!button.disabled());
    assert_eq!(button.text_content().unwrap(), "Register");

    container.remove();
}

/// Replace `window.alert` with a recorder; returns the recorded messages
fn stub_alert() -> (Rc<RefCell<Vec<String>>>, Closure<dyn FnMut(JsValue)>) {
    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink = messages.clone();
    let stub = Closure::<dyn FnMut(JsValue)>::new(move |message: JsValue| {
        sink.borrow_mut().push(message.as_string().unwrap_or_default());
    });
    let window = web_sys::window().unwrap();
    Reflect::set(&window, &"alert".into(), stub.as_ref()).unwrap();
    (messages, stub)
}

fn restore_alert() {
    let window = web_sys::window().unwrap();
    Reflect::delete_property(&window, &"alert".into()).unwrap();
}

/// Let spawned tasks and pending microtasks run
async fn next_tick() {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn submit_with_mismatched_passwords_alerts_without_disabling() {
    let document = document();
    let container = mount_form(&document);
    let confirm: HtmlInputElement = element_by_id(&document, "confirmPassword").unwrap();
    confirm.set_value(" pw2 ");

    attach_to_document(&document, RegistrationConfig::default()).unwrap();
    let (messages, _stub) = stub_alert();

    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    let form: HtmlElement = element_by_id(&document, "registerForm").unwrap();
    let not_cancelled = form.dispatch_event(&event).unwrap();

    // The listener cancels the native submission synchronously
    assert!(event.default_prevented());
    assert!(!not_cancelled);

    next_tick().await;
    restore_alert();

    assert_eq!(*messages.borrow(), vec!["Passwords do not match.".to_string()]);

    let button: HtmlButtonElement = element_by_id(&document, "submitBtn").unwrap();
    assert!(!button.disabled());
    assert_eq!(button.text_content().unwrap(), "Register");

    container.remove();
}

#[wasm_bindgen_test]
fn reports_missing_elements() {
    let document = document();

    match DomRegistrationForm::from_document(&document) {
        Err(RegistrationError::MissingElement { id }) => assert_eq!(id, "name"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("form should not be found without markup"),
    }

    assert!(matches!(
        attach_to_document(&document, RegistrationConfig::default()),
        Err(RegistrationError::MissingElement { .. })
    ));
}

#[wasm_bindgen_test]
fn rejects_wrong_element_type() {
    let document = document();
    let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    container.set_inner_html(r#"<div id="submitBtn"></div>"#);
    document.body().unwrap().append_child(&container).unwrap();

    let result = element_by_id::<HtmlButtonElement>(&document, "submitBtn");
    assert!(matches!(result, Err(RegistrationError::Browser { .. })));

    container.remove();
}
