use dioxus::prelude::*;

use crate::components::input::{FormField, InputType};
use crate::console_debug;
use crate::registration::{
    RegistrationAction, RegistrationController, RegistrationState, SignalRegistrationView,
};
use crate::services::browser::{BrowserAlert, BrowserLocation};
use crate::services::client::RegistrationClient;
use crate::services::config::RegistrationConfig;

#[derive(Props, PartialEq, Clone)]
pub struct RegisterFormComponentProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
    pub config: RegistrationConfig,
}

#[component]
pub fn RegisterFormComponent(props: RegisterFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let config = props.config;

    rsx! {
        form {
            id: "registerForm",
            class: "registration-form",
            novalidate: true,
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                let view = SignalRegistrationView::new(state, dispatch);
                let controller = RegistrationController::new(
                    view,
                    view,
                    RegistrationClient::new(&config),
                    BrowserAlert,
                    BrowserLocation,
                    config.clone(),
                );

                spawn(async move {
                    let outcome = controller.submit().await;
                    console_debug!("Registration attempt finished: {:?}", outcome);
                });
            },

            h2 {
                class: "form-title",
                "Create Account"
            }

            FormField {
                id: "name",
                label: "Name:".to_string(),
                value: state().fields.name,
                placeholder: "Your full name".to_string(),
                input_type: InputType::Text,
                on_change: move |data: String| dispatch.call(RegistrationAction::SetName(data))
            }

            FormField {
                id: "email",
                label: "Email:".to_string(),
                value: state().fields.email,
                placeholder: "you@example.com".to_string(),
                input_type: InputType::Email,
                on_change: move |data: String| dispatch.call(RegistrationAction::SetEmail(data))
            }

            FormField {
                id: "number",
                label: "Phone number:".to_string(),
                value: state().fields.number,
                placeholder: "01XXXXXXXXX".to_string(),
                input_type: InputType::Tel,
                on_change: move |data: String| dispatch.call(RegistrationAction::SetNumber(data))
            }

            FormField {
                id: "password",
                label: "Password:".to_string(),
                value: state().fields.password,
                placeholder: "Choose a password".to_string(),
                input_type: InputType::Password,
                on_change: move |data: String| dispatch.call(RegistrationAction::SetPassword(data))
            }

            FormField {
                id: "confirmPassword",
                label: "Confirm password:".to_string(),
                value: state().fields.confirm_password,
                placeholder: "Repeat the password".to_string(),
                input_type: InputType::Password,
                on_change: move |data: String| dispatch.call(RegistrationAction::SetConfirmPassword(data))
            }

            div {
                class: "button-section",
                button {
                    id: "submitBtn",
                    class: "register-button",
                    r#type: "submit",
                    disabled: state().control.disabled,
                    "{state().control.label}"
                }
            }

            p {
                class: "form-footer",
                "Already have an account? "
                a { href: "/login", "Log in" }
            }
        }
    }
}
