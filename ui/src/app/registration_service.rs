use dioxus::prelude::*;

use crate::components::forms::RegisterFormComponent;
use crate::console_info;
use crate::registration::{RegistrationAction, RegistrationState};
use crate::services::config::RegistrationConfig;

const REGISTRATION_CSS: Asset = asset!("/assets/styling/registration.css");

#[component]
pub fn RegistrationService() -> Element {
    let mut state = use_signal(RegistrationState::default);

    // Endpoint and redirect target follow the page that served the app
    let config = use_hook(|| {
        let config = RegistrationConfig::from_window();
        console_info!("[Registration] Using endpoint {}", config.register_url());
        config
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: REGISTRATION_CSS }

        div {
            class: "registration-service-container",

            RegisterFormComponent {
                state: state,
                dispatch: dispatch,
                config: config
            }
        }
    }
}
