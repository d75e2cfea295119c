use dioxus::prelude::*;
use ui::RegistrationService;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Register" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/register")]
    Register {},
}

#[component]
fn Home() -> Element {
    rsx! {
        Register {}
    }
}

#[component]
fn Register() -> Element {
    rsx! {
        div {
            RegistrationService {}
        }
    }
}
