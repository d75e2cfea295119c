use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Password => "password",
        }
    }

    pub fn autocomplete(&self) -> &'static str {
        match self {
            InputType::Text => "name",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Password => "new-password",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FormFieldProps {
    /// Element id, also used as the input's name
    pub id: &'static str,
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub on_change: EventHandler<String>,
}

/// Labelled input bound to a controlled value
#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: props.id,
                "{props.label}"
            }
            input {
                class: "input-field",
                id: props.id,
                name: props.id,
                r#type: props.input_type.as_str(),
                autocomplete: props.input_type.autocomplete(),
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                required: true,
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}
