//! Dioxus signal state exposed to the registration controller

use dioxus::prelude::*;

use crate::registration::traits::{FormSource, SubmitControl};
use crate::registration::types::{
    RegistrationAction, RegistrationFields, RegistrationState, SubmitControlState,
};

/// Reads fields from the page state and writes the button state back
/// through the page's dispatch handler.
#[derive(Clone, Copy)]
pub struct SignalRegistrationView {
    state: Signal<RegistrationState>,
    dispatch: EventHandler<RegistrationAction>,
}

impl SignalRegistrationView {
    pub fn new(state: Signal<RegistrationState>, dispatch: EventHandler<RegistrationAction>) -> Self {
        Self { state, dispatch }
    }
}

impl FormSource for SignalRegistrationView {
    fn read_fields(&self) -> RegistrationFields {
        self.state.peek().fields.clone()
    }
}

impl SubmitControl for SignalRegistrationView {
    fn apply(&self, state: SubmitControlState) {
        self.dispatch.call(RegistrationAction::SetSubmitControl(state));
    }
}
