/// Inline feedback shown under a form or panel. Setting one kind clears the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn message_state_keeps_one_kind() {
        let mut state = MessageState::default();
        state.set_error("Program code is required");
        assert!(state.error.is_some());
        assert!(state.success.is_none());

        state.set_success("Program saved");
        assert_eq!(state.success.as_deref(), Some("Program saved"));
        assert!(state.error.is_none());

        state.clear();
        assert_eq!(state, MessageState::default());
    }
}
