use super::value_objects::{ButtonId, flag_digit};
use serde::{Deserialize, Serialize};

/// Server-side button flags, visible across requests for the lifetime of the process.
///
/// Exactly one instance exists; it is created at startup with both flags off and
/// is only written by the stored-mode button handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    pub button1: bool,
    pub button2: bool,
}

impl DeviceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, button: ButtonId) -> bool {
        match button {
            ButtonId::B1 => self.button1,
            ButtonId::B2 => self.button2,
        }
    }

    pub fn set(&mut self, button: ButtonId, pressed: bool) {
        match button {
            ButtonId::B1 => self.button1 = pressed,
            ButtonId::B2 => self.button2 = pressed,
        }
    }

    /// `B1=<0|1>&B2=<0|1>`, always carrying both flags.
    pub fn to_query(&self) -> String {
        ButtonId::ALL
            .iter()
            .map(|id| format!("{}={}", id.arg_name(), flag_digit(self.get(*id))))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_both_flags_off() {
        let state = DeviceState::new();
        assert!(!state.button1);
        assert!(!state.button2);
        assert_eq!(state.to_query(), "B1=0&B2=0");
    }

    #[test]
    fn test_fields_are_independent() {
        let mut state = DeviceState::new();
        state.set(ButtonId::B2, true);
        state.set(ButtonId::B1, true);
        state.set(ButtonId::B1, false);

        assert!(!state.get(ButtonId::B1));
        assert!(state.get(ButtonId::B2));
        assert_eq!(state.to_query(), "B1=0&B2=1");
    }
}
