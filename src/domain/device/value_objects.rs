//! ボタン関連の値オブジェクト

use super::errors::DeviceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two device buttons, addressed by its query argument name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonId {
    B1,
    B2,
}

impl ButtonId {
    pub const ALL: [ButtonId; 2] = [ButtonId::B1, ButtonId::B2];

    /// Query argument name carrying this button's value (`B1` / `B2`).
    pub fn arg_name(&self) -> &'static str {
        match self {
            ButtonId::B1 => "B1",
            ButtonId::B2 => "B2",
        }
    }

    /// Exact, case-sensitive match on the argument name.
    pub fn from_arg_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.arg_name() == name)
    }

    pub fn number(&self) -> u8 {
        match self {
            ButtonId::B1 => 1,
            ButtonId::B2 => 2,
        }
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.arg_name())
    }
}

/// How the button endpoints treat incoming values. One mode is active per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonMode {
    /// `/button.htm/push` writes the flags and redirects with both of them.
    #[default]
    Stored,
    /// `/button.htm/1` and `/button.htm/2` echo their argument back without storing it.
    Echo,
}

impl fmt::Display for ButtonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonMode::Stored => f.write_str("stored"),
            ButtonMode::Echo => f.write_str("echo"),
        }
    }
}

/// Parses a button argument value. Only the literals `"0"` and `"1"` are valid.
pub fn parse_button_value(button: ButtonId, raw: &str) -> Result<bool, DeviceError> {
    match raw {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(DeviceError::InvalidButtonValue {
            button,
            value: other.to_string(),
        }),
    }
}

/// Wire form of a flag inside a redirect query.
pub fn flag_digit(value: bool) -> char {
    if value { '1' } else { '0' }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_name_lookup_is_exact() {
        assert_eq!(ButtonId::from_arg_name("B1"), Some(ButtonId::B1));
        assert_eq!(ButtonId::from_arg_name("B2"), Some(ButtonId::B2));
        assert_eq!(ButtonId::from_arg_name("b1"), None);
        assert_eq!(ButtonId::from_arg_name("B3"), None);
        assert_eq!(ButtonId::from_arg_name(""), None);
    }

    #[test]
    fn test_parse_button_value() {
        assert_eq!(parse_button_value(ButtonId::B1, "1").ok(), Some(true));
        assert_eq!(parse_button_value(ButtonId::B1, "0").ok(), Some(false));

        for raw in ["", "true", "on", " 1", "01", "2"] {
            let err = parse_button_value(ButtonId::B2, raw).unwrap_err();
            assert!(matches!(
                err,
                DeviceError::InvalidButtonValue { button: ButtonId::B2, .. }
            ));
        }
    }

    #[test]
    fn test_default_mode_is_stored() {
        assert_eq!(ButtonMode::default(), ButtonMode::Stored);
        assert_eq!(ButtonMode::Echo.to_string(), "echo");
    }
}
