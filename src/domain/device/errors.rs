use super::value_objects::ButtonId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("Invalid value for button {button}: {value:?} (expected \"0\" or \"1\")")]
    InvalidButtonValue { button: ButtonId, value: String },
}
