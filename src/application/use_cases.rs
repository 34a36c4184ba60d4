pub mod run_application;
pub mod show_system_info;

pub use run_application::{RunApplicationUseCase, StartupError};
pub use show_system_info::ShowSystemInfoUseCase;
