use crate::domain::device::{ButtonMode, DeviceState};
use crate::domain::storage::Filesystem;
use crate::domain::system::Platform;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared by every handler. Cloning shares the same [`DeviceState`].
#[derive(Clone)]
pub struct AppState {
    pub filesystem: Arc<dyn Filesystem>,
    pub platform: Arc<dyn Platform>,
    pub device: Arc<Mutex<DeviceState>>,
    pub button_mode: ButtonMode,
}

impl AppState {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        platform: Arc<dyn Platform>,
        button_mode: ButtonMode,
    ) -> Self {
        Self {
            filesystem,
            platform,
            device: Arc::new(Mutex::new(DeviceState::new())),
            button_mode,
        }
    }
}
