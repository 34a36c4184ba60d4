//! ドメイン層
//!
//! デバイス状態とデバイスが依存する外部コラボレータのモデルを含む層

pub mod device;
pub mod storage;
pub mod system;

pub use device::{
    ButtonId, ButtonMode, DeviceError, DeviceState, flag_digit, parse_button_value,
};
pub use storage::{FileEntry, Filesystem, FilesystemError, FsInfo, FsPath};
pub use system::{
    ClockSync, NetworkError, NetworkLink, Platform, PlatformError, SysInfo, WifiCredentials,
};
