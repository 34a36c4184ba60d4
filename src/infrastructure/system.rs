pub mod fixed_platform;
pub mod linux_network;
pub mod linux_platform;
pub mod mock_network;
pub mod system_clock;

pub use fixed_platform::FixedPlatform;
pub use linux_network::LinuxNetworkLink;
pub use linux_platform::LinuxPlatform;
pub use mock_network::{MockClock, MockNetworkLink};
pub use system_clock::SystemClock;
