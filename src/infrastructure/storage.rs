pub mod local_filesystem;
pub mod memory_filesystem;

pub use local_filesystem::LocalFilesystem;
pub use memory_filesystem::MemoryFilesystem;
