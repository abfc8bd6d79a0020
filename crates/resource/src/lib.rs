//! Resource providers for rackmark.
//!
//! - [`FilesystemResourceProvider`]: a directory on the local filesystem
//! - [`InMemoryResourceProvider`]: re-exported from `rackmark-traits`

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

pub use rackmark_traits::InMemoryResourceProvider;
