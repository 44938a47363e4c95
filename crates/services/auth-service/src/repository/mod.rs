//! Repository layer - read access to account records.

pub mod entities;
mod user_directory;

pub use user_directory::{UserDirectory, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_directory::MockUserDirectory;
