//! Domain layer - account records, credentials and password handling.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod account;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod password;

pub use account::{Account, AccountResponse};
pub use constants::*;
pub use credentials::Credentials;
pub use error::{DomainError, DomainResult};
pub use password::{HashScheme, Password};
