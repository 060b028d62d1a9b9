pub mod config;
pub mod credentials;

pub use self::config::*;
pub use credentials::{ApiKey, CredentialChain, CredentialError, CredentialSource};
