//! Account flows built on the credential store and token issuer.

pub mod manager;

pub use manager::{AccountManager, LoginResult};
