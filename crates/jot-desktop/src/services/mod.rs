//! Application services
//!
//! Services for secure storage and other shared functionality.

mod token_store;

pub use token_store::TokenStore;
