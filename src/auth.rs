//! Client credentials and the short-lived bearer token they are exchanged for.

pub mod credentials;
pub mod token;

pub use credentials::*;
pub use token::*;
