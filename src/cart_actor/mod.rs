//! The cart controller: catalog loading, directive publishing and checkout.

pub mod directives;
pub mod error;
pub mod service;

pub use directives::*;
pub use error::*;
pub use service::*;
