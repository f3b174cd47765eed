//! Remote catalog access: wire records, mapping, and the transport bridge.

mod dtos;
mod error;
mod fetcher;
mod http;
mod mapper;
mod sample;
mod transport;

pub use dtos::*;
pub use error::*;
pub use fetcher::*;
pub use http::*;
pub use mapper::*;
pub use sample::*;
pub use transport::*;
