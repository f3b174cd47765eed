//! # Store Cart
//!
//! Catalog browsing and cart building for a store front, with quantities
//! that can be tapped from many tasks at once and a consistent snapshot at
//! checkout.
//!
//! ## Terminology Note
//!
//! - **Service** (e.g. [`CartService`]) = the actor that owns state and
//!   handles requests one at a time
//! - **Client** (e.g. [`CartClient`]) = the cloneable handle used to send it
//!   requests
//! - **Directive** = a one-way UI instruction the service emits to the
//!   presentation layer
//!
//! ## Ingredients
//!
//! - **Domain** - [`Product`], [`CartLine`] (per-line mutex counter), [`CheckoutSnapshot`]
//! - **Catalog** - wire records, [`map_record`], the callback-style [`CatalogTransport`]
//!   and the [`CatalogFetcher`] that turns one callback into one awaitable result
//! - **Cart actor** - [`CartService`] loads the catalog, publishes [`Directive`]s and
//!   assembles checkouts; [`CartClient`] drives it
//! - **Cells** - [`CellData`] rows and the [`CartCell`] view-model
//! - **System** - [`StoreSystem`] wiring, [`StoreConfig`], [`setup_tracing`]
//!
//! ## Example Usage
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use store_cart::{DataSource, StoreConfig, StoreSystem};
//!
//! let config = StoreConfig { data_source: DataSource::SampleData, ..StoreConfig::default() };
//! let (system, mut directives) = StoreSystem::start(&config)?;
//!
//! system.cart_client.on_view_ready().await?;
//! while let Ok(directive) = directives.try_recv() {
//!     println!("{directive:?}");
//! }
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod cart_actor;
pub mod catalog;
pub mod cell;
pub mod clients;
pub mod domain;
pub mod messages;
pub mod observer;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, ConfigError, DataSource, StoreArgs, StoreConfig, StoreSystem};
pub use cart_actor::{CartError, CartService, Directive, DirectiveSink, FriendlyError};
pub use catalog::{
    map_record, CatalogEndpoint, CatalogFetcher, CatalogTransport, FetchError, HttpTransport, ProductRecord,
    ProductSource, SampleDataTransport, TransportError,
};
pub use cell::{CartCell, CellData, CellField, SectionHeader};
pub use clients::CartClient;
pub use domain::{CartLine, CheckoutLine, CheckoutSnapshot, Product};
pub use messages::{CheckoutOutcome, LoadOutcome};
