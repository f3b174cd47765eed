use std::sync::Arc;

use tokio::sync::oneshot;

use crate::cart_actor::CartError;
use crate::cell::CellData;
use crate::domain::CheckoutSnapshot;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// How a catalog load ended. Either way the directives have already been
/// delivered when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { line_count: usize },
    Failed,
}

/// How a checkout request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    EmptyCart,
    Ready(CheckoutSnapshot),
}

/// Requests handled by the cart service, one at a time.
#[derive(Debug)]
pub enum CartRequest {
    ViewReady {
        respond_to: ServiceResponse<LoadOutcome, CartError>,
    },
    Checkout {
        lines: Vec<Arc<dyn CellData>>,
        respond_to: ServiceResponse<CheckoutOutcome, CartError>,
    },
    Shutdown,
}
