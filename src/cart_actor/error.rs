use thiserror::Error;

/// Errors that can occur talking to the cart controller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
