use std::fmt;
use std::sync::Arc;

use crate::domain::{CartLine, CheckoutSnapshot};
use crate::observer::ObserverHandle;

/// User-facing error shown in place of raw failure details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendlyError {
    Generic,
}

impl fmt::Display for FriendlyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FriendlyError::Generic => write!(f, "Something went wrong. Please try again later."),
        }
    }
}

/// UI effects the cart controller asks the presentation layer to apply,
/// in the order they are emitted.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    ShowLoading(bool),
    ReplaceList(Vec<Arc<CartLine>>),
    ShowError(FriendlyError),
    ShowEmptyCartWarning,
    NavigateToCheckout(CheckoutSnapshot),
}

pub type DirectiveSink = ObserverHandle<Directive>;
