pub mod product;
pub mod cart_line;
pub mod checkout;

pub use product::*;
pub use cart_line::*;
pub use checkout::*;
