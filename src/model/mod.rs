//! Pure data structures exchanged with the backend and the shared cart state.

pub mod cart;
pub mod order;
pub mod product;

pub use cart::*;
pub use order::*;
pub use product::*;
