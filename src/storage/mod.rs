//! Trade table persistence

pub mod table;
pub mod store;

pub use table::*;
pub use store::*;
