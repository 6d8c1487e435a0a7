//! Core data types and structures

pub mod fields;
pub mod record;
pub mod snapshot;

pub use fields::*;
pub use record::*;
pub use snapshot::*;
