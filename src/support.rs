//! Supporting utilities used by models.
//!
//! - [`boundary`]: The contract between a CFD host and a boundary profile.
//! - [`constraint`]: Type-level numeric constraints checked at construction.

pub mod boundary;
pub mod constraint;
