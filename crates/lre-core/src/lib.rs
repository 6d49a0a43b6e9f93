//! lre-core: shared foundation for the liquid rocket engine sizing workspace.
//!
//! Contains:
//! - units (uom SI types + constructors + physical constants)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error type for the guards)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
