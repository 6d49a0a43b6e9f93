//! lre-sizing: preliminary sizing of a liquid-propellant rocket engine.
//!
//! Closed-form relations, leaves first:
//! - [`flow`]: thrust/Isp → total flow, O/F partitioning, mass fractions
//! - [`isentropic`]: throat temperature and pressure, optimal expansion ratio
//! - [`geometry`]: circular area ↔ diameter
//! - [`nozzle`]: choked throat area, exit area
//! - [`chamber`]: L* volume and the contraction-ratio chamber heuristic
//! - [`structure`]: thin-wall hoop-stress wall thickness
//! - [`injector`]: fuel orifice and oxidizer injector areas
//!
//! [`pipeline::size_engine`] threads them together in a fixed forward order.
//! Every function is pure: it returns a value or a [`SizingError`], never a
//! partially-filled result.
//!
//! # Example
//!
//! ```
//! use lre_core::units::{k, n, s};
//! use lre_sizing::{flow, isentropic};
//!
//! let split = flow::partition_flow(n(89.0), s(260.0), 2.5).unwrap();
//! assert!((split.total.value - 0.0349).abs() < 1e-4);
//!
//! let t_star = isentropic::throat_temperature(k(3445.0), 1.2).unwrap();
//! assert!((t_star.value - 3131.8).abs() < 0.1);
//! ```

pub mod chamber;
mod common;
pub mod design;
pub mod error;
pub mod flow;
pub mod geometry;
pub mod injector;
pub mod isentropic;
pub mod nozzle;
pub mod pipeline;
pub mod structure;

// Re-exports
pub use chamber::{ChamberGeometry, ChamberPolicy};
pub use design::{DesignInputs, DesignOutputs};
pub use error::{SizingError, SizingResult};
pub use flow::{FlowSplit, MassFractions};
pub use injector::{InjectorInputs, InjectorSizing, OxidizerInjector};
pub use nozzle::{NozzleExit, ThroatConditions};
pub use pipeline::{PipelineError, SizingStage, size_engine};
pub use structure::WallInputs;
