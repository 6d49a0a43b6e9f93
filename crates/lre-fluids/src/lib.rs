//! lre-fluids: fluid property lookups for engine sizing.
//!
//! Provides:
//! - Chemical species definitions with critical-point data (O2, N2O, CH4, ...)
//! - Composition handling (pure fluids and mixtures)
//! - Validated thermodynamic state (P, T, composition)
//! - `FluidModel` trait: the density lookup consumed by the sizing core
//! - Backends: ideal gas, Peng–Robinson cubic EOS, CoolProp (feature `coolprop`)
//!
//! # Architecture
//!
//! The sizing core only ever sees `&dyn FluidModel`. Which backend sits behind
//! it is a caller decision, made through [`FluidBackend`] or by constructing a
//! model directly.
//!
//! # Example
//!
//! ```
//! use lre_fluids::{Composition, FluidModel, PengRobinsonModel, Species};
//! use lre_core::units::{k, pa};
//!
//! let model = PengRobinsonModel::new();
//! let comp = Composition::pure(Species::O2);
//! let rho = model.density(k(298.15), pa(2.757e6), &comp).unwrap();
//! assert!(rho.value > 30.0 && rho.value < 40.0);
//! ```

pub mod backend;
pub mod composition;
#[cfg(feature = "coolprop")]
pub mod coolprop;
pub mod error;
pub mod ideal_gas;
pub mod model;
pub mod peng_robinson;
pub mod species;
pub mod state;

// Re-exports for ergonomics
pub use backend::FluidBackend;
pub use composition::Composition;
#[cfg(feature = "coolprop")]
pub use coolprop::CoolPropModel;
pub use error::{FluidError, FluidResult};
pub use ideal_gas::IdealGasModel;
pub use model::FluidModel;
pub use peng_robinson::PengRobinsonModel;
pub use species::{CriticalPoint, Species};
pub use state::ThermoState;
