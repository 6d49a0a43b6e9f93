//! Peng–Robinson cubic equation of state.
//!
//! `P = R·T/(v − b) − a·α(T)/(v² + 2·b·v − b²)`, solved for the compressibility
//! factor `Z` at given (P, T). Mixtures use van der Waals one-fluid mixing with
//! zero binary interaction parameters. When three real roots exist the root with
//! the lowest fugacity coefficient (the stable phase) is taken.
//!
//! Parameterized by each species' own critical constants, so a pure oxidizer is
//! modelled as itself rather than through a surrogate gas.

use crate::composition::Composition;
use crate::error::{FluidError, FluidResult};
use crate::model::FluidModel;
use crate::state::ThermoState;
use lre_core::units::constants::R_UNIVERSAL;
use lre_core::units::{Density, kg_per_m3};
use std::f64::consts::{PI, SQRT_2};

const OMEGA_A: f64 = 0.457_24;
const OMEGA_B: f64 = 0.077_80;

/// Peng–Robinson backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct PengRobinsonModel;

/// Mixture attraction/co-volume parameters at a given temperature.
#[derive(Debug, Clone, Copy)]
struct MixtureParams {
    /// a·α [Pa·m⁶/mol²]
    a: f64,
    /// b [m³/mol]
    b: f64,
}

impl PengRobinsonModel {
    pub fn new() -> Self {
        Self
    }

    fn mixture_params(comp: &Composition, t_k: f64) -> MixtureParams {
        let pure: Vec<(f64, f64, f64)> = comp
            .iter()
            .map(|(species, x)| {
                let cp = species.critical_point();
                let w = cp.acentric_factor;
                let kappa = 0.374_64 + 1.542_26 * w - 0.269_92 * w * w;
                let alpha = (1.0 + kappa * (1.0 - (t_k / cp.temperature_k).sqrt())).powi(2);
                let a = OMEGA_A * (R_UNIVERSAL * cp.temperature_k).powi(2) / cp.pressure_pa * alpha;
                let b = OMEGA_B * R_UNIVERSAL * cp.temperature_k / cp.pressure_pa;
                (x, a, b)
            })
            .collect();

        let mut a_mix = 0.0;
        for &(xi, ai, _) in &pure {
            for &(xj, aj, _) in &pure {
                a_mix += xi * xj * (ai * aj).sqrt();
            }
        }
        let b_mix = pure.iter().map(|&(x, _, b)| x * b).sum();

        MixtureParams { a: a_mix, b: b_mix }
    }

    /// Compressibility factor of the stable phase.
    pub fn compressibility(&self, state: &ThermoState) -> FluidResult<f64> {
        let t_k = state.temperature().value;
        let p_pa = state.pressure().value;
        let params = Self::mixture_params(state.composition(), t_k);

        let rt = R_UNIVERSAL * t_k;
        let a_dim = params.a * p_pa / (rt * rt);
        let b_dim = params.b * p_pa / rt;

        // Z³ − (1 − B)Z² + (A − 3B² − 2B)Z − (AB − B² − B³) = 0
        let roots = real_cubic_roots(
            -(1.0 - b_dim),
            a_dim - 3.0 * b_dim * b_dim - 2.0 * b_dim,
            -(a_dim * b_dim - b_dim * b_dim - b_dim.powi(3)),
        );

        let ln_phi = |z: f64| {
            z - 1.0
                - (z - b_dim).ln()
                - a_dim / (2.0 * SQRT_2 * b_dim)
                    * ((z + (1.0 + SQRT_2) * b_dim) / (z + (1.0 - SQRT_2) * b_dim)).ln()
        };

        roots
            .into_iter()
            .filter(|z| z.is_finite() && *z > b_dim)
            .map(|z| (z, ln_phi(z)))
            .filter(|(_, g)| g.is_finite())
            .min_by(|lhs, rhs| lhs.1.total_cmp(&rhs.1))
            .map(|(z, _)| z)
            .ok_or(FluidError::ConvergenceFailed {
                what: "Peng-Robinson compressibility root",
            })
    }
}

impl FluidModel for PengRobinsonModel {
    fn name(&self) -> &str {
        "PengRobinson"
    }

    fn supports_composition(&self, _comp: &Composition) -> bool {
        true
    }

    fn rho(&self, state: &ThermoState) -> FluidResult<Density> {
        let z = self.compressibility(state)?;
        let molar_mass = state.composition().molar_mass_kg_per_mol();
        let rho = state.pressure().value * molar_mass / (z * R_UNIVERSAL * state.temperature().value);
        Ok(kg_per_m3(rho))
    }
}

/// Real roots of the monic cubic `z³ + a2·z² + a1·z + a0`.
fn real_cubic_roots(a2: f64, a1: f64, a0: f64) -> Vec<f64> {
    // Depressed cubic t³ + p·t + q with z = t − a2/3
    let shift = a2 / 3.0;
    let p = a1 - a2 * a2 / 3.0;
    let q = 2.0 * a2.powi(3) / 27.0 - a2 * a1 / 3.0 + a0;
    let disc = (q / 2.0).powi(2) + (p / 3.0).powi(3);

    if disc > 0.0 {
        let sd = disc.sqrt();
        let t = (-q / 2.0 + sd).cbrt() + (-q / 2.0 - sd).cbrt();
        return vec![t - shift];
    }
    if p == 0.0 {
        return vec![-shift];
    }

    let r = 2.0 * (-p / 3.0).sqrt();
    let cos_arg = (3.0 * q / (2.0 * p) * (-3.0 / p).sqrt()).clamp(-1.0, 1.0);
    let phi = cos_arg.acos() / 3.0;
    (0..3)
        .map(|k| r * (phi - 2.0 * PI * k as f64 / 3.0).cos() - shift)
        .collect()
}
