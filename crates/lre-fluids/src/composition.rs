//! Fluid composition (pure or mixtures).

use crate::error::{FluidError, FluidResult};
use crate::species::Species;
use lre_core::numeric::{Tolerances, nearly_equal};

/// Fluid composition defined by normalized mole fractions.
///
/// The composition is always normalized (mole fractions sum to 1.0).
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Species and their mole fractions (always normalized to sum=1).
    items: Vec<(Species, f64)>,
}

impl Composition {
    /// Create a pure-species composition.
    pub fn pure(species: Species) -> Self {
        Self {
            items: vec![(species, 1.0)],
        }
    }

    /// Create a composition from mole fractions.
    ///
    /// Validates that all fractions are finite, non-negative, and have a positive sum,
    /// then normalizes to sum=1. Repeated species are merged.
    pub fn new_mole_fractions(fractions: Vec<(Species, f64)>) -> FluidResult<Self> {
        if fractions.is_empty() {
            return Err(FluidError::InvalidArg {
                what: "empty composition",
            });
        }

        let mut merged: Vec<(Species, f64)> = Vec::with_capacity(fractions.len());
        let mut sum = 0.0;
        for (species, frac) in fractions {
            if !frac.is_finite() {
                return Err(FluidError::NonPhysical {
                    what: "non-finite mole fraction",
                });
            }
            if frac < 0.0 {
                return Err(FluidError::NonPhysical {
                    what: "negative mole fraction",
                });
            }
            sum += frac;
            match merged.iter_mut().find(|(s, _)| *s == species) {
                Some((_, existing)) => *existing += frac,
                None => merged.push((species, frac)),
            }
        }

        if sum <= 0.0 || !sum.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "mole fractions sum to zero or non-finite",
            });
        }

        let normalized: Vec<(Species, f64)> = merged
            .into_iter()
            .map(|(s, f)| (s, f / sum))
            .filter(|(_, f)| *f > 1e-15) // Drop negligible species
            .collect();

        if normalized.is_empty() {
            return Err(FluidError::NonPhysical {
                what: "all mole fractions negligible",
            });
        }

        Ok(Self { items: normalized })
    }

    /// Create a composition from a species-name → mole-fraction mapping.
    ///
    /// Names are parsed with [`Species`]'s `FromStr` (keys or common names).
    pub fn from_names<'a, I>(fractions: I) -> FluidResult<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let parsed = fractions
            .into_iter()
            .map(|(name, frac)| name.parse::<Species>().map(|s| (s, frac)))
            .collect::<FluidResult<Vec<_>>>()?;
        Self::new_mole_fractions(parsed)
    }

    /// Get mole fraction of a species (0.0 if not present).
    pub fn mole_fraction(&self, species: Species) -> f64 {
        self.items
            .iter()
            .find(|(s, _)| *s == species)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    /// Check if this is a pure-species composition.
    ///
    /// Returns `Some(species)` if exactly one species has fraction ≈1.0.
    pub fn is_pure(&self) -> Option<Species> {
        match self.items.as_slice() {
            [(species, frac)] if nearly_equal(*frac, 1.0, Tolerances { abs: 1e-10, rel: 1e-10 }) => {
                Some(*species)
            }
            _ => None,
        }
    }

    /// Iterate over all species with non-zero mole fractions.
    pub fn iter(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        self.items.iter().copied()
    }

    /// Mixture molar mass [kg/kmol]: M_mix = Σ x_i·M_i.
    pub fn molar_mass(&self) -> f64 {
        self.items
            .iter()
            .map(|(species, mole_frac)| species.molar_mass() * mole_frac)
            .sum()
    }

    /// Mixture molar mass [kg/mol].
    pub fn molar_mass_kg_per_mol(&self) -> f64 {
        self.molar_mass() * 1e-3
    }
}

impl From<Species> for Composition {
    fn from(species: Species) -> Self {
        Self::pure(species)
    }
}
