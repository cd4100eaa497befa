// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor CEvNS — Spectrum
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Differential spectra as a single capability.
//!
//! A [`Spectrum`] maps an energy in keV to a differential yield. The
//! reactor isotopes, tabulated backgrounds and plain closures all
//! implement it, so the experiment model never depends on one formula.

use cevns_math::interp::{interp1d, is_strictly_increasing};
use cevns_types::error::{CevnsError, CevnsResult};
use ndarray::{Array1, ArrayView1};

/// Differential yield as a function of energy [keV].
pub trait Spectrum: Send + Sync {
    /// Yield at a single energy.
    fn evaluate(&self, energy_kev: f64) -> f64;

    /// Elementwise yield over an ordered sequence; output length = input length.
    fn evaluate_all(&self, energies_kev: ArrayView1<f64>) -> Array1<f64> {
        energies_kev.mapv(|e| self.evaluate(e))
    }
}

impl<F> Spectrum for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, energy_kev: f64) -> f64 {
        self(energy_kev)
    }
}

/// Identically zero spectrum (no background).
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroSpectrum;

impl Spectrum for ZeroSpectrum {
    fn evaluate(&self, _energy_kev: f64) -> f64 {
        0.0
    }
}

/// Spectrum sampled on a grid, linearly interpolated and clamped at the ends.
#[derive(Debug, Clone)]
pub struct TabulatedSpectrum {
    energies_kev: Vec<f64>,
    values: Vec<f64>,
}

impl TabulatedSpectrum {
    pub fn new(energies_kev: Vec<f64>, values: Vec<f64>) -> CevnsResult<Self> {
        if energies_kev.len() != values.len() {
            return Err(CevnsError::ShapeMismatch {
                left: energies_kev.len(),
                right: values.len(),
            });
        }
        if energies_kev.is_empty() {
            return Err(CevnsError::Domain(
                "tabulated spectrum needs at least one sample".to_string(),
            ));
        }
        if !is_strictly_increasing(&energies_kev) {
            return Err(CevnsError::Domain(
                "tabulated spectrum energies must be finite and strictly increasing".to_string(),
            ));
        }
        if !values.iter().all(|v| v.is_finite()) {
            return Err(CevnsError::Domain(
                "tabulated spectrum values must be finite".to_string(),
            ));
        }
        Ok(Self {
            energies_kev,
            values,
        })
    }

    pub fn energies_kev(&self) -> &[f64] {
        &self.energies_kev
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Spectrum for TabulatedSpectrum {
    fn evaluate(&self, energy_kev: f64) -> f64 {
        interp1d(&self.energies_kev, &self.values, energy_kev)
    }
}
