// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor CEvNS — Event Rate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Detector exposure and differential event rate.
//!
//!   dR/dT = dσ/dT · Φ · t_live · N_targets      [events/keV]

use cevns_types::constants::{PhysicalConstants, GRAMS_PER_KG};
use cevns_types::error::{CevnsError, CevnsResult};
use ndarray::{Array1, ArrayView1};

/// Immutable point detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detector {
    mass_kg: f64,
    live_time_s: f64,
    flux: f64,
    target_atoms: f64,
}

impl Detector {
    /// `flux` is the fission flux at the detector [1/cm²/s]; `nucleons` sets
    /// the molar mass (A g/mol) used for the target atom count.
    pub fn new(
        mass_kg: f64,
        live_time_s: f64,
        flux: f64,
        nucleons: f64,
        constants: &PhysicalConstants,
    ) -> CevnsResult<Self> {
        if !mass_kg.is_finite() || mass_kg <= 0.0 {
            return Err(CevnsError::Domain(format!(
                "detector mass must be positive and finite, got {mass_kg} kg"
            )));
        }
        if !live_time_s.is_finite() || live_time_s <= 0.0 {
            return Err(CevnsError::Domain(format!(
                "live time must be positive and finite, got {live_time_s} s"
            )));
        }
        if !flux.is_finite() || flux < 0.0 {
            return Err(CevnsError::Domain(format!(
                "neutrino flux must be non-negative and finite, got {flux}"
            )));
        }
        if !nucleons.is_finite() || nucleons <= 0.0 {
            return Err(CevnsError::Domain(format!(
                "nucleon count must be positive and finite, got {nucleons}"
            )));
        }

        Ok(Detector {
            mass_kg,
            live_time_s,
            flux,
            target_atoms: mass_kg * GRAMS_PER_KG / nucleons * constants.avogadro,
        })
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn live_time_s(&self) -> f64 {
        self.live_time_s
    }

    pub fn flux(&self) -> f64 {
        self.flux
    }

    /// Number of target nuclei.
    pub fn target_atoms(&self) -> f64 {
        self.target_atoms
    }

    /// Φ · t_live · N_targets, the factor turning cm²/keV into events/keV.
    pub fn exposure(&self) -> f64 {
        self.flux * self.live_time_s * self.target_atoms
    }
}

/// Differential event rate [events/keV] from a cross section [cm²/keV].
pub fn dr_dt(dsigma_dt: f64, detector: &Detector) -> f64 {
    dsigma_dt * detector.flux() * detector.live_time_s() * detector.target_atoms()
}

/// Elementwise [`dr_dt`].
pub fn dr_dt_all(dsigma_dt: ArrayView1<f64>, detector: &Detector) -> Array1<f64> {
    dsigma_dt.mapv(|s| dr_dt(s, detector))
}
