// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor CEvNS — Target Nucleus
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Target nucleus and its weak charge.

use cevns_types::constants::PhysicalConstants;
use cevns_types::error::{CevnsError, CevnsResult};

/// Immutable target nucleus. Derived quantities are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    neutrons: f64,
    protons: f64,
    nucleons: f64,
    mass_kev: f64,
    weak_charge: f64,
}

impl Target {
    /// Build from neutron and proton counts. Counts may be fractional
    /// (isotope-averaged targets) but must be non-negative with N + Z > 0.
    pub fn new(neutrons: f64, protons: f64, constants: &PhysicalConstants) -> CevnsResult<Self> {
        if !neutrons.is_finite() || neutrons < 0.0 {
            return Err(CevnsError::Domain(format!(
                "neutron count must be non-negative and finite, got {neutrons}"
            )));
        }
        if !protons.is_finite() || protons < 0.0 {
            return Err(CevnsError::Domain(format!(
                "proton count must be non-negative and finite, got {protons}"
            )));
        }
        let nucleons = neutrons + protons;
        if nucleons <= 0.0 {
            return Err(CevnsError::Domain(
                "target must contain at least one nucleon".to_string(),
            ));
        }

        Ok(Target {
            neutrons,
            protons,
            nucleons,
            mass_kev: nucleons * constants.nucleon_mass_kev(),
            weak_charge: neutrons - (1.0 - 4.0 * constants.sin2_theta_w) * protons,
        })
    }

    /// Neutron count N.
    pub fn neutrons(&self) -> f64 {
        self.neutrons
    }

    /// Proton count Z.
    pub fn protons(&self) -> f64 {
        self.protons
    }

    /// Nucleon count A = N + Z.
    pub fn nucleons(&self) -> f64 {
        self.nucleons
    }

    /// Nuclear mass-energy M = A·m_n [keV].
    pub fn mass_kev(&self) -> f64 {
        self.mass_kev
    }

    /// Weak charge Qw = N − (1 − 4 sin²θ_W)·Z.
    pub fn weak_charge(&self) -> f64 {
        self.weak_charge
    }
}
