// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor CEvNS — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants for the CEvNS rate model.
//!
//! Unit convention: energies in keV, masses in kg, lengths in cm unless a
//! field name says otherwise. The literal values below are model inputs and
//! are kept as given (e.g. ħc = 0.197 GeV·fm), not refined to CODATA.

use serde::{Deserialize, Serialize};

/// ħc [GeV·fm].
pub const HBARC_GEV_FM: f64 = 0.197;

/// Femtometres per centimetre.
pub const FM_PER_CM: f64 = 1.0e13;

/// Weak mixing angle sin²θ_W.
pub const SIN2_THETA_W: f64 = 0.2387;

/// Avogadro's number [1/mol].
pub const AVOGADRO: f64 = 6.022e23;

/// Joules per electron-volt.
pub const JOULE_PER_EV: f64 = 1.602e-19;

/// Energy released per fission [eV]. 200 MeV.
pub const EV_PER_FISSION: f64 = 200.0e6;

/// Fermi coupling constant G_F [GeV⁻²].
pub const FERMI_CONSTANT_GEV: f64 = 1.16637e-5;

/// Mass-energy per nucleon [GeV].
pub const NUCLEON_MASS_GEV: f64 = 0.9314941;

/// Grams per kilogram.
pub const GRAMS_PER_KG: f64 = 1.0e3;

/// keV per GeV.
pub const KEV_PER_GEV: f64 = 1.0e6;

/// Immutable set of constants threaded through every computation.
///
/// Passed by reference instead of read from module globals so a test can
/// perturb one value without touching any other test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    pub hbarc_gev_fm: f64,
    pub fm_per_cm: f64,
    pub sin2_theta_w: f64,
    pub avogadro: f64,
    pub joule_per_ev: f64,
    pub ev_per_fission: f64,
    pub fermi_constant_gev: f64,
    pub nucleon_mass_gev: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants {
            hbarc_gev_fm: HBARC_GEV_FM,
            fm_per_cm: FM_PER_CM,
            sin2_theta_w: SIN2_THETA_W,
            avogadro: AVOGADRO,
            joule_per_ev: JOULE_PER_EV,
            ev_per_fission: EV_PER_FISSION,
            fermi_constant_gev: FERMI_CONSTANT_GEV,
            nucleon_mass_gev: NUCLEON_MASS_GEV,
        }
    }
}

impl PhysicalConstants {
    /// ħc [keV·fm].
    pub fn hbarc_kev_fm(&self) -> f64 {
        self.hbarc_gev_fm * KEV_PER_GEV
    }

    /// Nucleon mass-energy [keV].
    pub fn nucleon_mass_kev(&self) -> f64 {
        self.nucleon_mass_gev * KEV_PER_GEV
    }

    /// G_F converted from natural units to [cm / keV].
    ///
    /// G_F[keV⁻²] · ħc[keV·fm] / (fm per cm).
    pub fn fermi_constant_cm_per_kev(&self) -> f64 {
        let gf_per_kev2 = self.fermi_constant_gev / (KEV_PER_GEV * KEV_PER_GEV);
        gf_per_kev2 * self.hbarc_kev_fm() / self.fm_per_cm
    }

    /// Energy released per fission [J].
    pub fn joule_per_fission(&self) -> f64 {
        self.ev_per_fission * self.joule_per_ev
    }
}
