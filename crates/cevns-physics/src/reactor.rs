// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor CEvNS — Reactor Spectrum
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reactor antineutrino emission spectra and point-source flux.
//!
//! Spectra are the exponential-of-quintic fits of Mueller et al.
//! (arXiv:1101.2663v3):
//!   dN/dE [ν/MeV/fission] = exp(Σ_k a_k E^k),  E in MeV.
//! The fit is not valid below 1 MeV; there the value at 1 MeV is used.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use cevns_types::constants::PhysicalConstants;
use cevns_types::error::{CevnsError, CevnsResult};

use crate::spectrum::Spectrum;

/// Lower edge of the published fit [MeV].
pub const SPECTRUM_FLOOR_MEV: f64 = 1.0;

/// keV per MeV.
const KEV_PER_MEV: f64 = 1.0e3;

/// Watts per megawatt.
const WATT_PER_MW: f64 = 1.0e6;

/// Fissile isotopes with a parametric antineutrino spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FissileIsotope {
    U235,
    U238,
    Pu239,
}

impl FissileIsotope {
    pub const ALL: [FissileIsotope; 3] = [
        FissileIsotope::U235,
        FissileIsotope::U238,
        FissileIsotope::Pu239,
    ];

    /// Fit coefficients a_0..a_5 of the exponent polynomial.
    pub fn coefficients(self) -> [f64; 6] {
        match self {
            FissileIsotope::U235 => [3.217, -3.111, 1.395, -3.690e-1, 4.445e-2, -2.053e-3],
            FissileIsotope::U238 => [4.833e-1, 1.927e-1, -1.283e-1, -6.762e-3, 2.233e-3, -1.536e-4],
            FissileIsotope::Pu239 => [6.413, -7.432, 3.535, -8.82e-1, 1.025e-1, -4.550e-3],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FissileIsotope::U235 => "U235",
            FissileIsotope::U238 => "U238",
            FissileIsotope::Pu239 => "Pu239",
        }
    }

    /// Yield [ν/MeV/fission] at `enu_mev`, flat below the fit floor.
    pub fn yield_per_mev(self, enu_mev: f64) -> f64 {
        let e = if enu_mev < SPECTRUM_FLOOR_MEV {
            SPECTRUM_FLOOR_MEV
        } else {
            enu_mev
        };
        let exponent = self
            .coefficients()
            .iter()
            .rev()
            .fold(0.0, |acc, &a| acc * e + a);
        exponent.exp()
    }
}

impl Spectrum for FissileIsotope {
    /// Yield [ν/keV/fission] at `energy_kev`.
    fn evaluate(&self, energy_kev: f64) -> f64 {
        // d/dE_keV = 1e-3 · d/dE_MeV
        self.yield_per_mev(energy_kev / KEV_PER_MEV) / KEV_PER_MEV
    }
}

impl fmt::Display for FissileIsotope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FissileIsotope {
    type Err = CevnsError;

    /// Accepts "U235", "U-235", "u235", "Pu239", "Pu-239", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "u235" => Ok(FissileIsotope::U235),
            "u238" => Ok(FissileIsotope::U238),
            "pu239" => Ok(FissileIsotope::Pu239),
            _ => Err(CevnsError::ConfigError(format!(
                "unknown fissile isotope '{s}' (expected U235, U238 or Pu239)"
            ))),
        }
    }
}

/// Isotropic fission flux [fissions/cm²/s] at `distance_cm` from a core of
/// thermal power `power_mw`.
///
/// Φ = P / E_fission / (4π d²). Multiply by a per-fission spectrum to get
/// the neutrino flux density.
pub fn nu_flux(power_mw: f64, distance_cm: f64, constants: &PhysicalConstants) -> CevnsResult<f64> {
    if !distance_cm.is_finite() || distance_cm <= 0.0 {
        return Err(CevnsError::Domain(format!(
            "distance to reactor must be positive and finite, got {distance_cm} cm"
        )));
    }
    if !power_mw.is_finite() || power_mw < 0.0 {
        return Err(CevnsError::Domain(format!(
            "reactor power must be non-negative and finite, got {power_mw} MW"
        )));
    }
    let fissions_per_s = power_mw * WATT_PER_MW / constants.joule_per_fission();
    Ok(fissions_per_s / (4.0 * PI * distance_cm * distance_cm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_flat_below_floor() {
        for iso in FissileIsotope::ALL {
            let at_floor = iso.evaluate(1000.0);
            for enu in [0.0, 1.0, 250.0, 999.999] {
                assert_eq!(
                    iso.evaluate(enu),
                    at_floor,
                    "{iso} at {enu} keV should equal the 1 MeV value"
                );
            }
        }
    }

    #[test]
    fn test_u235_reference_value() {
        // exp(3.217 - 3.111 + 1.395 - 0.369 + 0.04445 - 0.002053) per MeV
        let expected = (3.217 - 3.111 + 1.395 - 0.369 + 0.04445 - 0.002053_f64).exp() * 1e-3;
        let got = FissileIsotope::U235.evaluate(1000.0);
        assert!(
            ((got - expected) / expected).abs() < 1e-12,
            "U235(1 MeV) = {got}, expected {expected}"
        );
    }

    #[test]
    fn test_unit_conversion_per_kev() {
        let e_mev = 3.2;
        let per_mev = FissileIsotope::Pu239.yield_per_mev(e_mev);
        let per_kev = FissileIsotope::Pu239.evaluate(e_mev * 1000.0);
        assert!((per_kev * 1000.0 - per_mev).abs() < 1e-12 * per_mev);
    }

    #[test]
    fn test_spectra_finite_and_distinct() {
        let enu = Array1::linspace(0.0, 1.0e4, 100);
        let curves: Vec<Array1<f64>> = FissileIsotope::ALL
            .iter()
            .map(|iso| iso.evaluate_all(enu.view()))
            .collect();
        for (iso, curve) in FissileIsotope::ALL.iter().zip(&curves) {
            assert_eq!(curve.len(), enu.len());
            for &v in curve.iter() {
                assert!(v.is_finite() && v >= 0.0, "{iso}: bad value {v}");
            }
        }
        for (i, &e) in enu.iter().enumerate() {
            if e > 1000.0 {
                assert_ne!(curves[0][i], curves[1][i], "U235 == U238 at {e} keV");
                assert_ne!(curves[0][i], curves[2][i], "U235 == Pu239 at {e} keV");
                assert_ne!(curves[1][i], curves[2][i], "U238 == Pu239 at {e} keV");
            }
        }
    }

    #[test]
    fn test_high_energy_tail_vanishes() {
        for iso in FissileIsotope::ALL {
            let v = iso.evaluate(1.0e6);
            assert!(v.is_finite() && v < 1e-300, "{iso} at 1 GeV = {v}");
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("U235".parse::<FissileIsotope>().unwrap(), FissileIsotope::U235);
        assert_eq!("u-238".parse::<FissileIsotope>().unwrap(), FissileIsotope::U238);
        assert_eq!("Pu_239".parse::<FissileIsotope>().unwrap(), FissileIsotope::Pu239);
        assert!("Th232".parse::<FissileIsotope>().is_err());
        for iso in FissileIsotope::ALL {
            assert_eq!(iso.to_string().parse::<FissileIsotope>().unwrap(), iso);
        }
    }

    #[test]
    fn test_nu_flux_inverse_square() {
        let c = PhysicalConstants::default();
        let near = nu_flux(5.5, 400.0, &c).unwrap();
        let far = nu_flux(5.5, 800.0, &c).unwrap();
        assert!(
            ((near / far) - 4.0).abs() < 1e-12,
            "inverse-square violated: {near} / {far}"
        );
    }

    #[test]
    fn test_nu_flux_reference() {
        // 5.5e6 W / 3.204e-11 J / (4π·400²) ≈ 8.54e10 /cm²/s
        let flux = nu_flux(5.5, 400.0, &PhysicalConstants::default()).unwrap();
        let expected = 5.5e6 / 3.204e-11 / (4.0 * PI * 160_000.0);
        assert!(((flux - expected) / expected).abs() < 1e-12, "flux = {flux:e}");
    }

    #[test]
    fn test_nu_flux_rejects_bad_distance() {
        let c = PhysicalConstants::default();
        for d in [0.0, -10.0, f64::NAN] {
            match nu_flux(5.5, d, &c).unwrap_err() {
                CevnsError::Domain(msg) => assert!(msg.contains("distance")),
                other => panic!("Expected Domain error, got {other:?}"),
            }
        }
        assert!(nu_flux(-1.0, 100.0, &c).is_err());
    }
}
