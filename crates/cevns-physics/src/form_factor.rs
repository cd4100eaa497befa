// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor CEvNS — Helm Form Factor
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Helm nuclear form factor.
//!
//!   q  = √(2·A·m_n·T)                                  [keV]
//!   c  = 1.23·A^(1/3) − 0.6,  s = 0.9,  a = 0.52        [fm]
//!   rn = √(c² + 7/3·(πa)² − 5s²)                       [fm]
//!   x  = q·rn/ħc
//!   F  = [3·(sin x − x·cos x)/x³]² · exp(−(q·s/ħc)²)
//!
//! The bracket is 3·j₁(x)/x, which has a removable singularity at x = 0;
//! below `SERIES_CUTOFF` its Taylor series is used instead.

use std::f64::consts::PI;

use cevns_types::constants::PhysicalConstants;
use cevns_types::error::{CevnsError, CevnsResult};
use ndarray::{Array1, ArrayView1};

/// Helm skin thickness s [fm].
pub const HELM_SKIN_FM: f64 = 0.9;

/// Surface diffuseness a [fm].
pub const HELM_DIFFUSENESS_FM: f64 = 0.52;

/// Below this x the closed form loses digits to cancellation.
const SERIES_CUTOFF: f64 = 1e-2;

/// Effective Helm radius rn [fm] for nucleon count `a`.
pub fn helm_radius_fm(a: f64) -> f64 {
    let c = 1.23 * a.cbrt() - 0.6;
    let pi_a = PI * HELM_DIFFUSENESS_FM;
    (c * c + 7.0 / 3.0 * pi_a * pi_a - 5.0 * HELM_SKIN_FM * HELM_SKIN_FM).sqrt()
}

/// Momentum transfer q [keV] for recoil energy `t_kev` on a nucleus of `a` nucleons.
pub fn momentum_transfer_kev(t_kev: f64, a: f64, constants: &PhysicalConstants) -> CevnsResult<f64> {
    if !a.is_finite() || a <= 0.0 {
        return Err(CevnsError::Domain(format!(
            "nucleon count must be positive and finite, got {a}"
        )));
    }
    if !t_kev.is_finite() {
        return Err(CevnsError::Domain(format!(
            "recoil energy must be finite, got {t_kev} keV"
        )));
    }
    let radicand = 2.0 * a * constants.nucleon_mass_kev() * t_kev;
    if radicand < 0.0 {
        return Err(CevnsError::Domain(format!(
            "negative radicand in momentum transfer for T = {t_kev} keV (2·A·m_n·T = {radicand})"
        )));
    }
    Ok(radicand.sqrt())
}

/// 3·j₁(x)/x = 3·(sin x − x·cos x)/x³, equal to 1 at x = 0.
fn bessel_ratio(x: f64) -> f64 {
    if x.abs() < SERIES_CUTOFF {
        let x2 = x * x;
        1.0 - x2 / 10.0 + x2 * x2 / 280.0 - x2 * x2 * x2 / 15_120.0
    } else {
        3.0 * (x.sin() - x * x.cos()) / (x * x * x)
    }
}

/// Helm form factor F(q²) at recoil energy `t_kev` for nucleon count `a`.
///
/// Returns a value in [0, 1]; exactly 1 at T = 0.
pub fn helm_form_factor(t_kev: f64, a: f64, constants: &PhysicalConstants) -> CevnsResult<f64> {
    let q = momentum_transfer_kev(t_kev, a, constants)?;
    let hbarc = constants.hbarc_kev_fm();
    let x = q * helm_radius_fm(a) / hbarc;
    let qs = q * HELM_SKIN_FM / hbarc;

    let bracket = bessel_ratio(x);
    Ok((bracket * bracket * (-qs * qs).exp()).max(0.0))
}

/// Elementwise [`helm_form_factor`] over a recoil-energy sequence.
pub fn helm_form_factor_all(
    t_kev: ArrayView1<f64>,
    a: f64,
    constants: &PhysicalConstants,
) -> CevnsResult<Array1<f64>> {
    let values = t_kev
        .iter()
        .map(|&t| helm_form_factor(t, a, constants))
        .collect::<CevnsResult<Vec<f64>>>()?;
    Ok(Array1::from_vec(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unity_at_zero_recoil() {
        let c = PhysicalConstants::default();
        for a in [1.0, 12.0, 28.0, 72.0, 131.0, 208.0] {
            assert_eq!(helm_form_factor(0.0, a, &c).unwrap(), 1.0, "F(0) for A = {a}");
        }
    }

    #[test]
    fn test_near_zero_continuous() {
        let c = PhysicalConstants::default();
        let f = helm_form_factor(1e-12, 28.0, &c).unwrap();
        assert!(f.is_finite() && (f - 1.0).abs() < 1e-9, "F(1e-12) = {f}");
    }

    #[test]
    fn test_series_matches_closed_form_at_cutoff() {
        let x = SERIES_CUTOFF;
        let series = {
            let x2 = x * x;
            1.0 - x2 / 10.0 + x2 * x2 / 280.0
        };
        let closed = 3.0 * (x.sin() - x * x.cos()) / (x * x * x);
        assert!((series - closed).abs() < 1e-10, "{series} vs {closed}");
    }

    #[test]
    fn test_helm_radius_silicon() {
        // c = 1.23·28^(1/3) − 0.6 ≈ 3.135 fm
        let rn = helm_radius_fm(28.0);
        assert!((rn - 3.46).abs() < 0.02, "rn(Si) = {rn} fm");
    }

    #[test]
    fn test_monotone_decrease_low_q() {
        let c = PhysicalConstants::default();
        let t = Array1::linspace(0.0, 10.0, 50);
        let f = helm_form_factor_all(t.view(), 72.0, &c).unwrap();
        for i in 1..f.len() {
            assert!(f[i] <= f[i - 1], "F not decreasing at T = {}", t[i]);
            assert!(f[i] >= 0.0 && f[i] <= 1.0);
        }
    }

    #[test]
    fn test_non_negative_through_diffraction_minimum() {
        let c = PhysicalConstants::default();
        let t = Array1::linspace(0.0, 2000.0, 400);
        let f = helm_form_factor_all(t.view(), 131.0, &c).unwrap();
        assert!(f.iter().all(|&v| v >= 0.0 && v.is_finite()));
    }

    #[test]
    fn test_rejects_negative_recoil() {
        let c = PhysicalConstants::default();
        match helm_form_factor(-0.1, 28.0, &c).unwrap_err() {
            CevnsError::Domain(msg) => assert!(msg.contains("negative radicand")),
            other => panic!("Expected Domain error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_nucleon_count() {
        let c = PhysicalConstants::default();
        assert!(helm_form_factor(1.0, 0.0, &c).is_err());
        assert!(helm_form_factor(1.0, f64::INFINITY, &c).is_err());
        assert!(helm_form_factor(f64::NAN, 28.0, &c).is_err());
    }

    #[test]
    fn test_batch_propagates_first_error() {
        let c = PhysicalConstants::default();
        let t = ndarray::array![0.1, -1.0, 0.2];
        assert!(helm_form_factor_all(t.view(), 28.0, &c).is_err());
    }
}
