// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor CEvNS — Cross Section
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Differential CEvNS cross section.
//!
//! At fixed neutrino energy:
//!   dσ/dT = G_F²/(4π) · Qw² · M · (1 − M·T/(2·Eν²)) · F²_Helm(T)   [cm²/keV]
//! zero at and beyond T_max = 2·Eν²/M.
//!
//! Spectrum-weighted:
//!   dσ/dT(T) = ∫₀^{Eν,max} dσ/dT(Eν, T) · Φ(Eν) dEν
//! one independent 1-D integral per T, run in parallel over T.

use std::f64::consts::PI;

use cevns_math::quadrature::{integrate_with_breakpoints, QuadratureConfig};
use cevns_types::constants::PhysicalConstants;
use cevns_types::error::{CevnsError, CevnsResult};
use ndarray::{Array1, ArrayView1};
use rayon::prelude::*;

use crate::form_factor::helm_form_factor;
use crate::spectrum::Spectrum;
use crate::target::Target;

/// Upper neutrino-energy cutoff of the spectrum integral [keV] (1 GeV).
pub const ENU_MAX_KEV: f64 = 1.0e6;

/// Initial partition of the neutrino-energy axis [keV]. The reactor fits
/// change slope at 1 MeV and vanish well before 100 MeV.
const ENU_BREAKPOINTS_KEV: [f64; 3] = [1.0e3, 1.0e4, 1.0e5];

/// G_F²/(4π) · Qw² · M [cm²/keV], the point-nucleus scale of dσ/dT.
pub fn prefactor(target: &Target, constants: &PhysicalConstants) -> f64 {
    let gf = constants.fermi_constant_cm_per_kev();
    let qw = target.weak_charge();
    gf * gf / (4.0 * PI) * qw * qw * target.mass_kev()
}

/// Maximum recoil energy T_max = 2·Eν²/M [keV].
pub fn max_recoil_kev(target: &Target, enu_kev: f64) -> f64 {
    2.0 * enu_kev * enu_kev / target.mass_kev()
}

/// Smallest neutrino energy able to produce recoil `t_kev`: √(M·T/2) [keV].
pub fn min_neutrino_energy_kev(target: &Target, t_kev: f64) -> f64 {
    (0.5 * target.mass_kev() * t_kev).sqrt()
}

/// (1 − M·T/(2·Eν²)), clamped to zero in the forbidden region.
fn kinematic_factor(target: &Target, enu_kev: f64, t_kev: f64) -> f64 {
    if enu_kev <= 0.0 || t_kev >= max_recoil_kev(target, enu_kev) {
        return 0.0;
    }
    (1.0 - target.mass_kev() * t_kev / (2.0 * enu_kev * enu_kev)).max(0.0)
}

/// dσ/dT [cm²/keV] at neutrino energy `enu_kev` and recoil energy `t_kev`.
pub fn dsigma_dt_at_enu(
    target: &Target,
    constants: &PhysicalConstants,
    enu_kev: f64,
    t_kev: f64,
) -> CevnsResult<f64> {
    if !enu_kev.is_finite() {
        return Err(CevnsError::Domain(format!(
            "neutrino energy must be finite, got {enu_kev} keV"
        )));
    }
    let form_factor = helm_form_factor(t_kev, target.nucleons(), constants)?;
    let value = prefactor(target, constants) * kinematic_factor(target, enu_kev, t_kev) * form_factor;
    Ok(value.max(0.0))
}

/// Broadcast [`dsigma_dt_at_enu`] over `enu_kev` and `t_kev`.
///
/// Lengths must match, or one side must have length 1 and is repeated.
pub fn dsigma_dt_at_enu_all(
    target: &Target,
    constants: &PhysicalConstants,
    enu_kev: ArrayView1<f64>,
    t_kev: ArrayView1<f64>,
) -> CevnsResult<Array1<f64>> {
    let (n_enu, n_t) = (enu_kev.len(), t_kev.len());
    let n = match (n_enu, n_t) {
        (a, b) if a == b => a,
        (1, b) => b,
        (a, 1) => a,
        (a, b) => return Err(CevnsError::ShapeMismatch { left: a, right: b }),
    };

    let values = (0..n)
        .map(|i| {
            let enu = if n_enu == 1 { enu_kev[0] } else { enu_kev[i] };
            let t = if n_t == 1 { t_kev[0] } else { t_kev[i] };
            dsigma_dt_at_enu(target, constants, enu, t)
        })
        .collect::<CevnsResult<Vec<f64>>>()?;
    Ok(Array1::from_vec(values))
}

/// Spectrum-weighted dσ/dT [cm²/keV per unit spectrum normalisation] at one recoil energy.
///
/// The integrand is divided by [`prefactor`] before quadrature so the
/// absolute tolerance in `config` applies to an O(1) quantity, then the
/// result is scaled back.
pub fn dsigma_dt_single<S>(
    target: &Target,
    constants: &PhysicalConstants,
    spectrum: &S,
    t_kev: f64,
    config: &QuadratureConfig,
) -> CevnsResult<f64>
where
    S: Spectrum + ?Sized,
{
    let form_factor = helm_form_factor(t_kev, target.nucleons(), constants)?;
    let scale = prefactor(target, constants);
    let enu_min = min_neutrino_energy_kev(target, t_kev);
    if scale == 0.0 || form_factor == 0.0 || enu_min >= ENU_MAX_KEV {
        return Ok(0.0);
    }
    let rescale = 1.0 / scale;

    // Below enu_min the integrand is identically zero.
    let mut points = Vec::with_capacity(ENU_BREAKPOINTS_KEV.len() + 2);
    points.push(enu_min);
    points.extend(ENU_BREAKPOINTS_KEV.iter().copied().filter(|&e| e > enu_min));
    points.push(ENU_MAX_KEV);

    let integrand = |enu: f64| {
        let dsigma = scale * kinematic_factor(target, enu, t_kev) * form_factor;
        rescale * dsigma * spectrum.evaluate(enu)
    };

    let result = integrate_with_breakpoints(integrand, &points, config).map_err(|e| {
        CevnsError::Integration {
            recoil_kev: t_kev,
            source: Box::new(e),
        }
    })?;

    tracing::debug!(
        t_kev,
        subdivisions = result.subdivisions,
        evaluations = result.evaluations,
        abs_error = result.abs_error,
        "spectrum-weighted cross section integrated"
    );

    Ok((result.value * scale).max(0.0))
}

/// Spectrum-weighted dσ/dT for every recoil energy in `t_kev`.
///
/// Each T is integrated independently on the rayon pool; output order
/// matches input order. The first failing T aborts the whole call.
pub fn dsigma_dt<S>(
    target: &Target,
    constants: &PhysicalConstants,
    spectrum: &S,
    t_kev: ArrayView1<f64>,
    config: &QuadratureConfig,
) -> CevnsResult<Array1<f64>>
where
    S: Spectrum + ?Sized,
{
    let recoils: Vec<f64> = t_kev.to_vec();
    let values = recoils
        .par_iter()
        .map(|&t| dsigma_dt_single(target, constants, spectrum, t, config))
        .collect::<CevnsResult<Vec<f64>>>()?;
    Ok(Array1::from_vec(values))
}
