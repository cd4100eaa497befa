// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor CEvNS — Experiment Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reactor CEvNS experiment: target + detector + spectra.
//!
//! Composes the reactor spectrum, cross section and event rate into
//! `dr_dt_cns`. The statistical layer (likelihood, toy MC, upper-limit
//! test statistic) has no defined model and returns `NotImplemented`.

use cevns_math::quadrature::QuadratureConfig;
use cevns_types::config::ExperimentConfig;
use cevns_types::constants::PhysicalConstants;
use cevns_types::error::{CevnsError, CevnsResult};
use ndarray::{Array1, ArrayView1};

use crate::cross_section::{dsigma_dt, dsigma_dt_at_enu_all};
use crate::event_rate::{dr_dt_all, Detector};
use crate::reactor::{nu_flux, FissileIsotope};
use crate::spectrum::{Spectrum, TabulatedSpectrum, ZeroSpectrum};
use crate::target::Target;

/// Caller-supplied experiment parameters.
#[derive(Debug, Clone, Copy)]
pub struct ExperimentParams {
    pub neutrons: f64,
    pub protons: f64,
    pub detector_mass_kg: f64,
    pub live_time_s: f64,
    /// Fission flux at the detector [1/cm²/s], e.g. from [`nu_flux`].
    pub nu_flux: f64,
}

/// CEvNS experiment with a neutrino spectrum (per neutrino energy) and a
/// background spectrum (per recoil energy).
pub struct CevnsExperiment {
    target: Target,
    detector: Detector,
    constants: PhysicalConstants,
    quadrature: QuadratureConfig,
    signal: Box<dyn Spectrum>,
    background: Box<dyn Spectrum>,
}

impl CevnsExperiment {
    pub fn new<S, B>(
        params: ExperimentParams,
        signal: S,
        background: B,
        constants: PhysicalConstants,
    ) -> CevnsResult<Self>
    where
        S: Spectrum + 'static,
        B: Spectrum + 'static,
    {
        let target = Target::new(params.neutrons, params.protons, &constants)?;
        let detector = Detector::new(
            params.detector_mass_kg,
            params.live_time_s,
            params.nu_flux,
            target.nucleons(),
            &constants,
        )?;

        tracing::info!(
            nucleons = target.nucleons(),
            weak_charge = target.weak_charge(),
            target_atoms = detector.target_atoms(),
            flux = detector.flux(),
            "CEvNS experiment constructed"
        );

        Ok(CevnsExperiment {
            target,
            detector,
            constants,
            quadrature: QuadratureConfig::default(),
            signal: Box::new(signal),
            background: Box::new(background),
        })
    }

    /// Replace the quadrature controls used by [`Self::dsigma_dt_cns`].
    pub fn with_quadrature(mut self, quadrature: QuadratureConfig) -> Self {
        self.quadrature = quadrature;
        self
    }

    /// Build from a validated JSON configuration with default constants.
    pub fn from_config(config: &ExperimentConfig) -> CevnsResult<Self> {
        config.validate()?;
        let constants = PhysicalConstants::default();
        let isotope: FissileIsotope = config.reactor.isotope.parse()?;
        let flux = nu_flux(
            config.reactor.power_mw,
            config.reactor.distance_cm,
            &constants,
        )?;
        let params = ExperimentParams {
            neutrons: config.target.neutrons,
            protons: config.target.protons,
            detector_mass_kg: config.detector.mass_kg,
            live_time_s: config.detector.live_time_s,
            nu_flux: flux,
        };

        let experiment = match &config.background {
            Some(bg) => {
                let background = TabulatedSpectrum::new(bg.recoil_kev.clone(), bg.rate.clone())?;
                Self::new(params, isotope, background, constants)?
            }
            None => Self::new(params, isotope, ZeroSpectrum, constants)?,
        };
        Ok(experiment.with_quadrature(config.quadrature))
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn quadrature(&self) -> &QuadratureConfig {
        &self.quadrature
    }

    /// Neutrino spectrum [ν/keV/fission] at the given neutrino energies.
    pub fn signal_spectrum(&self, enu_kev: ArrayView1<f64>) -> Array1<f64> {
        self.signal.evaluate_all(enu_kev)
    }

    /// dσ/dT [cm²/keV] at a fixed neutrino energy for each recoil energy.
    pub fn dsigma_dt_at_enu_cns(&self, enu_kev: f64, t_kev: ArrayView1<f64>) -> CevnsResult<Array1<f64>> {
        let enu = [enu_kev];
        dsigma_dt_at_enu_all(
            &self.target,
            &self.constants,
            ArrayView1::from(&enu[..]),
            t_kev,
        )
    }

    /// Spectrum-weighted dσ/dT [cm²/keV/fission] for each recoil energy.
    pub fn dsigma_dt_cns(&self, t_kev: ArrayView1<f64>) -> CevnsResult<Array1<f64>> {
        dsigma_dt(
            &self.target,
            &self.constants,
            self.signal.as_ref(),
            t_kev,
            &self.quadrature,
        )
    }

    /// Differential CEvNS event rate [events/keV] over the live time.
    pub fn dr_dt_cns(&self, t_kev: ArrayView1<f64>) -> CevnsResult<Array1<f64>> {
        let dsigma = self.dsigma_dt_cns(t_kev)?;
        Ok(dr_dt_all(dsigma.view(), &self.detector))
    }

    /// Background rate per recoil energy, as supplied.
    pub fn dr_dt_background(&self, t_kev: ArrayView1<f64>) -> Array1<f64> {
        self.background.evaluate_all(t_kev)
    }

    /// −2 log L(μ) for signal strength μ (μ = 1 ↔ Standard Model).
    pub fn neg2_log_likelihood(&self, _mu: f64, _data: ArrayView1<f64>) -> CevnsResult<f64> {
        Err(CevnsError::NotImplemented(
            "profile likelihood: no statistical model is defined",
        ))
    }

    /// Pseudo-experiment (list of recoil energies) drawn from the model.
    pub fn run_toy(&self) -> CevnsResult<Array1<f64>> {
        Err(CevnsError::NotImplemented(
            "toy Monte Carlo: no statistical model is defined",
        ))
    }

    /// Upper-limit test statistic for observed recoil energies.
    pub fn upper_limit_test_stat(&self, _data: ArrayView1<f64>) -> CevnsResult<f64> {
        Err(CevnsError::NotImplemented(
            "upper-limit test statistic: no statistical model is defined",
        ))
    }
}
