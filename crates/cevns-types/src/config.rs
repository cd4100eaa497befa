// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor CEvNS — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{CevnsError, CevnsResult};

/// Seconds in a 365-day year.
pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;

/// Top-level experiment configuration.
/// Maps 1:1 to the JSON files under `configs/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub name: String,
    pub target: TargetConfig,
    pub detector: DetectorConfig,
    pub reactor: ReactorConfig,
    /// Tabulated background per recoil energy. Absent means zero background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundConfig>,
    #[serde(default)]
    pub quadrature: QuadratureConfig,
}

/// Target nucleus composition. Counts may be non-integral for effective targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetConfig {
    pub neutrons: f64,
    pub protons: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DetectorConfig {
    pub mass_kg: f64,
    pub live_time_s: f64,
}

/// Point-source reactor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactorConfig {
    /// Fissile isotope name: "U235", "U238" or "Pu239".
    pub isotope: String,
    /// Thermal power [MW].
    pub power_mw: f64,
    /// Reactor core to detector distance [cm].
    pub distance_cm: f64,
}

/// Background rate sampled on a recoil-energy grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundConfig {
    /// Recoil energies [keV], strictly increasing.
    pub recoil_kev: Vec<f64>,
    /// Differential rate at each recoil energy [events/keV].
    pub rate: Vec<f64>,
}

/// Adaptive quadrature controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadratureConfig {
    /// Absolute tolerance on the (rescaled) integral (default: 1e-6)
    #[serde(default = "default_abs_tol")]
    pub abs_tol: f64,
    /// Relative tolerance (default: 1.49e-8)
    #[serde(default = "default_rel_tol")]
    pub rel_tol: f64,
    /// Maximum number of interval bisections (default: 200)
    #[serde(default = "default_max_subdivisions")]
    pub max_subdivisions: usize,
}

fn default_abs_tol() -> f64 {
    1e-6
}
fn default_rel_tol() -> f64 {
    1.49e-8
}
fn default_max_subdivisions() -> usize {
    200
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        QuadratureConfig {
            abs_tol: default_abs_tol(),
            rel_tol: default_rel_tol(),
            max_subdivisions: default_max_subdivisions(),
        }
    }
}

impl Default for ExperimentConfig {
    /// 5 kg silicon detector, one year, 400 cm from a 5.5 MW U-235 core.
    fn default() -> Self {
        ExperimentConfig {
            name: "Si-U235-Reference".to_string(),
            target: TargetConfig {
                neutrons: 14.0,
                protons: 14.0,
            },
            detector: DetectorConfig {
                mass_kg: 5.0,
                live_time_s: SECONDS_PER_YEAR,
            },
            reactor: ReactorConfig {
                isotope: "U235".to_string(),
                power_mw: 5.5,
                distance_cm: 400.0,
            },
            background: None,
            quadrature: QuadratureConfig::default(),
        }
    }
}

impl ExperimentConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> CevnsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Structural checks. Physical-range checks happen when the model is built.
    pub fn validate(&self) -> CevnsResult<()> {
        let numbers = [
            ("target.neutrons", self.target.neutrons),
            ("target.protons", self.target.protons),
            ("detector.mass_kg", self.detector.mass_kg),
            ("detector.live_time_s", self.detector.live_time_s),
            ("reactor.power_mw", self.reactor.power_mw),
            ("reactor.distance_cm", self.reactor.distance_cm),
            ("quadrature.abs_tol", self.quadrature.abs_tol),
            ("quadrature.rel_tol", self.quadrature.rel_tol),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(CevnsError::ConfigError(format!(
                    "{field} must be finite, got {value}"
                )));
            }
        }
        if self.quadrature.max_subdivisions == 0 {
            return Err(CevnsError::ConfigError(
                "quadrature.max_subdivisions must be at least 1".to_string(),
            ));
        }
        if let Some(bg) = &self.background {
            if bg.recoil_kev.len() != bg.rate.len() {
                return Err(CevnsError::ConfigError(format!(
                    "background length mismatch: {} energies, {} rates",
                    bg.recoil_kev.len(),
                    bg.rate.len()
                )));
            }
            if bg.recoil_kev.is_empty() {
                return Err(CevnsError::ConfigError(
                    "background table must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/cevns-types/ at compile time,
    /// so we go up 2 levels to reach the workspace root.
    fn project_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    fn config_path(relative: &str) -> String {
        project_root().join(relative).to_string_lossy().to_string()
    }

    #[test]
    fn test_load_silicon_config() {
        let cfg = ExperimentConfig::from_file(&config_path("configs/silicon_u235.json")).unwrap();
        assert_eq!(cfg.name, "Si-U235-Reference");
        assert_eq!(cfg.reactor.isotope, "U235");
        assert!((cfg.target.neutrons - 14.0).abs() < 1e-12);
        assert!((cfg.detector.live_time_s - SECONDS_PER_YEAR).abs() < 1e-6);
        assert!((cfg.reactor.distance_cm - 400.0).abs() < 1e-12);
        let bg = cfg.background.expect("sample config carries a background table");
        assert_eq!(bg.recoil_kev.len(), bg.rate.len());
    }

    #[test]
    fn test_load_germanium_config() {
        let cfg = ExperimentConfig::from_file(&config_path("configs/germanium_pu239.json")).unwrap();
        assert_eq!(cfg.reactor.isotope, "Pu239");
        assert!(cfg.background.is_none());
        assert_eq!(cfg.quadrature, QuadratureConfig::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ExperimentConfig::from_file(&config_path("configs/does_not_exist.json"))
            .unwrap_err();
        assert!(matches!(err, CevnsError::Io(_)));
    }

    #[test]
    fn test_quadrature_defaults_fill_in() {
        let json = r#"{
            "name": "partial",
            "target": { "neutrons": 40, "protons": 32 },
            "detector": { "mass_kg": 1.0, "live_time_s": 86400.0 },
            "reactor": { "isotope": "U238", "power_mw": 3000.0, "distance_cm": 2000.0 },
            "quadrature": { "abs_tol": 1e-8 }
        }"#;
        let cfg: ExperimentConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.quadrature.abs_tol, 1e-8);
        assert_eq!(cfg.quadrature.max_subdivisions, 200);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_background_length_mismatch() {
        let mut cfg = ExperimentConfig::default();
        cfg.background = Some(BackgroundConfig {
            recoil_kev: vec![0.0, 1.0, 2.0],
            rate: vec![1.0, 1.0],
        });
        match cfg.validate().unwrap_err() {
            CevnsError::ConfigError(msg) => assert!(msg.contains("length mismatch")),
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut cfg = ExperimentConfig::default();
        cfg.reactor.distance_cm = f64::NAN;
        match cfg.validate().unwrap_err() {
            CevnsError::ConfigError(msg) => assert!(msg.contains("reactor.distance_cm")),
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = ExperimentConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: ExperimentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.name, cfg2.name);
        assert_eq!(cfg.reactor.isotope, cfg2.reactor.isotope);
        assert_eq!(cfg.quadrature, cfg2.quadrature);
    }
}
