// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor CEvNS — Adaptive Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Globally adaptive Gauss–Kronrod quadrature.
//!
//! QUADPACK QAG scheme with the 7-point Gauss / 15-point Kronrod pair:
//!   1. evaluate every initial segment with K15 and estimate |K15 − G7|,
//!   2. bisect the segment with the largest error estimate,
//!   3. stop once Σ err ≤ max(abs_tol, rel_tol·|Σ I|).
//!
//! Reaching `max_subdivisions` before tolerance is an error, never a
//! silently returned partial sum.

pub use cevns_types::config::QuadratureConfig;
use cevns_types::error::{CevnsError, CevnsResult};

/// Kronrod abscissae on [-1, 1], non-negative half (QUADPACK qk15).
/// Odd indices are the 7-point Gauss abscissae.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.0,
];

/// Kronrod weights matching `XGK`.
const WGK: [f64; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];

/// Gauss weights for XGK[1], XGK[3], XGK[5], XGK[7].
const WG: [f64; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];

/// Integrand evaluations per K15 rule.
const EVALS_PER_RULE: usize = 15;

/// Outcome of a converged integration.
#[derive(Debug, Clone, Copy)]
pub struct QuadratureResult {
    pub value: f64,
    /// Summed |K15 − G7| over the final partition.
    pub abs_error: f64,
    pub evaluations: usize,
    pub subdivisions: usize,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

fn check_finite(x: f64, fx: f64) -> CevnsResult<f64> {
    if fx.is_finite() {
        Ok(fx)
    } else {
        Err(CevnsError::Domain(format!(
            "integrand is non-finite at x = {x}: {fx}"
        )))
    }
}

/// Apply the K15/G7 pair on [a, b]. Returns (Kronrod estimate, |K − G|).
pub fn gauss_kronrod_15<F>(f: &F, a: f64, b: f64) -> CevnsResult<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let f_center = check_finite(center, f(center))?;
    let mut kronrod = WGK[7] * f_center;
    let mut gauss = WG[3] * f_center;

    for j in 0..7 {
        let dx = half * XGK[j];
        let x1 = center - dx;
        let x2 = center + dx;
        let pair = check_finite(x1, f(x1))? + check_finite(x2, f(x2))?;
        kronrod += WGK[j] * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    let value = kronrod * half;
    let error = ((kronrod - gauss) * half).abs();
    Ok((value, error))
}

/// Integrate `f` over [a, b].
pub fn integrate_adaptive<F>(
    f: F,
    a: f64,
    b: f64,
    config: &QuadratureConfig,
) -> CevnsResult<QuadratureResult>
where
    F: Fn(f64) -> f64,
{
    integrate_with_breakpoints(f, &[a, b], config)
}

/// Integrate `f` from `points[0]` to `points[last]`, with the interior
/// points as the initial partition.
///
/// `points` must be finite and non-decreasing. Zero-width segments are
/// dropped; an empty range integrates to exactly 0.
pub fn integrate_with_breakpoints<F>(
    f: F,
    points: &[f64],
    config: &QuadratureConfig,
) -> CevnsResult<QuadratureResult>
where
    F: Fn(f64) -> f64,
{
    if points.len() < 2 {
        return Err(CevnsError::Domain(format!(
            "quadrature needs at least 2 points, got {}",
            points.len()
        )));
    }
    if points.iter().any(|p| !p.is_finite()) {
        return Err(CevnsError::Domain(
            "quadrature limits must be finite".to_string(),
        ));
    }
    if points.windows(2).any(|w| w[1] < w[0]) {
        return Err(CevnsError::Domain(
            "quadrature breakpoints must be non-decreasing".to_string(),
        ));
    }

    let mut segments: Vec<Segment> = Vec::with_capacity(points.len() + config.max_subdivisions);
    let mut evaluations = 0usize;
    for w in points.windows(2) {
        if w[1] > w[0] {
            let (value, error) = gauss_kronrod_15(&f, w[0], w[1])?;
            evaluations += EVALS_PER_RULE;
            segments.push(Segment {
                a: w[0],
                b: w[1],
                value,
                error,
            });
        }
    }

    let mut subdivisions = 0usize;
    loop {
        let value: f64 = segments.iter().map(|s| s.value).sum();
        let abs_error: f64 = segments.iter().map(|s| s.error).sum();
        let tolerance = config.abs_tol.max(config.rel_tol * value.abs());

        if abs_error <= tolerance {
            return Ok(QuadratureResult {
                value,
                abs_error,
                evaluations,
                subdivisions,
            });
        }

        if subdivisions >= config.max_subdivisions {
            tracing::warn!(
                subdivisions,
                abs_error,
                tolerance,
                "adaptive quadrature hit subdivision limit"
            );
            return Err(CevnsError::QuadratureDiverged {
                subdivisions,
                abs_error,
                tolerance,
            });
        }

        // Non-empty: tolerance > 0 would have returned on an empty partition.
        let worst = segments
            .iter()
            .enumerate()
            .max_by(|(_, s1), (_, s2)| s1.error.total_cmp(&s2.error))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let seg = segments[worst];
        let mid = 0.5 * (seg.a + seg.b);

        // Segment no longer resolvable in f64.
        if mid <= seg.a || mid >= seg.b {
            return Err(CevnsError::QuadratureDiverged {
                subdivisions,
                abs_error,
                tolerance,
            });
        }

        let (left_value, left_error) = gauss_kronrod_15(&f, seg.a, mid)?;
        let (right_value, right_error) = gauss_kronrod_15(&f, mid, seg.b)?;
        evaluations += 2 * EVALS_PER_RULE;
        subdivisions += 1;

        segments[worst] = Segment {
            a: seg.a,
            b: mid,
            value: left_value,
            error: left_error,
        };
        segments.push(Segment {
            a: mid,
            b: seg.b,
            value: right_value,
            error: right_error,
        });
    }
}
