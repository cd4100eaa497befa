use thiserror::Error;

#[derive(Error, Debug)]
pub enum CevnsError {
    #[error("Domain error: {0}")]
    Domain(String),

    #[error(
        "Quadrature did not converge after {subdivisions} subdivisions: \
         error estimate {abs_error:e} exceeds tolerance {tolerance:e}"
    )]
    QuadratureDiverged {
        subdivisions: usize,
        abs_error: f64,
        tolerance: f64,
    },

    #[error("Cross-section integral failed at T = {recoil_kev} keV: {source}")]
    Integration {
        recoil_kev: f64,
        #[source]
        source: Box<CevnsError>,
    },

    #[error("Shape mismatch: cannot broadcast {left} against {right} elements")]
    ShapeMismatch { left: usize, right: usize },

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CevnsResult<T> = Result<T, CevnsError>;
