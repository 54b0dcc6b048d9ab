//! Material trait and error type.
//!
//! [`OpticalMaterial`] is the entire surface downstream optics code (ray
//! tracing, optimisation variables, tolerancing) is allowed to depend on.
//! Consumers never inspect record internals; they only see $n(\lambda)$,
//! $k(\lambda)$ and the derived Abbe number.

use num_complex::Complex64;
use thiserror::Error;

use crate::abbe;
use crate::dispersion::DispersionFormula;

/// Errors from material evaluation and catalog resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialError {
    /// The coefficient vector does not fit the selected dispersion formula.
    #[error("invalid coefficients for {formula}: {count} value(s) supplied")]
    InvalidCoefficients {
        formula: DispersionFormula,
        count: usize,
    },

    /// The record lacks the data dimension the query needs.
    #[error("no data: {0}")]
    NoData(String),

    /// No catalog candidate matches the name/reference query.
    #[error("material not found: {0}")]
    NotFound(String),

    /// More than one catalog candidate matches and no disambiguation policy
    /// reduces them to one.
    #[error("ambiguous material query '{name}': {candidates} candidates")]
    AmbiguousMatch { name: String, candidates: usize },

    /// A formula identifier outside the supported enumeration.
    #[error("unknown dispersion formula: {0}")]
    UnknownFormula(String),
}

/// Wavelength-dependent optical properties of a material.
///
/// Wavelengths are in microns. Every query is a bounded, synchronous
/// computation over already-resident data; errors surface at the offending
/// call and are never downgraded to default values.
pub trait OpticalMaterial: Send + Sync {
    /// Real refractive index $n$ at a wavelength (µm).
    fn n(&self, wavelength_um: f64) -> Result<f64, MaterialError>;

    /// Extinction coefficient $k$ at a wavelength (µm).
    ///
    /// Fails with [`MaterialError::NoData`] when the underlying
    /// representation carries no absorption information.
    fn k(&self, wavelength_um: f64) -> Result<f64, MaterialError>;

    /// Complex refractive index $\tilde{n} = n + ik$ at a wavelength (µm).
    fn complex_index(&self, wavelength_um: f64) -> Result<Complex64, MaterialError> {
        Ok(Complex64::new(
            self.n(wavelength_um)?,
            self.k(wavelength_um)?,
        ))
    }

    /// Abbe number $V_d = (n_d - 1)/(n_F - n_C)$ from the d, F and C lines.
    ///
    /// Any error raised while sampling `n` at one of the three reference
    /// wavelengths propagates unchanged.
    fn abbe(&self) -> Result<f64, MaterialError> {
        abbe::abbe_number(|w| self.n(w))
    }
}
