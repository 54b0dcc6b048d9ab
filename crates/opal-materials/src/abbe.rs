//! Abbe number computation.
//!
//! The Abbe number $V_d = (n_d - 1)/(n_F - n_C)$ summarises a material's
//! dispersion from three spectral-line index samples. This module is a pure
//! aggregator: it samples a caller-supplied $n(\lambda)$ three times and
//! propagates whatever error that closure raises.

use crate::material::MaterialError;

/// Helium d line (µm).
pub const D_LINE_UM: f64 = 0.5875618;
/// Hydrogen F line (µm).
pub const F_LINE_UM: f64 = 0.4861327;
/// Hydrogen C line (µm).
pub const C_LINE_UM: f64 = 0.6562725;

/// Compute the Abbe number from an index function.
pub fn abbe_number<F>(mut n: F) -> Result<f64, MaterialError>
where
    F: FnMut(f64) -> Result<f64, MaterialError>,
{
    let n_d = n(D_LINE_UM)?;
    let n_f = n(F_LINE_UM)?;
    let n_c = n(C_LINE_UM)?;
    Ok((n_d - 1.0) / (n_f - n_c))
}
