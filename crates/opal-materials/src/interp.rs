//! Piecewise-linear interpolation over tabulated spectral data.
//!
//! Tabulated records carry discrete $(\lambda, \text{value})$ measurements;
//! queries rarely land on a sample, so intermediate wavelengths are obtained
//! by linear interpolation between the bracketing samples. Queries outside
//! the tabulated span extrapolate linearly from the nearest edge segment
//! rather than failing: catalog test wavelengths routinely fall slightly
//! outside a dataset's span, and a hard error there would make whole records
//! unusable. A query at a sample's own wavelength returns the stored value
//! with no arithmetic.

use crate::material::MaterialError;

/// Interpolate a tabulated series at a wavelength (µm).
///
/// # Arguments
/// * `series` — $(\lambda/\mu m, \text{value})$ samples, strictly increasing
///   in wavelength.
/// * `wavelength_um` — Query wavelength (µm).
///
/// Fails with [`MaterialError::NoData`] when the series is empty or its
/// wavelengths are not strictly increasing. Both conditions are re-checked
/// on every call because record fields are mutable value containers.
pub fn interpolate(series: &[(f64, f64)], wavelength_um: f64) -> Result<f64, MaterialError> {
    if series.is_empty() {
        return Err(MaterialError::NoData("empty tabulated series".into()));
    }
    for pair in series.windows(2) {
        if pair[1].0 <= pair[0].0 {
            return Err(MaterialError::NoData(format!(
                "tabulated series not strictly increasing near {} um",
                pair[1].0
            )));
        }
    }
    if let Some(&(_, value)) = series.iter().find(|&&(x, _)| x == wavelength_um) {
        return Ok(value);
    }
    if series.len() == 1 {
        // A lone sample defines a constant.
        return Ok(series[0].1);
    }

    let x = wavelength_um;
    let last = series.len() - 1;
    let lo = if x <= series[0].0 {
        0
    } else if x >= series[last].0 {
        last - 1
    } else {
        series.partition_point(|&(xi, _)| xi < x) - 1
    };
    let (x0, y0) = series[lo];
    let (x1, y1) = series[lo + 1];
    Ok(y0 + (x - x0) * (y1 - y0) / (x1 - x0))
}
