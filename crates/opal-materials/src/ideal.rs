//! Wavelength-independent materials.
//!
//! Placeholders used by optical models that do not need dispersion: a
//! constant-index medium and the mirror convention.

use serde::{Deserialize, Serialize};

use crate::material::{MaterialError, OpticalMaterial};

/// A material with constant $n$ and $k$ at every wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealMaterial {
    n: f64,
    k: f64,
}

impl IdealMaterial {
    /// Lossless constant-index material ($k = 0$).
    pub fn new(n: f64) -> Self {
        Self { n, k: 0.0 }
    }

    /// Constant-index material with a fixed extinction coefficient.
    pub fn with_extinction(n: f64, k: f64) -> Self {
        Self { n, k }
    }
}

impl OpticalMaterial for IdealMaterial {
    fn n(&self, _wavelength_um: f64) -> Result<f64, MaterialError> {
        Ok(self.n)
    }

    fn k(&self, _wavelength_um: f64) -> Result<f64, MaterialError> {
        Ok(self.k)
    }
}

/// An ideal mirror: $n = -1$ at every wavelength.
///
/// The negative index is the sign convention for propagation reversal at a
/// reflective surface, not a physical material property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mirror;

impl Mirror {
    pub fn new() -> Self {
        Self
    }
}

impl OpticalMaterial for Mirror {
    fn n(&self, _wavelength_um: f64) -> Result<f64, MaterialError> {
        Ok(-1.0)
    }

    fn k(&self, _wavelength_um: f64) -> Result<f64, MaterialError> {
        Ok(0.0)
    }
}
