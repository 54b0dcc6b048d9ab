//! Analytic dispersion formulas.
//!
//! The nine formula shapes of the refractiveindex.info database convention,
//! plus the two tabulated shapes that records may declare instead. Each
//! analytic shape is a closed-form function of the wavelength (µm) and a
//! formula-specific coefficient vector:
//!
//! | Identifier | Name | Form | Coefficient count |
//! |------------|------|------|-------------------|
//! | `formula 1` | Sellmeier | $n^2 = 1 + c_0 + \sum c_i \lambda^2/(\lambda^2 - c_{i+1}^2)$ | odd |
//! | `formula 2` | Sellmeier-2 | $n^2 = 1 + c_0 + \sum c_i \lambda^2/(\lambda^2 - c_{i+1})$ | odd |
//! | `formula 3` | Polynomial | $n^2 = c_0 + \sum c_i \lambda^{c_{i+1}}$ | odd |
//! | `formula 4` | RefractiveIndex.INFO | two resonance terms + power series | odd, ≥ 9 |
//! | `formula 5` | Cauchy | $n = c_0 + \sum c_i \lambda^{c_{i+1}}$ | odd |
//! | `formula 6` | Gases | $n = 1 + c_0 + \sum c_i/(c_{i+1} - \lambda^{-2})$ | odd |
//! | `formula 7` | Herzberger | $n = c_0 + c_1 L + c_2 L^2 + \sum_{i\ge3} c_i \lambda^{2(i-2)}$ | ≥ 3 |
//! | `formula 8` | Retro | $r = c_0 + c_1\lambda^2/(\lambda^2 - c_2) + c_3\lambda^2$ | 4 |
//! | `formula 9` | Exotic | $n^2 = c_0 + c_1/(\lambda^2 - c_2) + c_3(\lambda - c_4)/((\lambda - c_4)^2 + c_5)$ | 6 |
//!
//! where $L = 1/(\lambda^2 - 0.028)$ in the Herzberger form. Coefficient
//! arity is checked on every evaluation: records are plain value containers
//! that callers may mutate after construction, so no validity verdict is
//! cached.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::material::MaterialError;

/// Closed enumeration of dispersion representations a record may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DispersionFormula {
    /// Sellmeier (`formula 1`).
    #[serde(rename = "formula 1")]
    Sellmeier,
    /// Sellmeier with pre-squared resonance terms (`formula 2`).
    #[serde(rename = "formula 2")]
    Sellmeier2,
    /// Polynomial in powers of wavelength (`formula 3`).
    #[serde(rename = "formula 3")]
    Polynomial,
    /// RefractiveIndex.INFO composite form (`formula 4`).
    #[serde(rename = "formula 4")]
    RefractiveIndexInfo,
    /// Cauchy series (`formula 5`).
    #[serde(rename = "formula 5")]
    Cauchy,
    /// Gas dispersion (`formula 6`).
    #[serde(rename = "formula 6")]
    Gases,
    /// Herzberger infrared form (`formula 7`).
    #[serde(rename = "formula 7")]
    Herzberger,
    /// Retro form with an implicit Lorentz-Lorenz inversion (`formula 8`).
    #[serde(rename = "formula 8")]
    Retro,
    /// Exotic resonance form (`formula 9`).
    #[serde(rename = "formula 9")]
    Exotic,
    /// Tabulated $(\lambda, n)$ measurements; no analytic form.
    #[serde(rename = "tabulated n")]
    TabulatedN,
    /// Tabulated $(\lambda, n)$ and $(\lambda, k)$ measurements.
    #[serde(rename = "tabulated nk")]
    TabulatedNk,
}

impl DispersionFormula {
    /// Database identifier string, e.g. `"formula 2"` or `"tabulated nk"`.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Sellmeier => "formula 1",
            Self::Sellmeier2 => "formula 2",
            Self::Polynomial => "formula 3",
            Self::RefractiveIndexInfo => "formula 4",
            Self::Cauchy => "formula 5",
            Self::Gases => "formula 6",
            Self::Herzberger => "formula 7",
            Self::Retro => "formula 8",
            Self::Exotic => "formula 9",
            Self::TabulatedN => "tabulated n",
            Self::TabulatedNk => "tabulated nk",
        }
    }

    /// Whether this shape is backed by tabulated data rather than a formula.
    pub fn is_tabulated(self) -> bool {
        matches!(self, Self::TabulatedN | Self::TabulatedNk)
    }

    /// Evaluate the analytic refractive index at a wavelength (µm).
    ///
    /// Validates the coefficient arity before touching the algebra, on every
    /// call. Tabulated shapes have no analytic form and report
    /// [`MaterialError::NoData`]; record-level dispatch routes them to the
    /// interpolator instead.
    pub fn index(self, coefficients: &[f64], wavelength_um: f64) -> Result<f64, MaterialError> {
        let c = coefficients;
        let w = wavelength_um;
        let w2 = w * w;
        match self {
            Self::Sellmeier => {
                self.check_odd(c)?;
                let mut n2 = 1.0 + c[0];
                for pair in c[1..].chunks_exact(2) {
                    n2 += pair[0] * w2 / (w2 - pair[1] * pair[1]);
                }
                Ok(n2.sqrt())
            }
            Self::Sellmeier2 => {
                self.check_odd(c)?;
                let mut n2 = 1.0 + c[0];
                for pair in c[1..].chunks_exact(2) {
                    n2 += pair[0] * w2 / (w2 - pair[1]);
                }
                Ok(n2.sqrt())
            }
            Self::Polynomial => {
                self.check_odd(c)?;
                let mut n2 = c[0];
                for pair in c[1..].chunks_exact(2) {
                    n2 += pair[0] * w.powf(pair[1]);
                }
                Ok(n2.sqrt())
            }
            Self::RefractiveIndexInfo => {
                if c.len() < 9 || c.len() % 2 == 0 {
                    return Err(self.arity_error(c.len()));
                }
                let mut n2 = c[0]
                    + c[1] * w.powf(c[2]) / (w2 - c[3].powf(c[4]))
                    + c[5] * w.powf(c[6]) / (w2 - c[7].powf(c[8]));
                for pair in c[9..].chunks_exact(2) {
                    n2 += pair[0] * w.powf(pair[1]);
                }
                Ok(n2.sqrt())
            }
            Self::Cauchy => {
                self.check_odd(c)?;
                let mut n = c[0];
                for pair in c[1..].chunks_exact(2) {
                    n += pair[0] * w.powf(pair[1]);
                }
                Ok(n)
            }
            Self::Gases => {
                self.check_odd(c)?;
                let inv_w2 = 1.0 / w2;
                let mut n = 1.0 + c[0];
                for pair in c[1..].chunks_exact(2) {
                    n += pair[0] / (pair[1] - inv_w2);
                }
                Ok(n)
            }
            Self::Herzberger => {
                if c.len() < 3 {
                    return Err(self.arity_error(c.len()));
                }
                let l = 1.0 / (w2 - 0.028);
                let mut n = c[0] + c[1] * l + c[2] * l * l;
                let mut power = w2;
                for &ci in &c[3..] {
                    n += ci * power;
                    power *= w2;
                }
                Ok(n)
            }
            Self::Retro => {
                if c.len() != 4 {
                    return Err(self.arity_error(c.len()));
                }
                let r = c[0] + c[1] * w2 / (w2 - c[2]) + c[3] * w2;
                Ok(((1.0 + 2.0 * r) / (1.0 - r)).sqrt())
            }
            Self::Exotic => {
                if c.len() != 6 {
                    return Err(self.arity_error(c.len()));
                }
                let shifted = w - c[4];
                let n2 = c[0] + c[1] / (w2 - c[2]) + c[3] * shifted / (shifted * shifted + c[5]);
                Ok(n2.sqrt())
            }
            Self::TabulatedN | Self::TabulatedNk => Err(MaterialError::NoData(format!(
                "'{self}' records have no analytic dispersion form"
            ))),
        }
    }

    // The series formulas consume a leading constant plus (amplitude,
    // resonance/exponent) pairs, so any even count is malformed.
    fn check_odd(self, c: &[f64]) -> Result<(), MaterialError> {
        if c.is_empty() || c.len() % 2 == 0 {
            return Err(self.arity_error(c.len()));
        }
        Ok(())
    }

    fn arity_error(self, count: usize) -> MaterialError {
        MaterialError::InvalidCoefficients {
            formula: self,
            count,
        }
    }
}

impl fmt::Display for DispersionFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for DispersionFormula {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formula 1" => Ok(Self::Sellmeier),
            "formula 2" => Ok(Self::Sellmeier2),
            "formula 3" => Ok(Self::Polynomial),
            "formula 4" => Ok(Self::RefractiveIndexInfo),
            "formula 5" => Ok(Self::Cauchy),
            "formula 6" => Ok(Self::Gases),
            "formula 7" => Ok(Self::Herzberger),
            "formula 8" => Ok(Self::Retro),
            "formula 9" => Ok(Self::Exotic),
            "tabulated n" => Ok(Self::TabulatedN),
            "tabulated nk" => Ok(Self::TabulatedNk),
            other => Err(MaterialError::UnknownFormula(other.to_string())),
        }
    }
}
