//! Parsed material records and the record-backed material.
//!
//! A [`MaterialRecord`] is the structured form of one catalog entry as the
//! out-of-scope loader produces it: a formula identifier, a coefficient
//! vector and optional tabulated series. Which field is authoritative is
//! determined solely by the formula identifier; the others are ignored even
//! if present.

use serde::{Deserialize, Serialize};

use crate::dispersion::DispersionFormula;
use crate::interp;
use crate::material::{MaterialError, OpticalMaterial};

/// One parsed dispersion record.
///
/// Fields are plain public values with no invariant enforced at write time.
/// Test harnesses deliberately mutate `coefficients` or the tabulated series
/// to force error paths, so every evaluation re-validates from scratch
/// instead of trusting a construction-time verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Which evaluation path applies.
    pub formula: DispersionFormula,
    /// Formula-specific coefficients; length is validated lazily per call.
    #[serde(default)]
    pub coefficients: Vec<f64>,
    /// Tabulated $(\lambda/\mu m, n)$ samples, strictly increasing in λ.
    #[serde(default)]
    pub tabulated_n: Option<Vec<(f64, f64)>>,
    /// Tabulated $(\lambda/\mu m, k)$ samples, strictly increasing in λ.
    #[serde(default)]
    pub tabulated_k: Option<Vec<(f64, f64)>>,
}

impl MaterialRecord {
    /// Record backed by an analytic formula.
    pub fn analytic(formula: DispersionFormula, coefficients: Vec<f64>) -> Self {
        Self {
            formula,
            coefficients,
            tabulated_n: None,
            tabulated_k: None,
        }
    }

    /// Record backed by tabulated measurements. The formula identifier is
    /// `tabulated nk` when a k series is supplied, `tabulated n` otherwise.
    pub fn tabulated(tabulated_n: Vec<(f64, f64)>, tabulated_k: Option<Vec<(f64, f64)>>) -> Self {
        let formula = if tabulated_k.is_some() {
            DispersionFormula::TabulatedNk
        } else {
            DispersionFormula::TabulatedN
        };
        Self {
            formula,
            coefficients: Vec::new(),
            tabulated_n: Some(tabulated_n),
            tabulated_k,
        }
    }

    /// Real refractive index at a wavelength (µm), dispatched on the
    /// record's formula identifier.
    pub fn index(&self, wavelength_um: f64) -> Result<f64, MaterialError> {
        match self.formula {
            DispersionFormula::TabulatedN | DispersionFormula::TabulatedNk => {
                let series = self
                    .tabulated_n
                    .as_deref()
                    .ok_or_else(|| MaterialError::NoData("record has no tabulated n data".into()))?;
                interp::interpolate(series, wavelength_um)
            }
            formula => formula.index(&self.coefficients, wavelength_um),
        }
    }

    /// Extinction coefficient at a wavelength (µm), from the tabulated k
    /// series. Most analytic records provide n only and report `NoData`.
    pub fn extinction(&self, wavelength_um: f64) -> Result<f64, MaterialError> {
        let series = self
            .tabulated_k
            .as_deref()
            .ok_or_else(|| MaterialError::NoData("record has no tabulated k data".into()))?;
        interp::interpolate(series, wavelength_um)
    }
}

/// A material backed directly by one owned record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialFile {
    /// The owned record. Public so harnesses can force error states; the
    /// evaluation paths re-validate on every query.
    pub record: MaterialRecord,
}

impl MaterialFile {
    pub fn new(record: MaterialRecord) -> Self {
        Self { record }
    }
}

impl OpticalMaterial for MaterialFile {
    fn n(&self, wavelength_um: f64) -> Result<f64, MaterialError> {
        self.record.index(wavelength_um)
    }

    fn k(&self, wavelength_um: f64) -> Result<f64, MaterialError> {
        self.record.extinction(wavelength_um)
    }
}
