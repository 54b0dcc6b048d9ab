//! Material catalog and name resolution.
//!
//! Resolution is a pure filter-then-rank pipeline over an enumerable,
//! read-only collection of `(name, reference, record)` entries: filter by
//! name, optionally narrow by reference, then apply a deterministic
//! disambiguation policy. It never mutates the catalog and is idempotent,
//! so concurrent readers need no coordination.
//!
//! ## Disambiguation policy
//!
//! When several entries share a queried name and robust search is enabled,
//! the entry flagged as preferred (the canonical dataset for that name)
//! wins. With no preferred candidate the first entry in catalog order wins;
//! with more than one the query stays ambiguous. Without robust search any
//! multiple match is an error.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::glasses;
use crate::material::{MaterialError, OpticalMaterial};
use crate::record::{MaterialFile, MaterialRecord};

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Material name as queried, e.g. `"N-BK7"`.
    pub name: String,
    /// Free-form source identifier: manufacturer, dataset or publication.
    pub reference: String,
    /// Canonical dataset for this name; robust resolution prefers it.
    #[serde(default)]
    pub preferred: bool,
    pub record: MaterialRecord,
}

impl CatalogEntry {
    pub fn new(
        name: impl Into<String>,
        reference: impl Into<String>,
        preferred: bool,
        record: MaterialRecord,
    ) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
            preferred,
            record,
        }
    }
}

/// An in-memory, read-only-after-construction material catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The embedded reference catalog, built once and shared.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(glasses::reference_catalog)
    }

    /// Resolve a name (and optional reference) query to exactly one entry.
    ///
    /// # Arguments
    /// * `name` — Material name, matched case-insensitively and exactly.
    /// * `reference` — Optional source narrowing; matched case-insensitively
    ///   as a substring of the entry's reference string.
    /// * `robust` — Apply the disambiguation policy instead of failing on
    ///   multiple matches.
    pub fn resolve(
        &self,
        name: &str,
        reference: Option<&str>,
        robust: bool,
    ) -> Result<&CatalogEntry, MaterialError> {
        let mut candidates: Vec<&CatalogEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.name.eq_ignore_ascii_case(name))
            .collect();
        if candidates.is_empty() {
            return Err(MaterialError::NotFound(name.to_string()));
        }

        if let Some(wanted) = reference {
            let needle = wanted.to_ascii_lowercase();
            candidates.retain(|entry| entry.reference.to_ascii_lowercase().contains(&needle));
            if candidates.is_empty() {
                return Err(MaterialError::NotFound(format!("{name} ({wanted})")));
            }
        }

        if candidates.len() == 1 {
            return Ok(candidates[0]);
        }
        if !robust {
            return Err(MaterialError::AmbiguousMatch {
                name: name.to_string(),
                candidates: candidates.len(),
            });
        }

        let preferred: Vec<&CatalogEntry> = candidates
            .iter()
            .copied()
            .filter(|entry| entry.preferred)
            .collect();
        match preferred.len() {
            1 => Ok(preferred[0]),
            // No canonical dataset: catalog order is the final tie-break.
            0 => Ok(candidates[0]),
            n => Err(MaterialError::AmbiguousMatch {
                name: name.to_string(),
                candidates: n,
            }),
        }
    }
}

/// A material resolved by name against a catalog.
///
/// Resolution happens at construction; the record is cloned out of the
/// catalog so the material owns its data exclusively afterwards.
#[derive(Debug, Clone)]
pub struct Material {
    name: String,
    reference: String,
    file: MaterialFile,
}

impl Material {
    /// Resolve `name` against the embedded reference catalog with robust
    /// search enabled.
    pub fn new(name: &str) -> Result<Self, MaterialError> {
        Self::from_catalog(Catalog::builtin(), name, None, true)
    }

    /// Resolve against the embedded reference catalog with full control
    /// over reference narrowing and robustness.
    pub fn with_options(
        name: &str,
        reference: Option<&str>,
        robust: bool,
    ) -> Result<Self, MaterialError> {
        Self::from_catalog(Catalog::builtin(), name, reference, robust)
    }

    /// Resolve against a caller-supplied catalog.
    pub fn from_catalog(
        catalog: &Catalog,
        name: &str,
        reference: Option<&str>,
        robust: bool,
    ) -> Result<Self, MaterialError> {
        let entry = catalog.resolve(name, reference, robust)?;
        Ok(Self {
            name: entry.name.clone(),
            reference: entry.reference.clone(),
            file: MaterialFile::new(entry.record.clone()),
        })
    }

    /// Resolved catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference string of the entry that won resolution.
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

impl OpticalMaterial for Material {
    fn n(&self, wavelength_um: f64) -> Result<f64, MaterialError> {
        self.file.n(wavelength_um)
    }

    fn k(&self, wavelength_um: f64) -> Result<f64, MaterialError> {
        self.file.k(wavelength_um)
    }
}
