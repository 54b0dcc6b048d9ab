//! # Opal Materials
//!
//! Wavelength-dependent optical material models. All materials implement the
//! [`OpticalMaterial`](material::OpticalMaterial) trait, which provides the
//! real refractive index $n(\lambda)$, the extinction coefficient
//! $k(\lambda)$ and the Abbe number. Wavelengths are in microns throughout.
//!
//! ## Material kinds
//!
//! | Kind | Type | Behaviour |
//! |------|------|-----------|
//! | Constant | [`ideal::IdealMaterial`] | Fixed $n$, $k$ at every wavelength |
//! | Mirror | [`ideal::Mirror`] | $n = -1$, $k = 0$ |
//! | Record-backed | [`record::MaterialFile`] | Analytic formula or tabulated data |
//! | Catalog-resolved | [`catalog::Material`] | Looked up by name and reference |
//!
//! ## Dispersion models
//!
//! Record-backed materials evaluate one of the nine analytic dispersion
//! formulas of the refractiveindex.info convention ([`dispersion`]) or
//! interpolate tabulated $(\lambda, n)$ / $(\lambda, k)$ measurements
//! ([`interp`]). Name resolution against a catalog of records lives in
//! [`catalog`]; a small embedded reference catalog is in [`glasses`].

pub mod abbe;
pub mod catalog;
pub mod dispersion;
pub mod glasses;
pub mod ideal;
pub mod interp;
pub mod material;
pub mod record;

pub use catalog::{Catalog, CatalogEntry, Material};
pub use dispersion::DispersionFormula;
pub use ideal::{IdealMaterial, Mirror};
pub use material::{MaterialError, OpticalMaterial};
pub use record::{MaterialFile, MaterialRecord};
