//! Embedded reference glass catalog.
//!
//! A small set of widely used optical materials compiled into the library,
//! so name-based construction works without any on-disk database. Formula
//! coefficients follow the refractiveindex.info conventions with
//! wavelengths in microns.
//!
//! | Name | Reference | Model |
//! |------|-----------|-------|
//! | N-BK7 | schott | Sellmeier-2 + tabulated k |
//! | BK7 | schott-obsolete, schott-1992 | Sellmeier-2 (legacy datasets) |
//! | N-SF11 | schott | Sellmeier-2 |
//! | F2 | schott | Sellmeier-2 |
//! | Fused silica | malitson | Sellmeier |
//! | Air | ciddor | Gases |
//! | YAG | bond | Tabulated n |

use crate::catalog::{Catalog, CatalogEntry};
use crate::dispersion::DispersionFormula;
use crate::record::MaterialRecord;

/// Build the embedded reference catalog.
///
/// Callers normally reach this through `Catalog::builtin()`, which
/// constructs it once and shares it.
pub fn reference_catalog() -> Catalog {
    Catalog::new(vec![
        n_bk7(),
        bk7_obsolete(),
        bk7_1992(),
        n_sf11(),
        f2(),
        fused_silica(),
        air(),
        yag(),
    ])
}

/// N-BK7 borosilicate crown, the workhorse visible-band glass.
///
/// Sellmeier-2 coefficients and transmission-derived k values from the
/// Schott datasheet.
fn n_bk7() -> CatalogEntry {
    let record = MaterialRecord {
        formula: DispersionFormula::Sellmeier2,
        coefficients: vec![
            0.0,
            1.03961212,
            0.00600069867,
            0.231792344,
            0.0200179144,
            1.01046945,
            103.560653,
        ],
        tabulated_n: None,
        // (λ/µm, k)
        tabulated_k: Some(vec![
            (0.40, 9.3872e-09),
            (0.45, 5.0937e-09),
            (0.50, 9.5781e-09),
            (0.55, 7.7636e-09),
            (0.60, 6.1362e-09),
            (0.70, 8.0408e-09),
            (0.80, 1.0187e-08),
            (1.06, 1.5636e-08),
            (2.00, 1.2109e-07),
            (2.50, 1.8438e-06),
        ]),
    };
    CatalogEntry::new("N-BK7", "schott", true, record)
}

/// Legacy BK7 (lead-bearing predecessor of N-BK7), canonical dataset.
fn bk7_obsolete() -> CatalogEntry {
    CatalogEntry::new(
        "BK7",
        "schott-obsolete",
        true,
        MaterialRecord::analytic(
            DispersionFormula::Sellmeier2,
            vec![
                0.0,
                1.03961212,
                0.00600069867,
                0.231792344,
                0.0200179144,
                1.01046945,
                103.560653,
            ],
        ),
    )
}

/// Legacy BK7 from the 1992 catalog revision; kept for tolerancing old
/// prescriptions.
fn bk7_1992() -> CatalogEntry {
    CatalogEntry::new(
        "BK7",
        "schott-1992",
        false,
        MaterialRecord::analytic(
            DispersionFormula::Sellmeier2,
            vec![
                0.0, 1.03863, 0.006003, 0.23213, 0.02012, 1.01098, 103.697,
            ],
        ),
    )
}

/// N-SF11 dense flint.
fn n_sf11() -> CatalogEntry {
    CatalogEntry::new(
        "N-SF11",
        "schott",
        true,
        MaterialRecord::analytic(
            DispersionFormula::Sellmeier2,
            vec![
                0.0,
                1.73759695,
                0.013188707,
                0.313747346,
                0.0623068142,
                1.89878101,
                155.23629,
            ],
        ),
    )
}

/// F2 flint.
fn f2() -> CatalogEntry {
    CatalogEntry::new(
        "F2",
        "schott",
        true,
        MaterialRecord::analytic(
            DispersionFormula::Sellmeier2,
            vec![
                0.0,
                1.34533359,
                0.00997743871,
                0.209073176,
                0.0470450767,
                0.937357162,
                111.886764,
            ],
        ),
    )
}

/// Fused silica, Malitson (1965) Sellmeier fit, 0.21-3.71 µm.
fn fused_silica() -> CatalogEntry {
    CatalogEntry::new(
        "Fused silica",
        "malitson",
        true,
        MaterialRecord::analytic(
            DispersionFormula::Sellmeier,
            vec![
                0.0, 0.6961663, 0.0684043, 0.4079426, 0.1162414, 0.8974794, 9.896161,
            ],
        ),
    )
}

/// Standard air, Ciddor (1996) two-term gas dispersion fit.
fn air() -> CatalogEntry {
    CatalogEntry::new(
        "Air",
        "ciddor",
        true,
        MaterialRecord::analytic(
            DispersionFormula::Gases,
            vec![0.0, 0.05792105, 238.0185, 0.00167917, 57.362],
        ),
    )
}

/// Yttrium aluminium garnet, tabulated n after Bond (1965).
fn yag() -> CatalogEntry {
    CatalogEntry::new(
        "YAG",
        "bond",
        true,
        MaterialRecord::tabulated(
            vec![
                (0.40, 1.8650),
                (0.45, 1.8532),
                (0.50, 1.8450),
                (0.55, 1.8391),
                (0.60, 1.8347),
                (0.70, 1.8285),
                (0.80, 1.8245),
                (0.90, 1.8216),
                (1.00, 1.8197),
                (1.50, 1.8121),
                (2.00, 1.8035),
                (2.50, 1.7938),
                (3.00, 1.7855),
                (4.00, 1.7607),
            ],
            None,
        ),
    )
}
