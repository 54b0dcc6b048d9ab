//! Integration test: analytic dispersion formulas against reference values.
//!
//! Each of the nine formula shapes is evaluated with a published or
//! representative coefficient set and compared against independently
//! computed index and Abbe values. Every case also forces an invalid
//! coefficient vector through the record's public field afterwards, to
//! confirm arity is re-validated on every call rather than cached at
//! construction.

use approx::assert_abs_diff_eq;

use opal_materials::{DispersionFormula, MaterialError, MaterialFile, MaterialRecord, OpticalMaterial};

fn material(formula: DispersionFormula, coefficients: Vec<f64>) -> MaterialFile {
    MaterialFile::new(MaterialRecord::analytic(formula, coefficients))
}

fn assert_invalid_after_mutation(mut file: MaterialFile, bad: Vec<f64>) {
    file.record.coefficients = bad;
    assert!(matches!(
        file.n(1.0),
        Err(MaterialError::InvalidCoefficients { .. })
    ));
    // abbe() samples n and must surface the same failure, not mask it.
    assert!(matches!(
        file.abbe(),
        Err(MaterialError::InvalidCoefficients { .. })
    ));
}

#[test]
fn formula_1_sellmeier_fused_silica() {
    // Malitson (1965).
    let silica = material(
        DispersionFormula::Sellmeier,
        vec![0.0, 0.6961663, 0.0684043, 0.4079426, 0.1162414, 0.8974794, 9.896161],
    );
    assert_abs_diff_eq!(silica.n(0.21).unwrap(), 1.538357620490538, epsilon = 1e-10);
    assert_abs_diff_eq!(silica.n(0.5).unwrap(), 1.4623264867003778, epsilon = 1e-10);
    assert_abs_diff_eq!(silica.n(1.0).unwrap(), 1.450417409406875, epsilon = 1e-10);
    assert_abs_diff_eq!(silica.n(3.0).unwrap(), 1.4192465313713454, epsilon = 1e-10);
    assert_abs_diff_eq!(silica.abbe().unwrap(), 67.82143198289538, epsilon = 1e-10);
    assert!(matches!(silica.k(1.0), Err(MaterialError::NoData(_))));
    assert_invalid_after_mutation(silica, vec![1.0, 0.58, 0.12, 0.87]);
}

#[test]
fn formula_2_sellmeier2_n_bk7() {
    // Schott datasheet coefficients.
    let bk7 = material(
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
    );
    assert_abs_diff_eq!(bk7.n(0.4).unwrap(), 1.5308485382492993, epsilon = 1e-10);
    assert_abs_diff_eq!(bk7.n(0.5).unwrap(), 1.5214144757734767, epsilon = 1e-10);
    assert_abs_diff_eq!(bk7.n(0.8).unwrap(), 1.5107762314198743, epsilon = 1e-10);
    assert_abs_diff_eq!(bk7.n(1.2).unwrap(), 1.5049165637082969, epsilon = 1e-10);
    assert_abs_diff_eq!(bk7.abbe().unwrap(), 64.16733623749982, epsilon = 1e-10);
    assert_invalid_after_mutation(bk7, vec![1.0, 0.58, 0.12, 0.87]);
}

#[test]
fn formula_3_polynomial() {
    let glass = material(
        DispersionFormula::Polynomial,
        vec![
            2.74984626,
            -0.01090213,
            2.0,
            0.02158198,
            -2.0,
            0.00058884,
            -4.0,
            1.2993e-05,
            -6.0,
        ],
    );
    assert_abs_diff_eq!(glass.n(0.4).unwrap(), 1.7056268571527082, epsilon = 1e-10);
    assert_abs_diff_eq!(glass.n(0.5).unwrap(), 1.686327856468012, epsilon = 1e-10);
    assert_abs_diff_eq!(glass.n(0.6).unwrap(), 1.6765122848477034, epsilon = 1e-10);
    assert_abs_diff_eq!(glass.abbe().unwrap(), 44.193912495587945, epsilon = 1e-10);
    assert_invalid_after_mutation(glass, vec![1.0, 0.58, 0.12, 0.87]);
}

#[test]
fn formula_4_refractiveindex_info() {
    let crystal = material(
        DispersionFormula::RefractiveIndexInfo,
        vec![
            2.3818, 0.0289495, 0.0, 0.028, 1.0, 0.0, 1.0, 0.01, 1.0, -0.0040817, 2.0,
        ],
    );
    assert_abs_diff_eq!(crystal.n(0.4).unwrap(), 1.6125945931756667, epsilon = 1e-10);
    assert_abs_diff_eq!(crystal.n(0.6).unwrap(), 1.5708366806121592, epsilon = 1e-10);
    assert_abs_diff_eq!(crystal.n(1.5).unwrap(), 1.5445532534871649, epsilon = 1e-10);
    assert_abs_diff_eq!(crystal.abbe().unwrap(), 26.583307357681093, epsilon = 1e-10);
    assert_invalid_after_mutation(crystal, vec![1.0, 0.58, 0.12, 0.87]);
}

#[test]
fn formula_5_cauchy() {
    let fluoride = material(
        DispersionFormula::Cauchy,
        vec![1.47698, 0.0068972, -2.0, -7.9e-05, -4.0],
    );
    assert_abs_diff_eq!(fluoride.n(0.4).unwrap(), 1.5170015625, epsilon = 1e-10);
    assert_abs_diff_eq!(fluoride.n(1.0).unwrap(), 1.4837982, epsilon = 1e-10);
    assert_abs_diff_eq!(fluoride.n(5.0).unwrap(), 1.4772557616, epsilon = 1e-10);
    assert_abs_diff_eq!(fluoride.abbe().unwrap(), 40.738651644676054, epsilon = 1e-10);
    assert_invalid_after_mutation(fluoride, vec![1.0, 0.58, 0.12, 0.87]);
}

#[test]
fn formula_6_gases() {
    // Ciddor (1996) standard air.
    let air = material(
        DispersionFormula::Gases,
        vec![0.0, 0.05792105, 238.0185, 0.00167917, 57.362],
    );
    assert_abs_diff_eq!(air.n(0.4).unwrap(), 1.0002827618234822, epsilon = 1e-10);
    assert_abs_diff_eq!(air.n(1.0).unwrap(), 1.0002741661312147, epsilon = 1e-10);
    assert_abs_diff_eq!(air.abbe().unwrap(), 89.30126923574677, epsilon = 1e-10);
    assert!(matches!(air.k(1.0), Err(MaterialError::NoData(_))));
    assert_invalid_after_mutation(air, vec![1.0, 0.58, 0.12, 0.87]);
}

#[test]
fn formula_7_herzberger() {
    let infrared = material(
        DispersionFormula::Herzberger,
        vec![1.0, 0.58, 0.12, 0.87, 0.21, 0.81],
    );
    assert_abs_diff_eq!(infrared.n(0.4).unwrap(), 12.428885495537186, epsilon = 1e-10);
    assert_abs_diff_eq!(infrared.n(1.0).unwrap(), 3.6137209774932684, epsilon = 1e-10);
    assert_abs_diff_eq!(infrared.n(1.5).unwrap(), 13.532362213339358, epsilon = 1e-10);
    assert_abs_diff_eq!(infrared.abbe().unwrap(), 1.0836925045533496, epsilon = 1e-10);
    assert_invalid_after_mutation(infrared, vec![1.0, 0.58]);
}

#[test]
fn formula_8_retro() {
    let halide = material(
        DispersionFormula::Retro,
        vec![0.4623, 0.1030, 0.090, -0.00064],
    );
    assert_abs_diff_eq!(halide.n(0.5).unwrap(), 2.441146422464663, epsilon = 1e-10);
    assert_abs_diff_eq!(halide.n(0.55).unwrap(), 2.3806172110309745, epsilon = 1e-10);
    assert_abs_diff_eq!(halide.n(0.65).unwrap(), 2.3171890500080083, epsilon = 1e-10);
    assert_abs_diff_eq!(halide.abbe().unwrap(), 8.988768496544477, epsilon = 1e-10);
    assert_invalid_after_mutation(halide, vec![1.0, 0.58, 0.12]);
}

#[test]
fn formula_9_exotic() {
    let organic = material(
        DispersionFormula::Exotic,
        vec![2.4247, 0.0155, 0.0142, 0.0916, 0.1719, 0.0962],
    );
    assert_abs_diff_eq!(organic.n(0.3).unwrap(), 1.6532954458418003, epsilon = 1e-10);
    assert_abs_diff_eq!(organic.n(0.6).unwrap(), 1.615499689730136, epsilon = 1e-10);
    assert_abs_diff_eq!(organic.n(1.0).unwrap(), 1.5929310939619585, epsilon = 1e-10);
    assert_abs_diff_eq!(organic.abbe().unwrap(), 43.28511621780404, epsilon = 1e-10);
    assert_invalid_after_mutation(organic, vec![1.0, 0.58, 0.12, 0.87]);
}
