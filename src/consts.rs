//! This file provides the constants that are used for matrix multiplication and color space
//! conversion. Only one RGB space is ever used, the wide-gamut D65 space that Zigbee color lights
//! describe their primaries in, so the matrices are fixed here rather than configurable. Both
//! directions are given as published instead of computing one as the inverse of the other, so that
//! results match other implementations of the same conversion digit for digit.

use rulinalg::matrix::Matrix;

lazy_static! {
    /// CIE XYZ (D65) to linear RGB.
    pub static ref XYZ_TO_LINEAR_RGB: Matrix<f64> = matrix![
        01.656492, -0.354851, -0.255038;
        -0.707196, 01.655397, 00.036152;
        00.051713, -0.121364, 01.011530
    ];

    /// Linear RGB to CIE XYZ (D65).
    pub static ref LINEAR_RGB_TO_XYZ: Matrix<f64> = matrix![
        0.664511, 0.154324, 0.162028;
        0.283881, 0.668433, 0.047685;
        0.000088, 0.072310, 0.986039
    ];
}

/// Linear values at or below this are companded with the linear segment of the sRGB curve.
pub const GAMMA_LINEAR_CUTOFF: f64 = 0.00304;

/// Companded values at or below this came out of the linear segment of the sRGB curve. This is
/// `12.92 * GAMMA_LINEAR_CUTOFF`, so the two directions split at the same point.
pub const GAMMA_COMPANDED_CUTOFF: f64 = 0.03928;

/// Multiplies a constant matrix with a 3-vector.
pub fn transform(mat: &Matrix<f64>, vals: [f64; 3]) -> [f64; 3] {
    let out = mat * vector![vals[0], vals[1], vals[2]];
    [out[0], out[1], out[2]]
}

/// sRGB companding of a single linear component.
pub fn gamma_compand(c: f64) -> f64 {
    if c <= GAMMA_LINEAR_CUTOFF {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Inverse of [`gamma_compand`].
pub fn gamma_expand(c: f64) -> f64 {
    if c > GAMMA_COMPANDED_CUTOFF {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

// only for testing: slack allowed on chromaticity round trips
#[cfg(test)]
pub const TEST_PRECISION: f64 = 1e-3;

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_matrices_are_inverse() {
        let vals = [0.25, 0.5, 0.75];
        let back = transform(&XYZ_TO_LINEAR_RGB, transform(&LINEAR_RGB_TO_XYZ, vals));
        for i in 0..3 {
            assert!((back[i] - vals[i]).abs() <= 1e-4);
        }
    }

    #[test]
    fn test_white_has_unit_luminance() {
        let xyz = transform(&LINEAR_RGB_TO_XYZ, [1., 1., 1.]);
        assert!((xyz[1] - 1.).abs() <= 1e-5);
    }

    #[test]
    fn test_gamma_roundtrip() {
        for &c in &[0., 0.001, 0.00304, 0.01, 0.2, 0.5, 1.] {
            assert!((gamma_expand(gamma_compand(c)) - c).abs() <= 1e-6);
        }
    }
}
