// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *Precomputed Constants for Distribution Kernels*
//!
//! Hard-coded constants used by the special functions and density formulas.

// ******** Constants ***********************************************/

/// The square root of 2π: √(2π) ≈ 2.506628274631000.
///
/// Normalisation constant of the Gaussian density and its relatives
/// (log-normal, inverse Gaussian).
pub(crate) const SQRT_2PI: f64 = 2.5066282746310002_f64;

/// ½ ln(2π) ≈ 0.9189385332046727, the leading term of the Lanczos series.
pub(crate) const HALF_LOG_TWO_PI: f64 = 0.9189385332046727_f64;

/// √(2/π), the Maxwell–Boltzmann normalisation constant.
pub(crate) const SQRT_2_OVER_PI: f64 = 0.7978845608028654_f64;

/// Lanczos parameter `g`.
pub(crate) const LANCZOS_G: f64 = 7.0;

/// Leading Lanczos coefficient `c₀` for g = 7.
pub(crate) const LANCZOS_C0: f64 = 0.99999999999980993;

/// Lanczos series coefficients `c₁ … c₈` for g = 7.
///
/// With `N = 8` coefficients the series argument is `t = z + N − ½ = z + g + ½`.
pub(crate) const LANCZOS_COEFFS: [f64; 8] = [
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];
