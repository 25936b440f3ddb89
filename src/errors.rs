// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Registry and Validation Error Handling*
//!
//! Numeric kernels in this crate never fail: degenerate inputs degrade to `0`,
//! `NaN` or `inf`. Errors only surface at the edges where a caller asks for
//! something by name or asks for parameters to be checked.
//!
//! ## Error Categories
//! - **Lookup Errors**: Unknown distribution names
//! - **Argument Errors**: Parameters that are non-finite, out of range or inconsistent
//! - **Boundary Errors**: Sizes or indices outside what an operation supports

use core::fmt;
use std::error::Error;

/// Error type for registry lookups, parameter validation and the simulation driver.
///
/// Each variant carries a contextual message.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// No distribution is registered under the requested name.
    UnknownDistribution(String),

    /// Invalid arguments provided to a kernel or driver function.
    InvalidArguments(String),

    /// A size or index outside the supported range.
    OutOfBounds(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::UnknownDistribution(msg) => write!(f, "Unknown distribution: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted message for a parameter that falls outside its declared range.
///
/// # Arguments
/// * `dist` - Distribution display name
/// * `key` - Parameter key
/// * `value` - Offending value
/// * `min`, `max` - Declared bounds, if any
pub fn log_param_out_of_range(
    dist: &str,
    key: &str,
    value: f64,
    min: Option<f64>,
    max: Option<f64>,
) -> String {
    let lo = min.map_or_else(|| "-inf".to_string(), |v| v.to_string());
    let hi = max.map_or_else(|| "inf".to_string(), |v| v.to_string());
    format!("{dist} => parameter '{key}' = {value} outside [{lo}, {hi}]")
}
