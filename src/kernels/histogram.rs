// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Histogram Kernels** - *Equal-Width Binning*
//!
//! Equal-width histograms over the observed data range. The bin count defaults
//! to Sturges' rule.

use crate::config::STURGES_COEFFICIENT;
use crate::utils::min_max;

/// Bin edges and per-bin counts. `breaks.len() == counts.len() + 1` unless
/// both are empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Histogram {
    pub breaks: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Width of each bin, `0` for an empty or single-valued histogram.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        match (self.breaks.first(), self.breaks.get(1)) {
            (Some(a), Some(b)) => b - a,
            _ => 0.0,
        }
    }
}

/// Sturges' rule: `⌈1 + 3.322 · log10(n)⌉`, at least 1.
#[inline]
pub fn sturges_bin_count(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    let k = (1.0 + STURGES_COEFFICIENT * (n as f64).log10()).ceil();
    (k as usize).max(1)
}

/// Bins `data` into equal-width intervals from its minimum to its maximum.
///
/// `bins` of `None` or `Some(0)` uses [`sturges_bin_count`]. Bin indices are
/// clamped so every finite value is counted, with the maximum landing in the
/// last bin. Non-finite values are skipped. Empty input gives an empty
/// histogram.
pub fn calculate_bins(data: &[f64], bins: Option<usize>) -> Histogram {
    let finite: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    let Some((min, max)) = min_max(&finite) else {
        return Histogram::default();
    };

    let k = match bins {
        Some(b) if b > 0 => b,
        _ => sturges_bin_count(data.len()),
    };
    let width = (max - min) / k as f64;
    let breaks: Vec<f64> = (0..=k).map(|i| min + i as f64 * width).collect();

    let mut counts = vec![0usize; k];
    for &x in &finite {
        let idx = if x == max || width == 0.0 {
            k - 1
        } else {
            (((x - min) / width).floor() as usize).min(k - 1)
        };
        counts[idx] += 1;
    }
    Histogram { breaks, counts }
}
