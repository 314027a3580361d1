use dist_lens_common::{DistLensError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BINS: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramBin {
    pub range_start: f64,
    pub range_end: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    pub total: u64,
}

impl Histogram {
    /// Partition `[min, max]` into `bins` equal-width bins and count samples
    /// per bin. The top edge counts into the last bin, so the counts always
    /// sum to the sample count. When every sample is equal the range has no
    /// width and a single bin holds everything.
    pub fn build(samples: &[f64], bins: usize) -> Result<Self> {
        if samples.is_empty() {
            return Err(DistLensError::EmptySampleSet);
        }
        if bins == 0 {
            return Err(DistLensError::Other("histogram needs at least one bin".into()));
        }
        let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let total = samples.len() as u64;
        if (max - min).abs() < f64::EPSILON {
            return Ok(Self {
                bins: vec![HistogramBin {
                    range_start: min,
                    range_end: max,
                    count: total,
                }],
                total,
            });
        }
        let width = (max - min) / bins as f64;
        let mut counts = vec![0u64; bins];
        for &v in samples {
            let idx = (((v - min) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        let bins = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| HistogramBin {
                range_start: min + i as f64 * width,
                range_end: min + (i + 1) as f64 * width,
                count: c,
            })
            .collect();
        Ok(Self { bins, total })
    }

    /// Largest single-bin count, used to scale bars. At least 1 so a render
    /// never divides by zero.
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0).max(1)
    }
}

#[cfg(test)]
mod tests_histogram {
    use super::*;

    fn counts(h: &Histogram) -> u64 { h.bins.iter().map(|b| b.count).sum() }

    #[test] fn empty_is_error() { assert!(Histogram::build(&[], 100).is_err()); }
    #[test] fn zero_bins_is_error() { assert!(Histogram::build(&[1.0], 0).is_err()); }
    #[test] fn counts_sum_to_n() { let h = Histogram::build(&[1.0, 2.0, 2.0, 3.0], 100).unwrap(); assert_eq!(counts(&h), 4); assert_eq!(h.total, 4); }
    #[test] fn top_edge_lands_in_last_bin() { let h = Histogram::build(&[0.0, 10.0], 10).unwrap(); assert_eq!(h.bins.last().unwrap().count, 1); }
    #[test] fn all_equal_collapses_to_one_bin() { let h = Histogram::build(&[7.0; 5], 100).unwrap(); assert_eq!(h.bins.len(), 1); assert_eq!(h.bins[0].count, 5); }
    #[test] fn bin_count_matches_request() { let h = Histogram::build(&[0.0, 1.0, 2.0], 4).unwrap(); assert_eq!(h.bins.len(), 4); }
}
