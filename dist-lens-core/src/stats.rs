use dist_lens_common::{DistLensError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSummary {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
}

/// Single linear scan over the sample set. Errors on empty input: minimum
/// and maximum are undefined and must never be fabricated.
pub fn summarize(samples: &[f64]) -> Result<SampleSummary> {
    if samples.is_empty() {
        return Err(DistLensError::EmptySampleSet);
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for &v in samples {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
        sum += v;
        sum_sq += v * v;
    }
    let n = samples.len() as f64;
    let mean = sum / n;
    let variance = (sum_sq / n - mean * mean).max(0.0);
    Ok(SampleSummary {
        count: samples.len() as u64,
        min,
        max,
        mean,
        stddev: variance.sqrt(),
    })
}
