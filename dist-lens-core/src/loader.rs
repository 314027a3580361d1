use dist_lens_common::{DistLensError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a newline-delimited sample file into an ordered sample set.
///
/// Each line is trimmed and parsed as `f64`; lines that are empty after
/// trimming yield no sample. The first unparseable line aborts the whole
/// load with its 1-based line number; no skipping, no partial result. The
/// handle is scope-bound, so it is released on every exit path including
/// the error returns.
pub fn load_samples(path: &Path) -> Result<Vec<f64>> {
    let reader = BufReader::new(File::open(path)?);
    let mut samples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: f64 = trimmed.parse().map_err(|_| DistLensError::Parse {
            line: idx + 1,
            content: trimmed.to_string(),
        })?;
        samples.push(value);
    }
    Ok(samples)
}
