use crate::histogram::Histogram;
use crate::stats::SampleSummary;
use dist_lens_common::{DistLensError, Result};
use std::io::Write;
use std::path::Path;

/// Headless summary output for the `summary` command.
pub fn print_summary(summary: &SampleSummary) {
    println!("{:<16} {}", "Samples:", summary.count);
    println!("{:<16} {}", "Minimum:", summary.min);
    println!("{:<16} {}", "Maximum:", summary.max);
    println!("{:<16} {:.6}", "Mean:", summary.mean);
    println!("{:<16} {:.6}", "Stddev:", summary.stddev);
}

pub fn export_json(
    output_path: &Path,
    summary: &SampleSummary,
    histogram: &Histogram,
) -> Result<()> {
    let doc = serde_json::json!({
        "summary": summary,
        "histogram": histogram,
    });
    let mut file = std::fs::File::create(output_path)?;
    serde_json::to_writer_pretty(&mut file, &doc)
        .map_err(|e| DistLensError::Other(e.to_string()))?;
    Ok(())
}

pub fn export_csv(output_path: &Path, histogram: &Histogram) -> Result<()> {
    let mut file = std::fs::File::create(output_path)?;
    writeln!(file, "bin_index,range_start,range_end,count")?;
    for (i, bin) in histogram.bins.iter().enumerate() {
        writeln!(file, "{},{},{},{}", i, bin.range_start, bin.range_end, bin.count)?;
    }
    Ok(())
}
