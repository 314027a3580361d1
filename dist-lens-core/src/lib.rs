pub mod export;
pub mod generator;
pub mod histogram;
pub mod loader;
pub mod stats;

pub use dist_lens_common::{DistLensError, Result};
pub use export::{export_csv, export_json, print_summary};
pub use generator::{write_random_values, MersenneTwister, Precision, DEFAULT_SEED};
pub use histogram::{Histogram, HistogramBin, DEFAULT_BINS};
pub use loader::load_samples;
pub use stats::{summarize, SampleSummary};
