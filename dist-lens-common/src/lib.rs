pub mod config;
pub use config::Config;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistLensError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: cannot parse {content:?} as a floating-point number")]
    Parse { line: usize, content: String },
    #[error("empty sample set: minimum and maximum are undefined")]
    EmptySampleSet,
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DistLensError>;
