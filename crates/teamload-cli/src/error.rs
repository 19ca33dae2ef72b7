use std::path::PathBuf;

/// Errors raised while turning command-line arguments into planning inputs.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("could not read inputs file {path}")]
    ReadInputs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("inputs file {path} is not valid planning JSON")]
    ParseInputs {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("sweep range is inverted: --sweep-min {min} is above --sweep-max {max}")]
    InvertedSweepRange { min: u32, max: u32 },
}
