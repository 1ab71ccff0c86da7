use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrollsyncError {
    #[error("No input files given.\n\nUsage: scrollsync <FILE>...")]
    NoInput,

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid size '{0}': expected WIDTHxHEIGHT, e.g. 400x300")]
    InvalidSize(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
