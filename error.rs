use std::io;
use std::path::PathBuf;

/// Errors surfaced by the analysis core. Every variant is fatal to the
/// current invocation.
#[derive(thiserror::Error, Debug)]
pub enum DigestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Empty input: {0}")]
    EmptyInput(&'static str),
}

pub type Result<T> = std::result::Result<T, DigestError>;

/// Rejects an inverted length band.
pub(crate) fn check_length_bounds(min_length: usize, max_length: usize) -> Result<()> {
    if min_length > max_length {
        return Err(DigestError::Config(format!(
            "min_length ({}) can't be higher than max_length ({})",
            min_length, max_length
        )));
    }
    Ok(())
}
