use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BitsError {
    #[error("unrecognised file format for {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse molecule {index} ({name}): {reason}")]
    Parse {
        index: usize,
        name: String,
        reason: String,
    },

    #[error("fingerprinting failed for molecule {index} ({name}): {reason}")]
    Toolkit {
        index: usize,
        name: String,
        reason: String,
    },

    #[error("unsupported fingerprint parameters: {reason}")]
    UnsupportedParams { reason: String },

    #[error("unknown fingerprint type {0}, expected Morgan or Path")]
    UnknownFingerprintType(String),

    #[error("number of bits must be greater than zero")]
    InvalidBitCount,

    #[error("failed writing output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("{} holds {found}-bit fingerprints, expected {expected}", path.display())]
    WidthMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("malformed bitstring record on line {line}: {reason}")]
    Record { line: usize, reason: String },
}
