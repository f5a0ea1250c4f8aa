use std::path::PathBuf;

use thiserror::Error;

/// Every failure the sweep can surface. Only `commands::exit_code` turns these into exit codes.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("invalid mnemonic")]
    InvalidMnemonic,

    #[error("failed to read watch-list {}: {source}", .path.display())]
    Watchlist {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid address: {address}")]
    UnclassifiableAddress { address: String },

    #[error("derivation failed at {path}: {source}")]
    Derivation {
        path: String,
        #[source]
        source: bip32::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
