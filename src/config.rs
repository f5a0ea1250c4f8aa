use std::env;
use std::path::PathBuf;

use crate::constants::*;

/// Parameters of one sweep. The binary always runs with the fixed limits;
/// only the watch-list location can be moved through the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Addresses kept per shard for each coin type
    pub limit: usize,

    /// First derivation index that is never reached
    pub max_index: u32,

    /// Coin types scanned, in order
    pub coin_types: Vec<u32>,

    /// CSV file with an `Address` column
    pub watchlist_path: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            limit: LIMIT,
            max_index: MAX_INDEX,
            coin_types: COIN_TYPES.to_vec(),
            watchlist_path: PathBuf::from(ADDRESSES_FILE),
        }
    }
}

impl ScanConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = env::var_os(ADDRESSES_FILE_ENV).filter(|path| !path.is_empty()) {
            config.watchlist_path = PathBuf::from(path);
        }
        config
    }

    /// Upper bound on how many addresses a sweep collects.
    pub fn total_addresses(&self) -> usize {
        self.limit * self.coin_types.len() * SHARDS.len()
    }
}
