use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, ScanError};

#[derive(Deserialize)]
struct WatchlistRow {
    #[serde(rename = "Address")]
    address: Option<String>,
}

/// Addresses to look for. Read once, then only queried.
#[derive(Debug, Default, Clone)]
pub struct Watchlist {
    addresses: HashSet<String>,
}

impl Watchlist {
    pub fn load(path: &Path) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|source| ScanError::Watchlist { path: path.to_path_buf(), source })?;
        let watchlist = Self::from_csv(reader);
        info!(path = %path.display(), addresses = watchlist.len(), "watch-list loaded");
        Ok(watchlist)
    }

    pub fn from_reader<R: Read>(reader: R) -> Self {
        Self::from_csv(csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Self {
        let mut addresses = HashSet::new();
        let mut skipped = 0usize;
        for row in reader.deserialize::<WatchlistRow>() {
            match row {
                Ok(WatchlistRow { address: Some(address) }) if !address.is_empty() => {
                    addresses.insert(address);
                }
                Ok(_) => skipped += 1,
                Err(e) => {
                    debug!(error = %e, "skipping malformed watch-list row");
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            debug!(skipped, "watch-list rows without an address");
        }
        Self { addresses }
    }

    pub fn contains(&self, address: &str) -> bool {
        self.addresses.contains(address)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl FromIterator<String> for Watchlist {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self { addresses: iter.into_iter().collect() }
    }
}
