//! Bounded per-shard collection for one coin type.
//!
//! Indices are derived in increasing order starting at 0. Each address goes
//! into its shard's bucket until that bucket holds `limit` entries. The scan
//! ends when every bucket is full or the index ceiling is reached.

use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::constants::SHARDS;
use crate::derive::AddressDeriver;
use crate::error::Result;
use crate::shard::shard_for_address;
use crate::types::DerivedAddress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    AllBucketsFull,
    CeilingReached,
}

/// One bucket per shard, in shard table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardCollection {
    buckets: Vec<(&'static str, Vec<DerivedAddress>)>,
    limit: usize,
}

impl ShardCollection {
    pub fn new(limit: usize) -> Self {
        Self {
            buckets: SHARDS.iter().map(|shard| (shard.name, Vec::new())).collect(),
            limit,
        }
    }

    pub fn get(&self, shard: &str) -> Option<&[DerivedAddress]> {
        self.buckets.iter().find(|(name, _)| *name == shard).map(|(_, bucket)| bucket.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[DerivedAddress])> {
        self.buckets.iter().map(|(name, bucket)| (*name, bucket.as_slice()))
    }

    pub fn is_full(&self, shard: &str) -> bool {
        self.get(shard).is_some_and(|bucket| bucket.len() >= self.limit)
    }

    pub fn all_full(&self) -> bool {
        self.buckets.iter().all(|(_, bucket)| bucket.len() == self.limit)
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, bucket)| bucket.len()).sum()
    }

    /// Appends to the address's bucket if it has room. Returns whether it was kept.
    fn offer(&mut self, address: DerivedAddress) -> bool {
        let limit = self.limit;
        match self.buckets.iter_mut().find(|(name, _)| *name == address.shard) {
            Some((_, bucket)) if bucket.len() < limit => {
                bucket.push(address);
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinScan {
    pub coin_type: u32,
    pub state: ScanState,
    pub indices_scanned: u32,
    pub collection: ShardCollection,
}

pub fn collect<D: AddressDeriver + ?Sized>(deriver: &D, coin_type: u32, config: &ScanConfig) -> Result<CoinScan> {
    let mut collection = ShardCollection::new(config.limit);
    let mut state = ScanState::Scanning;
    let mut index: u32 = 0;

    info!(coin_type, limit = config.limit, max_index = config.max_index, "collecting addresses");

    while state == ScanState::Scanning {
        if index >= config.max_index {
            state = ScanState::CeilingReached;
            break;
        }
        let key = deriver.derive(coin_type, index)?;
        let shard = shard_for_address(&key.address)?;
        if collection.offer(DerivedAddress::new(key, index, coin_type, shard)) {
            if collection.is_full(shard) {
                debug!(coin_type, shard, index, "bucket filled");
            }
        } else if collection.all_full() {
            state = ScanState::AllBucketsFull;
        }
        index += 1;
    }

    info!(coin_type, ?state, indices_scanned = index, collected = collection.total(), "collection finished");

    Ok(CoinScan { coin_type, state, indices_scanned: index, collection })
}
