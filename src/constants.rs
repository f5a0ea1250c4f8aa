use crate::types::Shard;

pub const ADDRESSES_FILE: &str = "addresses.csv";
pub const ADDRESSES_FILE_ENV: &str = "SHARD_SWEEP_ADDRESSES";

pub const LIMIT: usize = 1000;
pub const MAX_INDEX: u32 = 1_000_000_000;
pub const COIN_TYPES: [u32; 3] = [1, 60, 994];

pub const PURPOSE: u32 = 44;
pub const ACCOUNT: u32 = 0;
pub const CHANGE: u32 = 0;

pub const SHARDS: [Shard; 9] = [
    Shard::new("cyprus-1", 0x00, 0x1D),
    Shard::new("cyprus-2", 0x1E, 0x3A),
    Shard::new("cyprus-3", 0x3B, 0x57),
    Shard::new("paxos-1", 0x58, 0x73),
    Shard::new("paxos-2", 0x74, 0x8F),
    Shard::new("paxos-3", 0x90, 0xAB),
    Shard::new("hydra-1", 0xAC, 0xC7),
    Shard::new("hydra-2", 0xC8, 0xE3),
    Shard::new("hydra-3", 0xE4, 0xFF),
];
