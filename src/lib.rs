//! # shard-sweep
//!
//! Derives BIP44 wallet addresses from a Spanish seed phrase across several coin
//! types, sorts them into shards and reports the ones that appear on a watch-list.
//!
//! ## Usage
//!
//! ```bash
//! # Using cargo
//! cargo run --release -- "<spanish seed phrase>"
//!
//! # Using the compiled binary
//! ./target/release/shard-sweep "<spanish seed phrase>"
//! ```
//!
//! The watch-list is read from `addresses.csv` in the working directory. It needs a
//! header row with an `Address` column:
//!
//! ```text
//! Address
//! 0x00aB3c0000000000000000000000000000000000
//! ```
//!
//! Set `SHARD_SWEEP_ADDRESSES` to read it from somewhere else, and `RUST_LOG`
//! (for example `RUST_LOG=shard_sweep=debug`) for diagnostics on stderr.
//!
//! **Exit codes:** `0` when the sweep completes, `1` when the seed phrase is
//! missing or invalid, the watch-list cannot be read, or an address cannot be
//! derived or classified.
//!
//! ## Derivation
//!
//! ```text
//! m / 44' / coin_type' / 0' / 0 / address_index
//!
//! coin types: 1, 60, 994
//! ```
//!
//! For each coin type, indices are walked from 0 until every shard holds 1000
//! addresses (or index 1,000,000,000 is reached). Addresses are EIP-55
//! checksummed and compared to the watch-list exactly as written.
//!
//! ## Shards
//!
//! The first byte of an address selects its shard:
//!
//! | Shard    | First byte  |
//! |----------|-------------|
//! | cyprus-1 | 0x00 – 0x1D |
//! | cyprus-2 | 0x1E – 0x3A |
//! | cyprus-3 | 0x3B – 0x57 |
//! | paxos-1  | 0x58 – 0x73 |
//! | paxos-2  | 0x74 – 0x8F |
//! | paxos-3  | 0x90 – 0xAB |
//! | hydra-1  | 0xAC – 0xC7 |
//! | hydra-2  | 0xC8 – 0xE3 |
//! | hydra-3  | 0xE4 – 0xFF |

pub mod collector;
pub mod commands;
pub mod config;
pub mod constants;
pub mod derive;
pub mod error;
pub mod report;
pub mod shard;
pub mod types;
pub mod watchlist;
