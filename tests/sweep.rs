use shard_sweep::collector::{collect, ScanState};
use shard_sweep::commands::{self, run_sweep, EXIT_FAILURE, EXIT_OK};
use shard_sweep::config::ScanConfig;
use shard_sweep::constants::SHARDS;
use shard_sweep::derive::{AddressDeriver, HdDeriver};
use shard_sweep::error::Result;
use shard_sweep::types::{DerivedKey, SecureMnemonic};
use shard_sweep::watchlist::Watchlist;

use bip39::{Language, Mnemonic};
use std::io::Write;
use std::path::PathBuf;
use zeroize::Zeroizing;

const WATCHED: &str = "0x00ab000000000000000000000000000000000005";

/// Walks the byte space; index 5 of coin type 1 yields `WATCHED`.
struct ScriptedDeriver;

impl AddressDeriver for ScriptedDeriver {
    fn derive(&self, coin_type: u32, index: u32) -> Result<DerivedKey> {
        let address = if coin_type == 1 && index == 5 {
            WATCHED.to_string()
        } else {
            format!("0x{:02x}{:038x}", (index * 29 + 1) % 256, index)
        };
        Ok(DerivedKey {
            public_key: format!("0x03{:064x}", index),
            address,
            private_key: Zeroizing::new(format!("0x{:064x}", index + 100)),
        })
    }
}

fn small_config(coin_types: Vec<u32>) -> ScanConfig {
    ScanConfig { limit: 10, max_index: 100_000, coin_types, ..ScanConfig::default() }
}

fn spanish_phrase() -> String {
    Mnemonic::from_entropy_in(Language::Spanish, &[7u8; 16]).unwrap().to_string()
}

#[test]
fn watched_address_is_reported_under_its_shard() {
    let watchlist: Watchlist = [WATCHED.to_string()].into_iter().collect();
    let mut out = Vec::new();
    let found = run_sweep(&ScriptedDeriver, &watchlist, &small_config(vec![1]), &mut out).unwrap();
    assert_eq!(found, 1);

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Checking addresses for coinType 1"));
    assert!(output.contains("\ncyprus-1 addresses:\n"));
    let row = output.lines().find(|line| line.contains(WATCHED)).unwrap();
    let cells: Vec<&str> = row.split('│').map(str::trim).collect();
    // leading and trailing borders produce empty cells
    assert_eq!(cells[5], "5");
    assert_eq!(cells[6], "1");
    assert_eq!(cells[7], "'No'");
    assert_eq!(cells[8], "'cyprus-1'");
    for shard in SHARDS.iter().skip(1) {
        assert!(output.contains(&format!("No {} addresses found", shard.name)));
    }
}

#[test]
fn empty_watchlist_reports_nothing_for_every_shard_and_coin_type() {
    let config = ScanConfig { limit: 3, ..small_config(vec![1, 60, 994]) };
    let mut out = Vec::new();
    let found = run_sweep(&ScriptedDeriver, &Watchlist::default(), &config, &mut out).unwrap();
    assert_eq!(found, 0);

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("This script will derive 81 addresses across 9 shards."));
    for shard in SHARDS.iter() {
        let notice = format!("No {} addresses found", shard.name);
        assert_eq!(output.matches(&notice).count(), 3, "{}", notice);
    }
    assert!(!output.contains("┌"));
}

#[test]
fn empty_watchlist_still_runs_to_completion() {
    let scan = collect(&ScriptedDeriver, 60, &small_config(vec![60])).unwrap();
    assert_eq!(scan.state, ScanState::AllBucketsFull);
    assert!(scan.collection.all_full());
}

#[test]
fn spanish_seed_sweep_end_to_end() {
    let phrase = spanish_phrase();
    let seed = SecureMnemonic::from_phrase(&phrase).to_seed(Language::Spanish, "").unwrap();
    let target = HdDeriver::new(seed).derive(60, 0).unwrap().address;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Address\n{}", target).unwrap();
    let config = ScanConfig { limit: 2, coin_types: vec![60], watchlist_path: file.path().to_path_buf(), ..ScanConfig::default() };

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = commands::run(["shard-sweep", phrase.as_str()], &config, &mut out, &mut err);
    assert_eq!(code, EXIT_OK, "{}", String::from_utf8_lossy(&err));

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Checking addresses for coinType 60"));
    let row = output.lines().find(|line| line.contains(&target)).unwrap();
    assert!(row.split('│').map(str::trim).any(|cell| cell == "0"));
    assert!(err.is_empty());
}

#[test]
fn spanish_seed_collections_are_deterministic() {
    let phrase = spanish_phrase();
    let config = ScanConfig { limit: 2, ..small_config(vec![994]) };
    let first = {
        let seed = SecureMnemonic::from_phrase(&phrase).to_seed(Language::Spanish, "").unwrap();
        collect(&HdDeriver::new(seed), 994, &config).unwrap()
    };
    let second = {
        let seed = SecureMnemonic::from_phrase(&phrase).to_seed(Language::Spanish, "").unwrap();
        collect(&HdDeriver::new(seed), 994, &config).unwrap()
    };
    assert_eq!(first, second);
    assert_eq!(first.state, ScanState::AllBucketsFull);
}

#[test]
fn missing_watchlist_fails_after_validation() {
    let config = ScanConfig { watchlist_path: PathBuf::from("/nonexistent/addresses.csv"), ..small_config(vec![1]) };
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = commands::run(["shard-sweep", spanish_phrase().as_str()], &config, &mut out, &mut err);
    assert_eq!(code, EXIT_FAILURE);
    assert!(out.is_empty());
    assert!(String::from_utf8(err).unwrap().starts_with("Error loading addresses:"));
}
