use bip39::{Language, Mnemonic};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Result, ScanError};

/// A named, inclusive range over the leading byte of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shard {
    pub name: &'static str,
    pub low: u8,
    pub high: u8,
}

impl Shard {
    pub const fn new(name: &'static str, low: u8, high: u8) -> Self {
        Self { name, low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= f64::from(self.low) && value <= f64::from(self.high)
    }
}

/// Output of a single derivation, before it is classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedKey {
    pub public_key: String,
    pub address: String,
    pub private_key: Zeroizing<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedAddress {
    pub public_key: String,
    pub address: String,
    pub private_key: Zeroizing<String>,
    pub index: u32,
    pub coin_type: u32,
    pub shard: &'static str,
}

impl DerivedAddress {
    pub fn new(key: DerivedKey, index: u32, coin_type: u32, shard: &'static str) -> Self {
        Self {
            public_key: key.public_key,
            address: key.address,
            private_key: key.private_key,
            index,
            coin_type,
            shard,
        }
    }
}

pub struct SecureMnemonic {
    phrase: Zeroizing<String>,
}

impl SecureMnemonic {
    pub fn from_phrase(phrase: &str) -> Self {
        Self {
            phrase: Zeroizing::new(phrase.trim().to_string()),
        }
    }

    pub fn is_valid(&self, language: Language) -> bool {
        Mnemonic::parse_in(language, self.phrase.as_str()).is_ok()
    }

    /// BIP39 seed of the phrase, validated against `language` first.
    pub fn to_seed(&self, language: Language, passphrase: &str) -> Result<SecureSeed> {
        let mnemonic = Mnemonic::parse_in(language, self.phrase.as_str()).map_err(|_| ScanError::InvalidMnemonic)?;
        let seed = mnemonic.to_seed(passphrase);
        drop(mnemonic);
        Ok(SecureSeed::new(seed))
    }
}

pub struct SecureSeed {
    seed: Zeroizing<[u8; 64]>,
}

impl SecureSeed {
    pub fn new(seed: [u8; 64]) -> Self {
        Self {
            seed: Zeroizing::new(seed),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.seed[..]
    }
}

impl Zeroize for SecureSeed {
    fn zeroize(&mut self) {
        self.seed.zeroize();
    }
}
