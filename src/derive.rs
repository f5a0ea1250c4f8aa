use bip32::{ChildNumber, DerivationPath, XPrv};
use k256::ecdsa::VerifyingKey;
use std::cell::RefCell;
use std::collections::HashMap;
use tiny_keccak::{Hasher, Keccak};
use zeroize::Zeroizing;

use crate::constants::*;
use crate::error::{Result, ScanError};
use crate::types::*;

/// Produces the key material for `m/44'/<coin_type>'/0'/0/<index>`.
pub trait AddressDeriver {
    fn derive(&self, coin_type: u32, index: u32) -> Result<DerivedKey>;
}

pub fn derivation_path(coin_type: u32, index: u32) -> String {
    format!("{}/{}", chain_path(coin_type), index)
}

fn chain_path(coin_type: u32) -> String {
    format!("m/{}'/{}'/{}'/{}", PURPOSE, coin_type, ACCOUNT, CHANGE)
}

fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);
    hash
}

/// EIP-55 mixed-case form of a 20-byte address.
pub fn checksum_address(address: &[u8; 20]) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());
    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = (hash[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
        if c.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }
    checksummed
}

fn key_from_xprv(xprv: &XPrv) -> DerivedKey {
    let verifying_key: &VerifyingKey = xprv.private_key().verifying_key();
    let uncompressed = verifying_key.to_encoded_point(false);
    let hash = keccak256(&uncompressed.as_bytes()[1..]);
    let mut raw = [0u8; 20];
    raw.copy_from_slice(&hash[12..]);
    let secret_bytes = Zeroizing::new(xprv.to_bytes());
    DerivedKey {
        public_key: format!("0x{}", hex::encode(xprv.public_key().to_bytes())),
        address: checksum_address(&raw),
        private_key: Zeroizing::new(format!("0x{}", hex::encode(&*secret_bytes))),
    }
}

/// BIP32 deriver over a BIP39 seed. The external chain of each coin type is
/// derived once and reused for every index.
pub struct HdDeriver {
    seed: SecureSeed,
    chains: RefCell<HashMap<u32, XPrv>>,
}

impl HdDeriver {
    pub fn new(seed: SecureSeed) -> Self {
        Self { seed, chains: RefCell::new(HashMap::new()) }
    }

    fn chain(&self, coin_type: u32) -> Result<XPrv> {
        if let Some(xprv) = self.chains.borrow().get(&coin_type) {
            return Ok(xprv.clone());
        }
        let path = chain_path(coin_type);
        let parsed: DerivationPath = path.parse().map_err(|source| ScanError::Derivation { path: path.clone(), source })?;
        let xprv = XPrv::derive_from_path(self.seed.as_bytes(), &parsed).map_err(|source| ScanError::Derivation { path, source })?;
        self.chains.borrow_mut().insert(coin_type, xprv.clone());
        Ok(xprv)
    }
}

impl AddressDeriver for HdDeriver {
    fn derive(&self, coin_type: u32, index: u32) -> Result<DerivedKey> {
        let derivation_error = |source| ScanError::Derivation { path: derivation_path(coin_type, index), source };
        let chain = self.chain(coin_type)?;
        let child = ChildNumber::new(index, false).map_err(derivation_error)?;
        let xprv = chain.derive_child(child).map_err(derivation_error)?;
        Ok(key_from_xprv(&xprv))
    }
}
