//! Address to shard classification.
//!
//! The leading value of an address is read from its first four characters
//! with the same rules as a JavaScript `Number()` conversion: `0x1A` is
//! hexadecimal (26), `1234` is decimal (1234), a blank prefix is 0 and
//! anything else has no value.
//! For a `0x`-prefixed address this is the value of its first byte.

use crate::constants::SHARDS;
use crate::error::{Result, ScanError};
use crate::types::Shard;

const PREFIX_LEN: usize = 4;

/// Numeric value of the first four characters of `address`, or `None` where
/// JavaScript would produce `NaN`.
pub fn leading_value(address: &str) -> Option<f64> {
    let prefix: String = address.chars().take(PREFIX_LEN).collect();
    let prefix = prefix.trim_matches(|c: char| c.is_ascii_whitespace());
    if prefix.is_empty() {
        return Some(0.0);
    }
    for (marker, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let upper = marker.to_ascii_uppercase();
        if let Some(digits) = prefix.strip_prefix(marker).or_else(|| prefix.strip_prefix(upper.as_str())) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u32::from_str_radix(digits, radix).ok().map(f64::from);
        }
    }
    prefix.parse::<f64>().ok().filter(|value| !value.is_nan())
}

fn classify(address: &str) -> Result<&'static Shard> {
    leading_value(address)
        .and_then(|value| SHARDS.iter().find(|shard| shard.contains(value)))
        .ok_or_else(|| ScanError::UnclassifiableAddress { address: address.to_string() })
}

/// Name of the shard whose range holds the leading value of `address`.
pub fn shard_for_address(address: &str) -> Result<&'static str> {
    classify(address).map(|shard| shard.name)
}
