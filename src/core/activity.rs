//! Deterministic Activity Simulator
//!
//! Stands in for real ledger telemetry: transaction count, wallet age and
//! balance are derived from an MD5 digest of the address string. Same input
//! bytes, same snapshot, no I/O. The address scorer only sees the
//! `ActivitySource` trait, so a real chain adapter can replace this later.

use crate::models::types::ActivitySnapshot;
use crate::utils::constants::{SIM_AGE_MODULUS, SIM_BALANCE_MODULUS, SIM_TX_MODULUS};

/// Anything that can produce an activity snapshot for a normalized address
pub trait ActivitySource {
    fn snapshot(&self, normalized_address: &str) -> ActivitySnapshot;
}

/// Hash-derived pseudo activity (the only source shipped today)
#[derive(Debug, Clone, Copy, Default)]
pub struct HashedActivity;

impl ActivitySource for HashedActivity {
    fn snapshot(&self, normalized_address: &str) -> ActivitySnapshot {
        simulate_activity(normalized_address)
    }
}

/// 128-bit seed: the MD5 digest read as a big-endian integer
#[inline]
pub fn activity_seed(normalized_address: &str) -> u128 {
    let digest = md5::compute(normalized_address.as_bytes());
    u128::from_be_bytes(digest.0)
}

/// Derive stable pseudo "on-chain" statistics from an address
pub fn simulate_activity(normalized_address: &str) -> ActivitySnapshot {
    let seed = activity_seed(normalized_address);

    ActivitySnapshot {
        tx_count: (seed % SIM_TX_MODULUS) as u64,
        age_days: (seed % SIM_AGE_MODULUS) as u64,
        balance_milli: (seed % SIM_BALANCE_MODULUS) as u64,
    }
}
