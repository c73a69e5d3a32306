//! Address Validator & Scorer
//!
//! Classifies a string as ETH, BTC or a permissive TRAC/OTHER address and
//! scores it from static signals (deny-list, character entropy, zero
//! density) plus simulated activity. Malformed input is a normal outcome:
//! anything unrecognized and shorter than 20 characters comes back as
//! `valid: false` with risk level UNKNOWN.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

use super::activity::{ActivitySource, HashedActivity};
use super::risk_score::RiskScoreBuilder;
use crate::models::types::{ActivitySnapshot, AddressType, RiskAssessment, RiskLevel};
use crate::utils::constants::*;

lazy_static! {
    static ref ETH_ADDRESS_REGEX: Regex = Regex::new(ETH_ADDRESS_PATTERN).expect("ETH pattern");
    static ref BTC_ADDRESS_REGEX: Regex = Regex::new(BTC_ADDRESS_PATTERN).expect("BTC pattern");
    static ref KNOWN_SCAMS: HashSet<&'static str> = KNOWN_SCAM_ADDRESSES.iter().copied().collect();
}

/// Strip surrounding whitespace, including the ASCII separators U+001C..U+001F
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Trim and lower-case an address
pub fn normalize_address(raw: &str) -> String {
    trim_input(raw).to_lowercase()
}

/// Detect the format of an already-normalized address
pub fn detect_address_type(normalized: &str) -> AddressType {
    if ETH_ADDRESS_REGEX.is_match(normalized) {
        AddressType::Eth
    } else if BTC_ADDRESS_REGEX.is_match(normalized) {
        AddressType::Btc
    } else if normalized.chars().count() < MIN_FALLBACK_ADDRESS_LEN {
        AddressType::Unknown
    } else {
        AddressType::TracOther
    }
}

/// Exact deny-list membership
#[inline]
pub fn is_known_scam(normalized: &str) -> bool {
    KNOWN_SCAMS.contains(normalized)
}

/// Distinct characters once every literal "0x" is removed.
///
/// The substring is stripped anywhere, not only as a prefix.
pub fn unique_char_count(normalized: &str) -> usize {
    normalized
        .replace("0x", "")
        .chars()
        .collect::<HashSet<char>>()
        .len()
}

/// Number of '0' glyphs
#[inline]
pub fn zero_count(normalized: &str) -> usize {
    normalized.chars().filter(|&c| c == '0').count()
}

/// Analyze an address using hash-derived pseudo activity
pub fn analyze_address(raw: &str) -> RiskAssessment {
    analyze_address_with(raw, &HashedActivity)
}

/// Analyze an address with activity taken from `source`
pub fn analyze_address_with<S: ActivitySource + ?Sized>(raw: &str, source: &S) -> RiskAssessment {
    let address = normalize_address(raw);
    let address_type = detect_address_type(&address);

    if address_type == AddressType::Unknown {
        debug!(address = %address, "unrecognized address format");
        return invalid_assessment();
    }

    let unique_chars = unique_char_count(&address);
    let zeros = zero_count(&address);

    let mut builder = RiskScoreBuilder::new()
        .with_signal_if(
            is_known_scam(&address),
            WEIGHT_KNOWN_SCAM,
            "⛔ Known scam/burn address",
        );

    if unique_chars < MIN_UNIQUE_CHARS {
        builder = builder
            .with_signal(
                WEIGHT_LOW_ENTROPY,
                "⚠️ Low entropy — suspicious character repetition",
            )
            .with_detail("Addresses with very few unique characters may be crafted to deceive.");
    }

    builder = builder.with_signal_if(
        zeros > MAX_ZERO_COUNT,
        WEIGHT_HIGH_ZERO_COUNT,
        "⚠️ High zero count — possible vanity/generated address",
    );

    let stats = source.snapshot(&address);
    let builder = score_activity(builder, &stats);
    let score = builder.build(FLAG_NO_ADDRESS_SIGNALS);
    let level = RiskLevel::from_score(score.total);

    debug!(
        address = %address,
        kind = address_type.as_str(),
        score = score.total,
        raw = score.raw_total,
        signals = score.has_signals(),
        level = level.as_str(),
        "address scored"
    );

    RiskAssessment {
        valid: true,
        address: Some(address),
        address_type,
        risk_score: score.total,
        risk_level: level,
        verdict: level.verdict().to_string(),
        flags: score.flags,
        simulated_stats: Some(stats),
        details: score.details,
    }
}

/// Activity rules; each is independent and additive
fn score_activity(mut builder: RiskScoreBuilder, stats: &ActivitySnapshot) -> RiskScoreBuilder {
    if stats.tx_count > HIGH_FREQUENCY_MIN_TX && stats.age_days < HIGH_FREQUENCY_MAX_AGE_DAYS {
        builder = builder
            .with_signal(
                WEIGHT_HIGH_TX_FREQUENCY,
                "🚨 Abnormally high transaction frequency",
            )
            .with_detail(format!(
                "~{} txs in {} days suggests bot or spam activity.",
                stats.tx_count, stats.age_days
            ));
    }

    if stats.age_days < NEW_WALLET_MAX_AGE_DAYS && stats.tx_count > NEW_WALLET_MIN_TX {
        builder = builder
            .with_signal(WEIGHT_NEW_ACTIVE_WALLET, "⚠️ Very new wallet with high activity")
            .with_detail("Newly created wallets with sudden high activity are common in scams.");
    }

    builder.with_signal_if(
        stats.is_empty_balance() && stats.tx_count > DUST_ATTACKER_MIN_TX,
        WEIGHT_DUST_ATTACKER,
        "⚠️ Zero balance despite high transaction count — possible dust attacker",
    )
}

/// Terminal, non-scoring result for unrecognized formats
fn invalid_assessment() -> RiskAssessment {
    RiskAssessment {
        valid: false,
        address: None,
        address_type: AddressType::Unknown,
        risk_score: 0,
        risk_level: RiskLevel::Unknown,
        verdict: RiskLevel::Unknown.verdict().to_string(),
        flags: vec![FLAG_INVALID_FORMAT.to_string()],
        simulated_stats: None,
        details: vec![DETAIL_INVALID_FORMAT.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedActivity(ActivitySnapshot);

    impl ActivitySource for FixedActivity {
        fn snapshot(&self, _normalized_address: &str) -> ActivitySnapshot {
            self.0
        }
    }

    fn fixed(tx_count: u64, age_days: u64, balance_milli: u64) -> FixedActivity {
        FixedActivity(ActivitySnapshot {
            tx_count,
            age_days,
            balance_milli,
        })
    }

    const DIVERSE_ETH: &str = "0x742d35cc6634c0532925a3b8d44c9d4e8e8f1a2b";

    #[test]
    fn test_detect_address_type() {
        assert_eq!(detect_address_type(DIVERSE_ETH), AddressType::Eth);
        assert_eq!(
            detect_address_type("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq"),
            AddressType::Btc
        );
        assert_eq!(
            detect_address_type("3j98t1wpez73cnmqviecrnyiwrnqrhwnly"),
            AddressType::TracOther
        );
        assert_eq!(detect_address_type("11111111111111111111111111"), AddressType::Btc);
        // '0' is outside the base58 alphabet
        assert_eq!(
            detect_address_type("12345678901234567890123456"),
            AddressType::TracOther
        );
        assert_eq!(detect_address_type("abc"), AddressType::Unknown);
        assert_eq!(detect_address_type("0x1234"), AddressType::Unknown);
        assert_eq!(detect_address_type("aaaaaaaaaaaaaaaaaaaa"), AddressType::TracOther);
    }

    #[test]
    fn test_normalization() {
        let result = analyze_address("  0x742D35CC6634C0532925A3B8D44C9D4E8E8F1A2B \n");
        assert_eq!(result.address.as_deref(), Some(DIVERSE_ETH));
        assert_eq!(result.address_type, AddressType::Eth);
    }

    #[test]
    fn test_normalization_strips_separator_controls() {
        let result = analyze_address("\u{1f}0x742d35cc6634c0532925a3b8d44c9d4e8e8f1a2b\u{1c}");
        assert_eq!(result.address_type, AddressType::Eth);
        assert_eq!(result.address.as_deref(), Some(DIVERSE_ETH));
        assert_eq!(trim_input("\u{1d}\u{1e} abc \t"), "abc");
    }

    #[test]
    fn test_invalid_short_address() {
        let result = analyze_address("hello");
        assert!(!result.valid);
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.risk_level, RiskLevel::Unknown);
        assert_eq!(result.flags, vec!["Invalid address format".to_string()]);
        assert_eq!(result.details.len(), 1);
        assert!(result.simulated_stats.is_none());
    }

    #[test]
    fn test_zero_address_is_high_risk() {
        let result = analyze_address("0x0000000000000000000000000000000000000000");
        assert!(result.valid);
        assert_eq!(result.address_type, AddressType::Eth);
        assert_eq!(result.risk_score, 100);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.flags[0], "⛔ Known scam/burn address");
        assert_eq!(result.flags.len(), 3);
    }

    #[test]
    fn test_entropy_strips_inner_0x() {
        assert_eq!(unique_char_count("0xab0xab"), 2);
        assert_eq!(unique_char_count("a0xb"), 2);
        assert_eq!(unique_char_count("0x0"), 1);
    }

    #[test]
    fn test_low_entropy_adds_detail() {
        let result = analyze_address_with("aaaaaaaaaaaaaaaaaaaaaaaa", &fixed(0, 100, 1000));
        assert_eq!(result.address_type, AddressType::TracOther);
        assert_eq!(result.risk_score, 30);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.details.len(), 1);
    }

    #[test]
    fn test_zero_count_threshold() {
        // 10 zeros: not flagged; 11 zeros: flagged
        let ten = "abcdefghij0000000000";
        let eleven = "abcdefghij00000000000";
        assert_eq!(analyze_address_with(ten, &fixed(0, 100, 1)).risk_score, 0);
        assert_eq!(analyze_address_with(eleven, &fixed(0, 100, 1)).risk_score, 20);
    }

    #[test]
    fn test_activity_rules_are_additive() {
        let quiet = analyze_address_with(DIVERSE_ETH, &fixed(10, 200, 5000));
        assert_eq!(quiet.risk_score, 0);
        assert_eq!(quiet.flags, vec!["No suspicious patterns detected.".to_string()]);

        let frequent = analyze_address_with(DIVERSE_ETH, &fixed(2500, 20, 5000));
        assert_eq!(frequent.risk_score, 35);
        assert_eq!(frequent.details[0], "~2500 txs in 20 days suggests bot or spam activity.");

        let new_and_busy = analyze_address_with(DIVERSE_ETH, &fixed(2500, 3, 5000));
        assert_eq!(new_and_busy.risk_score, 60);
        assert_eq!(new_and_busy.risk_level, RiskLevel::Medium);

        let dust = analyze_address_with(DIVERSE_ETH, &fixed(2500, 3, 0));
        assert_eq!(dust.risk_score, 75);
        assert_eq!(dust.risk_level, RiskLevel::High);
        assert_eq!(dust.flags.len(), 3);
    }

    #[test]
    fn test_activity_boundaries_are_strict() {
        assert_eq!(analyze_address_with(DIVERSE_ETH, &fixed(2000, 10, 1)).risk_score, 0);
        assert_eq!(analyze_address_with(DIVERSE_ETH, &fixed(2001, 30, 1)).risk_score, 0);
        assert_eq!(analyze_address_with(DIVERSE_ETH, &fixed(100, 6, 1)).risk_score, 0);
        assert_eq!(analyze_address_with(DIVERSE_ETH, &fixed(101, 7, 1)).risk_score, 0);
        assert_eq!(analyze_address_with(DIVERSE_ETH, &fixed(500, 100, 0)).risk_score, 0);
        assert_eq!(analyze_address_with(DIVERSE_ETH, &fixed(501, 100, 0)).risk_score, 15);
    }

    #[test]
    fn test_hashed_activity_vectors() {
        let frequent = analyze_address("0x92cfceb39d57d914ed8b14d0e37643de0797ae56");
        assert_eq!(frequent.risk_score, 35);

        let new_wallet = analyze_address("0x12f0de3dc76e067d21ed85125716e02e9f1e69f0");
        assert_eq!(new_wallet.risk_score, 25);

        let both = analyze_address("0xd02560dd9d7db4467627745bd6701e809ffca6e3");
        assert_eq!(both.risk_score, 60);
        assert_eq!(both.details.len(), 2);
    }
}
