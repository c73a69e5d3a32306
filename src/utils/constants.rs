//! Constants Module - Single Source of Truth
//!
//! Every fixed table used by the scorers and the router lives here:
//! deny-list, keyword list, urgency phrases, intent phrases, weights,
//! thresholds and verdict strings. No other module hardcodes these.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name (reported by /api/health)
pub const APP_NAME: &str = "TRAC-Risk-Detector";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Network label shown on the dashboard stats
pub const NETWORK_NAME: &str = "Trac / Intercom P2P";

// ============================================
// ADDRESS FORMATS
// ============================================

/// ETH: `0x` + 40 lowercase hex (matched against the normalized address)
pub const ETH_ADDRESS_PATTERN: &str = r"^0x[0-9a-f]{40}$";

/// BTC legacy (`1`/`3` prefix) or bech32 (`bc1`)
pub const BTC_ADDRESS_PATTERN: &str =
    r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$|^bc1[a-z0-9]{39,59}$";

/// ETH token embedded anywhere in free text (case-insensitive hex)
pub const ETH_TOKEN_PATTERN: &str = r"0x[0-9a-fA-F]{40}";

/// BTC token embedded in free text, word-boundary anchored
pub const BTC_TOKEN_PATTERN: &str =
    r"\b[13][a-km-zA-HJ-NP-Z1-9]{25,34}\b|\bbc1[a-z0-9]{39,59}\b";

/// Anything shorter than this that is neither ETH nor BTC is rejected
pub const MIN_FALLBACK_ADDRESS_LEN: usize = 20;

// ============================================
// ADDRESS SIGNALS
// ============================================

/// Known scam / burn addresses (normalized form)
pub const KNOWN_SCAM_ADDRESSES: [&str; 2] = [
    "0x000000000000000000000000000000000000dead",
    "0x0000000000000000000000000000000000000000",
];

pub const WEIGHT_KNOWN_SCAM: u32 = 90;
pub const WEIGHT_LOW_ENTROPY: u32 = 30;
pub const WEIGHT_HIGH_ZERO_COUNT: u32 = 20;
pub const WEIGHT_HIGH_TX_FREQUENCY: u32 = 35;
pub const WEIGHT_NEW_ACTIVE_WALLET: u32 = 25;
pub const WEIGHT_DUST_ATTACKER: u32 = 15;

/// Fewer distinct characters than this (after removing "0x") is low entropy
pub const MIN_UNIQUE_CHARS: usize = 5;

/// More '0' glyphs than this looks like a vanity/generated address
pub const MAX_ZERO_COUNT: usize = 10;

pub const HIGH_FREQUENCY_MIN_TX: u64 = 2000;
pub const HIGH_FREQUENCY_MAX_AGE_DAYS: u64 = 30;
pub const NEW_WALLET_MAX_AGE_DAYS: u64 = 7;
pub const NEW_WALLET_MIN_TX: u64 = 100;
pub const DUST_ATTACKER_MIN_TX: u64 = 500;

// ============================================
// ACTIVITY SIMULATOR
// ============================================

pub const SIM_TX_MODULUS: u128 = 5000;
pub const SIM_AGE_MODULUS: u128 = 365;
pub const SIM_BALANCE_MODULUS: u128 = 100_000;

/// Balance is fixed-point with three decimals
pub const SIM_BALANCE_SCALE: u64 = 1000;

// ============================================
// MESSAGE SIGNALS
// ============================================

pub const SUSPICIOUS_KEYWORDS: [&str; 10] = [
    "free",
    "airdrop",
    "100x",
    "guaranteed",
    "send eth",
    "double your",
    "connect wallet",
    "claim now",
    "limited time",
    "whitelist",
];

/// Permissive URL token scan
pub const URL_PATTERN: &str = r"https?://\S+";

/// Urgency phrases, word-boundary anchored
pub const URGENCY_PATTERN: &str = r"\b(urgent|hurry|expire|last chance|act now)\b";

pub const WEIGHT_KEYWORD: u32 = 15;
pub const WEIGHT_URL: u32 = 20;
pub const WEIGHT_URGENCY: u32 = 25;

// ============================================
// SCORE THRESHOLDS
// ============================================

/// Upper bound for every score
pub const MAX_RISK_SCORE: u8 = 100;

pub const ADDRESS_HIGH_THRESHOLD: u8 = 70;
pub const ADDRESS_MEDIUM_THRESHOLD: u8 = 40;
pub const ADDRESS_LOW_THRESHOLD: u8 = 15;

pub const MESSAGE_HIGH_THRESHOLD: u8 = 60;
pub const MESSAGE_SUSPICIOUS_THRESHOLD: u8 = 30;

// ============================================
// VERDICTS & SENTINELS
// ============================================

pub const VERDICT_ADDRESS_HIGH: &str = "🔴 HIGH RISK — Avoid interaction with this address.";
pub const VERDICT_ADDRESS_MEDIUM: &str = "🟡 MEDIUM RISK — Proceed with caution.";
pub const VERDICT_ADDRESS_LOW: &str = "🟢 LOW RISK — Appears relatively safe, but always DYOR.";
pub const VERDICT_ADDRESS_SAFE: &str = "✅ SAFE — No significant risk signals detected.";
pub const VERDICT_ADDRESS_UNKNOWN: &str = "❓ UNKNOWN — Address format not recognized.";

pub const VERDICT_MESSAGE_HIGH: &str = "🔴 HIGH RISK message — likely a scam attempt.";
pub const VERDICT_MESSAGE_SUSPICIOUS: &str = "🟡 SUSPICIOUS — contains multiple red flags.";
pub const VERDICT_MESSAGE_LOW: &str = "🟢 LOW RISK — no obvious scam indicators.";

pub const FLAG_INVALID_FORMAT: &str = "Invalid address format";
pub const DETAIL_INVALID_FORMAT: &str =
    "Address format not recognized. Supported: ETH (0x...), BTC, TRAC.";
pub const FLAG_NO_ADDRESS_SIGNALS: &str = "No suspicious patterns detected.";
pub const FLAG_NO_MESSAGE_SIGNALS: &str = "No obvious scam patterns detected.";

// ============================================
// INTENT ROUTING
// ============================================

/// Explicit "is this safe?" requests
pub const MESSAGE_CHECK_PHRASES: [&str; 4] = ["is this", "check this message", "is it safe", "scam?"];

/// Greeting / help requests
pub const HELP_PHRASES: [&str; 4] = ["hello", "hi", "help", "what can"];

pub const HELP_MESSAGE: &str = "👋 Welcome to **TRAC Risk Detector**!\n\n\
I can help you:\n\
• **Check a wallet address** — paste any ETH/BTC/TRAC address\n\
• **Analyze a suspicious message** — paste it and ask 'is this safe?'\n\
• **Detect scam patterns** — I'll flag keywords, urgency tactics, and more\n\n\
Try: `Check this address: 0x742d35Cc6634C0532925a3b8D4C9D4...`";

// ============================================
// MOCK DASHBOARD RANGES
// ============================================

pub const STATS_TOTAL_ANALYZED: (u32, u32) = (1200, 1800);
pub const STATS_SCAMS_FLAGGED: (u32, u32) = (340, 500);
pub const STATS_SAFE_ADDRESSES: (u32, u32) = (700, 1100);
pub const STATS_UPTIME: &str = "99.9%";
