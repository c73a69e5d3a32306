//! Type definitions for the risk detector
//! Value objects produced by the scorers and the intent router

use serde::{Serialize, Serializer};

use crate::utils::constants::{
    ADDRESS_HIGH_THRESHOLD, ADDRESS_LOW_THRESHOLD, ADDRESS_MEDIUM_THRESHOLD, SIM_BALANCE_SCALE,
    VERDICT_ADDRESS_HIGH, VERDICT_ADDRESS_LOW, VERDICT_ADDRESS_MEDIUM, VERDICT_ADDRESS_SAFE,
    VERDICT_ADDRESS_UNKNOWN,
};

/// Detected address format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressType {
    #[serde(rename = "ETH")]
    Eth,
    #[serde(rename = "BTC")]
    Btc,
    /// Permissive catch-all for anything >= 20 characters
    #[serde(rename = "TRAC/OTHER")]
    TracOther,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::Eth => "ETH",
            AddressType::Btc => "BTC",
            AddressType::TracOther => "TRAC/OTHER",
            AddressType::Unknown => "UNKNOWN",
        }
    }
}

/// Risk level classification for addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Address format not recognized, nothing scored
    Unknown,
    Safe,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a score, evaluated high-to-low
    pub fn from_score(score: u8) -> Self {
        if score >= ADDRESS_HIGH_THRESHOLD {
            RiskLevel::High
        } else if score >= ADDRESS_MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else if score >= ADDRESS_LOW_THRESHOLD {
            RiskLevel::Low
        } else {
            RiskLevel::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Unknown => "UNKNOWN",
            RiskLevel::Safe => "SAFE",
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            RiskLevel::Unknown => VERDICT_ADDRESS_UNKNOWN,
            RiskLevel::Safe => VERDICT_ADDRESS_SAFE,
            RiskLevel::Low => VERDICT_ADDRESS_LOW,
            RiskLevel::Medium => VERDICT_ADDRESS_MEDIUM,
            RiskLevel::High => VERDICT_ADDRESS_HIGH,
        }
    }
}

/// Synthetic "on-chain" statistics derived from an address string.
///
/// Not real ledger data. The balance is kept as an integer count of
/// thousandths so formatting never depends on float rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivitySnapshot {
    pub tx_count: u64,
    pub age_days: u64,
    pub balance_milli: u64,
}

impl ActivitySnapshot {
    pub fn is_empty_balance(&self) -> bool {
        self.balance_milli == 0
    }

    /// Balance with exactly three decimals, e.g. `"42.007"`
    pub fn formatted_balance(&self) -> String {
        format!(
            "{}.{:03}",
            self.balance_milli / SIM_BALANCE_SCALE,
            self.balance_milli % SIM_BALANCE_SCALE
        )
    }
}

impl Serialize for ActivitySnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ActivitySnapshot", 3)?;
        state.serialize_field("estimated_tx_count", &self.tx_count)?;
        state.serialize_field("wallet_age_days", &self.age_days)?;
        state.serialize_field("estimated_balance", &self.formatted_balance())?;
        state.end()
    }
}

/// Result of analyzing a single address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "is_unknown_type")]
    pub address_type: AddressType,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub verdict: String,
    /// Triggered flags in evaluation order, never empty
    pub flags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated_stats: Option<ActivitySnapshot>,
    pub details: Vec<String>,
}

fn is_unknown_type(address_type: &AddressType) -> bool {
    *address_type == AddressType::Unknown
}

/// Result of analyzing a free-text message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageAssessment {
    /// Always `"message_analysis"` on the wire
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub risk_score: u8,
    pub verdict: String,
    /// Triggered flags in evaluation order, never empty
    pub flags: Vec<String>,
}

/// Static onboarding payload returned for greetings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HelpPayload {
    pub message: String,
}

/// Classified purpose of a user's input together with its result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "intent", content = "result", rename_all = "snake_case")]
pub enum IntentResult {
    AddressCheck(RiskAssessment),
    MessageCheck(MessageAssessment),
    Help(HelpPayload),
}

impl IntentResult {
    pub fn intent(&self) -> &'static str {
        match self {
            IntentResult::AddressCheck(_) => "address_check",
            IntentResult::MessageCheck(_) => "message_check",
            IntentResult::Help(_) => "help",
        }
    }

    /// Risk score of the underlying assessment, `None` for help
    pub fn risk_score(&self) -> Option<u8> {
        match self {
            IntentResult::AddressCheck(r) => Some(r.risk_score),
            IntentResult::MessageCheck(r) => Some(r.risk_score),
            IntentResult::Help(_) => None,
        }
    }
}
