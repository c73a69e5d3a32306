//! Message Scorer
//!
//! Scans free text for scam keywords, URLs and urgency language.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::risk_score::RiskScoreBuilder;
use crate::models::types::MessageAssessment;
use crate::utils::constants::*;

lazy_static! {
    static ref URL_REGEX: Regex = Regex::new(URL_PATTERN).expect("URL pattern");
    static ref URGENCY_REGEX: Regex = Regex::new(URGENCY_PATTERN).expect("urgency pattern");
}

/// Wire tag carried by every message assessment
pub const MESSAGE_ANALYSIS_KIND: &str = "message_analysis";

/// Keywords from the fixed list found in `lowered`, in list order
pub fn matched_keywords(lowered: &str) -> Vec<&'static str> {
    SUSPICIOUS_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| lowered.contains(kw))
        .collect()
}

/// Number of http(s) URL tokens in the original text
pub fn count_urls(text: &str) -> usize {
    URL_REGEX.find_iter(text).count()
}

/// True if any urgency phrase appears as a whole word
pub fn has_urgency(lowered: &str) -> bool {
    URGENCY_REGEX.is_match(lowered)
}

/// Verdict bucket for a message score
pub fn message_verdict(score: u8) -> &'static str {
    if score >= MESSAGE_HIGH_THRESHOLD {
        VERDICT_MESSAGE_HIGH
    } else if score >= MESSAGE_SUSPICIOUS_THRESHOLD {
        VERDICT_MESSAGE_SUSPICIOUS
    } else {
        VERDICT_MESSAGE_LOW
    }
}

/// Analyze a text message for scam indicators
pub fn analyze_message(text: &str) -> MessageAssessment {
    let lowered = text.to_lowercase();

    let mut builder = matched_keywords(&lowered)
        .into_iter()
        .fold(RiskScoreBuilder::new(), |b, kw| {
            b.with_signal(
                WEIGHT_KEYWORD,
                format!("⚠️ Suspicious keyword detected: '{}'", kw),
            )
        });

    let urls = count_urls(text);
    builder = builder.with_signal_if(
        urls > 0,
        WEIGHT_URL,
        format!("🔗 Contains {} URL(s) — verify before clicking", urls),
    );

    builder = builder.with_signal_if(
        has_urgency(&lowered),
        WEIGHT_URGENCY,
        "🚨 Urgency language detected — classic social engineering tactic",
    );

    let score = builder.build(FLAG_NO_MESSAGE_SIGNALS);
    debug!(
        score = score.total,
        raw = score.raw_total,
        signals = score.has_signals(),
        urls,
        "message scored"
    );

    MessageAssessment {
        kind: MESSAGE_ANALYSIS_KIND,
        risk_score: score.total,
        verdict: message_verdict(score.total).to_string(),
        flags: score.flags,
    }
}
