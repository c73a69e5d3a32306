//! Intent Router
//!
//! Decides what a piece of user text is asking for, first match wins:
//! 1. an embedded ETH/BTC address → address check
//! 2. an explicit "is this safe?" style question → message check
//! 3. a greeting or help request → static onboarding text
//! 4. anything else → message check
//!
//! The router is total: every string, including the empty one, yields
//! exactly one `IntentResult`.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::info;

use super::address::{analyze_address, trim_input};
use super::message::analyze_message;
use crate::models::types::{HelpPayload, IntentResult};
use crate::utils::constants::{
    BTC_TOKEN_PATTERN, ETH_TOKEN_PATTERN, HELP_MESSAGE, HELP_PHRASES, MESSAGE_CHECK_PHRASES,
};

lazy_static! {
    static ref ETH_TOKEN_REGEX: Regex = Regex::new(ETH_TOKEN_PATTERN).expect("ETH token pattern");
    static ref BTC_TOKEN_REGEX: Regex = Regex::new(BTC_TOKEN_PATTERN).expect("BTC token pattern");
}

/// First address-looking token in `text`; ETH takes precedence over BTC
pub fn extract_address(text: &str) -> Option<&str> {
    ETH_TOKEN_REGEX
        .find(text)
        .or_else(|| BTC_TOKEN_REGEX.find(text))
        .map(|m| m.as_str())
}

fn contains_any(lowered: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| lowered.contains(p))
}

/// Explicit request to check a message
pub fn is_message_check_request(lowered: &str) -> bool {
    contains_any(lowered, &MESSAGE_CHECK_PHRASES)
}

/// Greeting or help request
pub fn is_help_request(lowered: &str) -> bool {
    contains_any(lowered, &HELP_PHRASES)
}

/// Fixed onboarding payload
pub fn help_payload() -> HelpPayload {
    HelpPayload {
        message: HELP_MESSAGE.to_string(),
    }
}

/// Parse user input and route to the appropriate analysis
pub fn route(user_input: &str) -> IntentResult {
    let text = trim_input(user_input);

    if let Some(address) = extract_address(text) {
        info!("🔍 Address check: {}", address);
        return IntentResult::AddressCheck(analyze_address(address));
    }

    let lowered = text.to_lowercase();

    if is_message_check_request(&lowered) {
        info!("💬 Message check requested ({} chars)", text.chars().count());
        return IntentResult::MessageCheck(analyze_message(text));
    }

    if is_help_request(&lowered) {
        info!("👋 Help requested");
        return IntentResult::Help(help_payload());
    }

    info!("💬 Default message check ({} chars)", text.chars().count());
    IntentResult::MessageCheck(analyze_message(text))
}
