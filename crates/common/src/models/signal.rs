use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a trading signal. Inbound payloads are accepted
/// case-insensitively and normalized to the uppercase wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalType {
    Buy,
    Sell,
}

impl SignalType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "BUY" => Some(Self::Buy),
            "SELL" => Some(Self::Sell),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully validated trading signal. Only the validator constructs this;
/// everything downstream can rely on the fields being well-formed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRequest {
    pub signal_type: SignalType,
    pub symbol: String,
    pub entry_price: f64,
    pub tp_price: f64,
    pub sl_price: f64,
    pub bot_token: String,
    pub confidence: Option<u8>,
    pub signal_category: Option<String>,
    pub timestamp: Option<i64>,
    pub channel_id: Option<String>,
}

/// Rendered message text, produced once per valid signal and sent as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage(String);

impl RenderedMessage {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of the single outbound delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    Delivered,
    PlatformRejected(String),
    NetworkFailure,
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_type_parses_case_insensitively() {
        assert_eq!(SignalType::parse("buy"), Some(SignalType::Buy));
        assert_eq!(SignalType::parse("BUY"), Some(SignalType::Buy));
        assert_eq!(SignalType::parse("Sell"), Some(SignalType::Sell));
        assert_eq!(SignalType::parse("hold"), None);
    }

    #[test]
    fn test_signal_type_serializes_uppercase() {
        assert_eq!(serde_json::to_value(SignalType::Buy).unwrap(), "BUY");
        assert_eq!(serde_json::to_value(SignalType::Sell).unwrap(), "SELL");
    }
}
