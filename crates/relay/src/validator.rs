use common::models::{SignalRequest, SignalType};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// A single field-level constraint violation, suitable for returning to the
/// caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
#[error("invalid signal payload: {} field violation(s)", .violations.len())]
pub struct ValidationFailure {
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    pub fn names(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }
}

/// Checks an untrusted JSON payload against the signal contract and produces
/// a typed [`SignalRequest`], or the complete list of violated constraints.
///
/// Numeric fields are accepted either as JSON numbers or as numeric strings
/// (MT5 expert advisors send both). A `null` value counts as absent. No
/// ordering is enforced between entry/tp/sl since SELL signals legitimately
/// invert them.
pub fn validate(payload: &Value) -> Result<SignalRequest, ValidationFailure> {
    let Some(obj) = payload.as_object() else {
        return Err(ValidationFailure {
            violations: vec![FieldViolation {
                field: "payload",
                message: "request body must be a JSON object".to_string(),
            }],
        });
    };

    let mut violations = Vec::new();

    let signal_type = required_text(obj, "signal_type", &mut violations).and_then(|raw| {
        let parsed = SignalType::parse(&raw);
        if parsed.is_none() {
            push(&mut violations, "signal_type", "must be BUY or SELL");
        }
        parsed
    });

    let symbol = required_text(obj, "symbol", &mut violations);
    let entry_price = required_price(obj, "entry_price", &mut violations);
    let tp_price = required_price(obj, "tp_price", &mut violations);
    let sl_price = required_price(obj, "sl_price", &mut violations);
    let bot_token = required_text(obj, "bot_token", &mut violations);

    let confidence = match present(obj, "confidence") {
        None => None,
        Some(value) => {
            let parsed = match value {
                Value::Number(n) => n.as_i64(),
                Value::String(s) => s.trim().parse::<i64>().ok(),
                _ => None,
            };
            match parsed {
                Some(c) if (0..=100).contains(&c) => Some(c as u8),
                Some(_) => {
                    push(&mut violations, "confidence", "must be between 0 and 100");
                    None
                }
                None => {
                    push(&mut violations, "confidence", "must be an integer");
                    None
                }
            }
        }
    };

    let signal_category = optional_text(obj, "signal_category", &mut violations);

    // Malformed timestamps are not worth rejecting a signal over; the
    // formatter falls back to the current time.
    let timestamp = present(obj, "timestamp").and_then(Value::as_i64);

    // `chat_id` is the legacy alias; `channel_id` wins when both are set.
    let channel_id = optional_text(obj, "channel_id", &mut violations)
        .or_else(|| optional_text(obj, "chat_id", &mut violations));

    match (signal_type, symbol, entry_price, tp_price, sl_price, bot_token) {
        (
            Some(signal_type),
            Some(symbol),
            Some(entry_price),
            Some(tp_price),
            Some(sl_price),
            Some(bot_token),
        ) if violations.is_empty() => Ok(SignalRequest {
            signal_type,
            symbol,
            entry_price,
            tp_price,
            sl_price,
            bot_token,
            confidence,
            signal_category,
            timestamp,
            channel_id,
        }),
        _ => Err(ValidationFailure { violations }),
    }
}

fn present<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

fn push(violations: &mut Vec<FieldViolation>, field: &'static str, message: &str) {
    violations.push(FieldViolation {
        field,
        message: message.to_string(),
    });
}

fn required_text(
    obj: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match present(obj, field) {
        None => {
            push(violations, field, "is required");
            None
        }
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::String(_)) => {
            push(violations, field, "must be a non-empty string");
            None
        }
        Some(_) => {
            push(violations, field, "must be a string");
            None
        }
    }
}

fn required_price(
    obj: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    let value = match present(obj, field) {
        None => {
            push(violations, field, "is required");
            return None;
        }
        Some(value) => value,
    };

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(price) if price.is_finite() => Some(price),
        Some(_) => {
            push(violations, field, "must be a finite number");
            None
        }
        None => {
            push(violations, field, "must be a number");
            None
        }
    }
}

fn optional_text(
    obj: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match present(obj, field) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            push(violations, field, "must be a string");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "signal_type": "buy",
            "symbol": "BOOM500",
            "entry_price": 4278.444,
            "tp_price": 4279.444,
            "sl_price": 4277.944,
            "confidence": 85,
            "bot_token": "T",
            "signal_category": "PREMIUM SIGNAL"
        })
    }

    #[test]
    fn test_accepts_full_payload_and_normalizes() {
        let signal = validate(&full_payload()).expect("payload should validate");

        assert_eq!(signal.signal_type, SignalType::Buy);
        assert_eq!(signal.symbol, "BOOM500");
        assert_eq!(signal.entry_price, 4278.444);
        assert_eq!(signal.confidence, Some(85));
        assert_eq!(signal.signal_category.as_deref(), Some("PREMIUM SIGNAL"));
        assert_eq!(signal.timestamp, None);
        assert_eq!(signal.channel_id, None);
    }

    #[test]
    fn test_empty_object_names_every_required_field() {
        let failure = validate(&json!({})).unwrap_err();
        let names = failure.names();

        for field in [
            "signal_type",
            "symbol",
            "entry_price",
            "tp_price",
            "sl_price",
            "bot_token",
        ] {
            assert!(names.contains(&field), "missing violation for {field}");
        }
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_missing_bot_token_is_named() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("bot_token");

        let failure = validate(&payload).unwrap_err();
        assert_eq!(failure.names(), vec!["bot_token"]);
    }

    #[test]
    fn test_null_required_field_counts_as_missing() {
        let mut payload = full_payload();
        payload["bot_token"] = Value::Null;

        let failure = validate(&payload).unwrap_err();
        assert_eq!(failure.names(), vec!["bot_token"]);
    }

    #[test]
    fn test_unknown_signal_type_rejected() {
        let mut payload = full_payload();
        payload["signal_type"] = json!("HOLD");

        let failure = validate(&payload).unwrap_err();
        assert_eq!(failure.names(), vec!["signal_type"]);
    }

    #[test]
    fn test_sell_accepted_lowercase() {
        let mut payload = full_payload();
        payload["signal_type"] = json!("sell");

        let signal = validate(&payload).unwrap();
        assert_eq!(signal.signal_type, SignalType::Sell);
    }

    #[test]
    fn test_empty_symbol_rejected() {
        let mut payload = full_payload();
        payload["symbol"] = json!("");

        let failure = validate(&payload).unwrap_err();
        assert_eq!(failure.names(), vec!["symbol"]);
    }

    #[test]
    fn test_prices_accept_numeric_strings() {
        let mut payload = full_payload();
        payload["entry_price"] = json!("4278.444");

        let signal = validate(&payload).unwrap();
        assert_eq!(signal.entry_price, 4278.444);
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let mut payload = full_payload();
        payload["entry_price"] = json!("inf");

        let failure = validate(&payload).unwrap_err();
        assert_eq!(failure.names(), vec!["entry_price"]);
        assert_eq!(failure.violations[0].message, "must be a finite number");
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let mut payload = full_payload();
        payload["tp_price"] = json!(true);

        let failure = validate(&payload).unwrap_err();
        assert_eq!(failure.names(), vec!["tp_price"]);
    }

    #[test]
    fn test_confidence_boundaries() {
        for ok in [0, 100] {
            let mut payload = full_payload();
            payload["confidence"] = json!(ok);
            let signal = validate(&payload).unwrap();
            assert_eq!(signal.confidence, Some(ok as u8));
        }

        for bad in [-1, 101] {
            let mut payload = full_payload();
            payload["confidence"] = json!(bad);
            let failure = validate(&payload).unwrap_err();
            assert_eq!(failure.names(), vec!["confidence"]);
        }
    }

    #[test]
    fn test_confidence_must_be_integral() {
        let mut payload = full_payload();
        payload["confidence"] = json!(85.5);

        let failure = validate(&payload).unwrap_err();
        assert_eq!(failure.violations[0].message, "must be an integer");
    }

    #[test]
    fn test_confidence_absent_stays_absent() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("confidence");

        let signal = validate(&payload).unwrap();
        assert_eq!(signal.confidence, None);
    }

    #[test]
    fn test_chat_id_alias_used_when_channel_id_absent() {
        let mut payload = full_payload();
        payload["chat_id"] = json!("@legacy");

        let signal = validate(&payload).unwrap();
        assert_eq!(signal.channel_id.as_deref(), Some("@legacy"));
    }

    #[test]
    fn test_channel_id_wins_over_chat_id() {
        let mut payload = full_payload();
        payload["channel_id"] = json!("@primary");
        payload["chat_id"] = json!("@legacy");

        let signal = validate(&payload).unwrap();
        assert_eq!(signal.channel_id.as_deref(), Some("@primary"));
    }

    #[test]
    fn test_malformed_timestamp_treated_as_absent() {
        let mut payload = full_payload();
        payload["timestamp"] = json!("not-a-time");

        let signal = validate(&payload).unwrap();
        assert_eq!(signal.timestamp, None);
    }

    #[test]
    fn test_integer_timestamp_kept() {
        let mut payload = full_payload();
        payload["timestamp"] = json!(1705312200);

        let signal = validate(&payload).unwrap();
        assert_eq!(signal.timestamp, Some(1705312200));
    }

    #[test]
    fn test_multiple_violations_reported_together() {
        let payload = json!({
            "signal_type": "HOLD",
            "symbol": "BOOM500",
            "entry_price": "abc",
            "tp_price": 4279.444,
            "sl_price": 4277.944,
            "bot_token": "T",
            "confidence": 101
        });

        let failure = validate(&payload).unwrap_err();
        let names = failure.names();
        assert!(names.contains(&"signal_type"));
        assert!(names.contains(&"entry_price"));
        assert!(names.contains(&"confidence"));
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_non_object_payload_rejected() {
        let failure = validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(failure.names(), vec!["payload"]);
    }
}
