use chrono::{DateTime, Utc};
use common::models::{RenderedMessage, SignalRequest};

const BANNER: &str = "SPIKECAST PREMIUM SIGNALS";
const RULE: &str = "-----------------------------------";
const FOOTER: &str = "Professional Trading Signals\n\
                      Support: @SpikecastSupport\n\
                      Risk Warning: Trading involves risk\n\
                      Powered by Spikecast";

/// Renders the fixed plain-text message for a validated signal.
///
/// Pure and total: `now` is an explicit argument so output is byte-for-byte
/// reproducible, and it is only consulted when the signal carries no
/// timestamp. Prices render with `{:.5}`, i.e. the f64's exact binary value
/// rounded half-to-even at the fifth fractional digit.
pub fn format_signal(
    signal: &SignalRequest,
    default_category: &str,
    now: DateTime<Utc>,
) -> RenderedMessage {
    let at = signal
        .timestamp
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or(now);
    let category = signal.signal_category.as_deref().unwrap_or(default_category);

    let mut text = format!(
        "{BANNER}\n{RULE}\n\n{side} SIGNAL\n\n{category}\n\n{side} {symbol}\n\n\
         Entry: {entry:.5}\nTake Profit: {tp:.5}\nStop Loss: {sl:.5}\n\n",
        side = signal.signal_type,
        symbol = signal.symbol,
        entry = signal.entry_price,
        tp = signal.tp_price,
        sl = signal.sl_price,
    );

    if let Some(confidence) = signal.confidence {
        text.push_str(&format!("Confidence: {confidence}%\n"));
    }

    text.push_str(&format!(
        "Time: {}\n\n{FOOTER}\n\n{RULE}",
        at.format("%Y.%m.%d %H:%M")
    ));

    RenderedMessage::new(text)
}
