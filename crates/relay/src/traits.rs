use async_trait::async_trait;
use common::models::{DispatchResult, RenderedMessage};

/// The outbound delivery seam. The production implementation speaks to the
/// Telegram Bot API; tests substitute their own.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Performs at most one delivery attempt and maps the platform's answer
    /// to a [`DispatchResult`]. Never retries.
    async fn dispatch(
        &self,
        bot_token: &str,
        chat_id: &str,
        message: &RenderedMessage,
    ) -> DispatchResult;
}
