//! Notifier trait for delivering chat messages

use async_trait::async_trait;

/// Trait for sending notifications
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Get the notifier type name (e.g. "telegram")
    fn type_name(&self) -> &str;

    /// Deliver a message, failing with `DeliveryFailed`
    async fn notify(&self, message: &str) -> crate::Result<()>;
}

/// Deliver `message` on a best-effort basis.
///
/// Failures are logged and swallowed so they never interrupt polling.
/// Returns whether the message was delivered.
pub async fn send_message(notifier: &dyn Notifier, message: &str) -> bool {
    match notifier.notify(message).await {
        Ok(()) => {
            tracing::info!("Бот отправил сообщение: {}", message);
            true
        }
        Err(e) => {
            tracing::error!(notifier = notifier.type_name(), "{}", e);
            false
        }
    }
}
