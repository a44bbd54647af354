//! Homework notifier - review status poller
//!
//! Polls the Practicum homework-status API, detects changes in the review
//! status of the latest submission, and forwards them to a Telegram chat.

pub mod config;
pub mod engine;
pub mod error;
pub mod homework;
pub mod io;
pub mod notifier;
pub mod practicum;
pub mod telegram;


pub use config::{load_config, Config, Credentials};
pub use error::{NotifierError, Result};

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::engine::{Engine, PollState};
use crate::io::ReqwestHttpClient;
use crate::practicum::PracticumClient;
use crate::telegram::TelegramNotifier;

/// Run the notifier with the given configuration until Ctrl-C
pub async fn run(config: Config, credentials: Credentials) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::with_timeout(
        Duration::from_secs(config.request_timeout_seconds),
    )?);
    let cancel = CancellationToken::new();

    let source = Arc::new(PracticumClient::new(
        &config.endpoint,
        &credentials.practicum_token,
        Arc::clone(&http),
    ));
    let notifier = Arc::new(TelegramNotifier::new(
        &config.telegram_api_url,
        &credentials.telegram_token,
        &credentials.telegram_chat_id,
        Arc::clone(&http),
    ));

    let engine = Engine::new(
        source,
        notifier,
        Duration::from_secs(config.poll_interval_seconds),
        cancel.clone(),
    );

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    tracing::info!(
        "Homework notifier started, polling every {}s",
        config.poll_interval_seconds
    );

    let state = engine
        .run(PollState::new(practicum::current_epoch_secs()))
        .await;

    tracing::info!(
        "Homework notifier stopped, last from_date={:?}",
        state.from_date
    );

    Ok(())
}
