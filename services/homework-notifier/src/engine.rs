//! Engine: polls the review source and forwards status changes

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::homework::{check_response, current_date, parse_status};
use crate::notifier::{send_message, Notifier};
use crate::practicum::ReviewSource;

/// Mutable state carried from one poll to the next
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Last status message forwarded to the chat
    pub last_status_message: String,
    /// Last failure message forwarded to the chat
    pub last_error_message: String,
    /// Timestamp passed as `from_date` on the next fetch
    pub from_date: Option<i64>,
}

impl PollState {
    pub fn new(from_date: i64) -> Self {
        Self {
            from_date: Some(from_date),
            ..Self::default()
        }
    }
}

/// What a single poll ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The response carried no homework records
    NoHomeworks,
    /// The status matched the last forwarded one
    Unchanged,
    /// A new status message was forwarded
    StatusSent(String),
    /// The poll failed; `notified` is false when the failure repeated the last one
    Failed { message: String, notified: bool },
}

/// The engine orchestrates polling the source and dispatching notifications
#[derive(Debug)]
pub struct Engine {
    source: Arc<dyn ReviewSource>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    cancel: CancellationToken,
}

impl Engine {
    pub fn new(
        source: Arc<dyn ReviewSource>,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            source,
            notifier,
            interval,
            cancel,
        }
    }

    /// Poll until the cancellation token is triggered.
    pub async fn run(&self, mut state: PollState) -> PollState {
        loop {
            let outcome = self.poll_once(&mut state).await;
            tracing::debug!("Poll finished: {:?}", outcome);

            // Sleep after every poll, whatever it produced.
            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Polling loop cancelled");
                    break;
                }
            }
        }
        state
    }

    /// Run one fetch/validate/notify cycle and fold failures into a message.
    pub async fn poll_once(&self, state: &mut PollState) -> PollOutcome {
        match self.check_for_update(state).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = format!("Сбой в работе программы: {}", e);
                tracing::error!("{}", message);

                let notified = state.last_error_message != message;
                if notified {
                    send_message(self.notifier.as_ref(), &message).await;
                    state.last_error_message = message.clone();
                } else {
                    tracing::debug!("Repeated failure, notification suppressed");
                }
                PollOutcome::Failed { message, notified }
            }
        }
    }

    async fn check_for_update(&self, state: &mut PollState) -> crate::Result<PollOutcome> {
        let response = self.source.get_api_answer(state.from_date).await?;

        if let Some(next) = current_date(&response) {
            state.from_date = Some(next);
        }

        let homeworks = check_response(&response)?;
        let Some(latest) = homeworks.first() else {
            tracing::debug!("В ответе нет новых статусов!");
            return Ok(PollOutcome::NoHomeworks);
        };

        let message = parse_status(latest)?;
        if message == state.last_status_message {
            tracing::debug!("Статус не изменился: {}", message);
            return Ok(PollOutcome::Unchanged);
        }

        send_message(self.notifier.as_ref(), &message).await;
        state.last_status_message = message.clone();
        Ok(PollOutcome::StatusSent(message))
    }
}
