//! Error types for the homework notifier
//!
//! The domain variants render the user-facing texts that end up in the
//! failure notification, so their messages are kept in Russian.

/// Errors that can occur in the homework notifier
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ошибка при запросе к API: {0}")]
    RequestFailed(String),

    #[error("Ответ от API не содержит словарь!")]
    NotAMapping,

    #[error("Ответ от API содержит пустой словарь!")]
    EmptyResponse,

    #[error("Ответ от API не содержит ключа `homeworks`!")]
    MissingHomeworksKey,

    #[error("Домашняя работа в ответе от API получена не в виде списка!")]
    HomeworksNotSequence,

    #[error("Ключ [homework_name] не найден в словаре!")]
    MissingNameKey,

    #[error("Ключ [status] не найден в словаре!")]
    MissingStatusKey,

    #[error("Статус домашней работы не документирован: {0}")]
    UnknownStatus(String),

    #[error("Сбой при отправке сообщения в Telegram: {0}")]
    DeliveryFailed(String),
}

/// Result type alias for notifier operations
pub type Result<T> = std::result::Result<T, NotifierError>;
