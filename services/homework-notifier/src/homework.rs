//! Homework review statuses and validation of API responses

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::NotifierError;

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Human-readable verdict sent to the chat
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for HomeworkStatus {
    type Err = NotifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(NotifierError::UnknownStatus(other.to_string())),
        }
    }
}

/// Check the shape of an API response and return its homework records.
///
/// The checks run in order and stop at the first violation.
pub fn check_response(response: &Value) -> crate::Result<&[Value]> {
    let map = response.as_object().ok_or(NotifierError::NotAMapping)?;
    if map.is_empty() {
        return Err(NotifierError::EmptyResponse);
    }
    let homeworks = map
        .get("homeworks")
        .ok_or(NotifierError::MissingHomeworksKey)?;
    match homeworks {
        Value::Array(records) => Ok(records.as_slice()),
        _ => Err(NotifierError::HomeworksNotSequence),
    }
}

/// Build the notification text for a single homework record
pub fn parse_status(homework: &Value) -> crate::Result<String> {
    let name = homework
        .get("homework_name")
        .ok_or(NotifierError::MissingNameKey)?;
    let status = homework
        .get("status")
        .ok_or(NotifierError::MissingStatusKey)?;

    let status: HomeworkStatus = match status {
        Value::String(code) => code.parse()?,
        other => return Err(NotifierError::UnknownStatus(other.to_string())),
    };

    let name = match name {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

/// The server time reported with a response, used as the next `from_date`
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}
