use serde::{Deserialize, Serialize};

/// Уровень записи лога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Запись лога системы
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    pub level: LogLevel,
    pub source: String, // "client" или "server"
    pub category: String,
    pub message: String,
}

/// DTO для создания новой записи лога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    pub level: LogLevel,
    pub source: String,
    pub category: String,
    pub message: String,
}

impl CreateLogRequest {
    /// Запись от клиентской части дашборда
    pub fn client(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Info,
            source: "client".to_string(),
            category: category.into(),
            message: message.into(),
        }
    }

    /// Ошибка клиентской части дашборда
    pub fn client_error(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Error,
            source: "client".to_string(),
            category: category.into(),
            message: message.into(),
        }
    }
}
