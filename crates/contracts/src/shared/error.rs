use serde::{Deserialize, Serialize};

/// Результат операции уровня контрактов
pub type DataResult<T> = Result<T, DataError>;

/// Ошибка уровня контрактов. Сериализуется и показывается на UI как есть.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl DataError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Отсутствует или пусто обязательное поле входной записи
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Нарушен инвариант пагинации (страница < 1 и т.п.)
    pub fn range(message: impl Into<String>) -> Self {
        Self::new("RANGE_ERROR", message)
    }

    /// Некорректный payload или неожиданная форма ответа API
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new("DECODE_ERROR", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for DataError {}

impl From<anyhow::Error> for DataError {
    fn from(err: anyhow::Error) -> Self {
        DataError::internal(err.to_string())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_details() {
        let err = DataError::range("page must be >= 1").with_details("got 0");
        assert_eq!(err.to_string(), "[RANGE_ERROR] page must be >= 1: got 0");
    }

    #[test]
    fn test_serde_json_error_maps_to_decode() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = DataError::from(parse_err);
        assert_eq!(err.code, "DECODE_ERROR");
    }
}
