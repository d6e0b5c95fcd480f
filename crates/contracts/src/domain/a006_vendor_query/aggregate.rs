use crate::shared::list::{Searchable, Sortable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Отправитель сообщения в переписке по запросу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    Vendor,
    Admin,
}

impl SenderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SenderType::Vendor => "vendor",
            SenderType::Admin => "admin",
        }
    }
}

/// Тип сообщения в переписке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Query,
    Response,
    Followup,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Query => "query",
            MessageKind::Response => "response",
            MessageKind::Followup => "followup",
        }
    }
}

/// Статус запроса поставщика (нормализованный для UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryStatus {
    Pending,
    InProgress,
    Resolved,
    Closed,
}

impl QueryStatus {
    /// Отображение сырого `query_status` из API; неизвестные значения
    /// всегда деградируют в Pending, никогда не ошибка
    pub fn from_query_status(raw: &str) -> Self {
        match raw {
            "open" => QueryStatus::Pending,
            "in_progress" => QueryStatus::InProgress,
            "resolved" => QueryStatus::Resolved,
            "closed" => QueryStatus::Closed,
            other => {
                log::warn!("Unknown query_status '{}', defaulting to pending", other);
                QueryStatus::Pending
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStatus::Pending => "pending",
            QueryStatus::InProgress => "in-progress",
            QueryStatus::Resolved => "resolved",
            QueryStatus::Closed => "closed",
        }
    }
}

/// Приоритет запроса, выводимый из его категории.
/// Порядок вариантов задаёт и порядок сортировки (Urgent первым).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryPriority {
    Urgent,
    High,
    Medium,
    Low,
}

impl QueryPriority {
    /// Вывести приоритет из названия категории.
    /// Правила проверяются по порядку, выигрывает первое совпадение.
    pub fn from_category(category: &str) -> Self {
        let category = category.to_lowercase();
        if category.contains("urgent") || category.contains("critical") {
            QueryPriority::Urgent
        } else if category.contains("payment") || category.contains("billing") {
            QueryPriority::High
        } else if category.contains("technical") || category.contains("application") {
            QueryPriority::Medium
        } else {
            QueryPriority::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryPriority::Urgent => "urgent",
            QueryPriority::High => "high",
            QueryPriority::Medium => "medium",
            QueryPriority::Low => "low",
        }
    }
}

/// Сообщение переписки по запросу поставщика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub sender_type: SenderType,
    pub user_id: String,
    pub username: String,
    pub message: String,
    /// ISO-8601, копируется как есть; не участвует в дедупликации
    pub timestamp: String,
}

impl QueryMessage {
    /// Ключ дедупликации: текст + отправитель + тип
    pub fn dedup_key(&self) -> (String, SenderType, MessageKind) {
        (self.message.clone(), self.sender_type, self.kind)
    }
}

/// Дополнительное сообщение поставщика после первичного ответа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUp {
    /// Синтетический id вида "{id записи}-{позиция}"
    pub id: String,
    #[serde(flatten)]
    pub message: QueryMessage,
}

/// Запрос поставщика, нормализованный для UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorQuery {
    pub id: String,
    pub title: String,
    pub category: String,
    pub status: QueryStatus,
    pub priority: QueryPriority,
    /// Текст первого сообщения типа query; пустая строка, если его нет
    pub description: String,
    /// Имя автора первого сообщения треда, либо "Unknown Vendor"
    pub vendor_name: String,
    /// Тред без дубликатов (выживает первое вхождение)
    pub thread: Vec<QueryMessage>,
    pub admin_response: Option<String>,
    pub admin_name: Option<String>,
    pub assigned_to: Option<String>,
    pub follow_ups: Vec<FollowUp>,
    pub unread_count: u32,
    pub last_message: String,
}

impl Searchable for VendorQuery {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.title.to_lowercase().contains(&filter)
            || self.category.to_lowercase().contains(&filter)
            || self.vendor_name.to_lowercase().contains(&filter)
            || self.description.to_lowercase().contains(&filter)
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "title" => Some(self.title.clone()),
            "category" => Some(self.category.clone()),
            "vendor_name" => Some(self.vendor_name.clone()),
            "description" => Some(self.description.clone()),
            _ => None,
        }
    }
}

impl Sortable for VendorQuery {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "priority" => self.priority.cmp(&other.priority),
            "vendor_name" => self
                .vendor_name
                .to_lowercase()
                .cmp(&other.vendor_name.to_lowercase()),
            "unread_count" => self.unread_count.cmp(&other.unread_count),
            _ => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
        }
    }
}
