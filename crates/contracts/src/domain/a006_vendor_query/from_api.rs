//! Декодирование и нормализация записей запросов поставщиков из REST API

use super::aggregate::{
    FollowUp, MessageKind, QueryMessage, QueryPriority, QueryStatus, SenderType, VendorQuery,
};
use crate::shared::api_envelope::decode_list;
use crate::shared::error::DataError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Сырая запись запроса из API (до нормализации)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQueryRecord {
    pub id: i64,

    pub sender_user_id: String,

    #[serde(default)]
    pub receiver_user_id: Option<String>,

    pub title: String,

    pub category: String,

    pub thread: Vec<QueryMessage>,

    pub query_status: String,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,

    #[serde(default)]
    pub last_message: String,

    #[serde(default)]
    pub unread_count: u32,
}

impl RawQueryRecord {
    /// Преобразование сырой записи в нормализованный VendorQuery.
    ///
    /// Чистая детерминированная функция: стабильная дедупликация треда,
    /// тотальное отображение статуса, приоритет из категории, извлечение
    /// описания, первого ответа администратора и follow-up сообщений.
    pub fn to_query(&self) -> Result<VendorQuery, DataError> {
        if self.title.trim().is_empty() {
            return Err(DataError::validation("query title must not be empty")
                .with_details(format!("record id {}", self.id)));
        }
        if self.category.trim().is_empty() {
            return Err(DataError::validation("query category must not be empty")
                .with_details(format!("record id {}", self.id)));
        }

        let thread = dedup_thread(&self.thread);

        let description = thread
            .iter()
            .find(|m| m.kind == MessageKind::Query)
            .map(|m| m.message.clone())
            .unwrap_or_default();

        // Имя поставщика — автор самого первого сообщения исходного треда
        let vendor_name = self
            .thread
            .first()
            .map(|m| m.username.clone())
            .unwrap_or_else(|| "Unknown Vendor".to_string());

        let admin = thread
            .iter()
            .find(|m| m.sender_type == SenderType::Admin);
        let admin_response = admin.map(|m| m.message.clone());
        let admin_name = admin.map(|m| m.username.clone());

        let assigned_to = self
            .receiver_user_id
            .as_ref()
            .map(|_| "Admin".to_string());

        let follow_ups = thread
            .iter()
            .filter(|m| m.kind == MessageKind::Followup)
            .enumerate()
            .map(|(index, m)| FollowUp {
                id: format!("{}-{}", self.id, index),
                message: m.clone(),
            })
            .collect();

        Ok(VendorQuery {
            id: self.id.to_string(),
            title: self.title.clone(),
            category: self.category.clone(),
            status: QueryStatus::from_query_status(&self.query_status),
            priority: QueryPriority::from_category(&self.category),
            description,
            vendor_name,
            thread,
            admin_response,
            admin_name,
            assigned_to,
            follow_ups,
            unread_count: self.unread_count,
            last_message: self.last_message.clone(),
        })
    }
}

/// Стабильная дедупликация треда: выживает первое вхождение каждого ключа,
/// относительный порядок сохраняется. Timestamp в ключ не входит — настоящие
/// дубликаты с разным временем схлопываются в самое раннее вхождение.
fn dedup_thread(thread: &[QueryMessage]) -> Vec<QueryMessage> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(thread.len());
    for message in thread {
        if seen.insert(message.dedup_key()) {
            result.push(message.clone());
        }
    }
    result
}

/// Декодировать тело ответа списка запросов и нормализовать каждую запись
pub fn decode_queries(body: &str) -> Result<Vec<VendorQuery>, DataError> {
    let records: Vec<RawQueryRecord> = decode_list(body)?;
    records.iter().map(RawQueryRecord::to_query).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(kind: MessageKind, sender: SenderType, username: &str, text: &str) -> QueryMessage {
        QueryMessage {
            kind,
            sender_type: sender,
            user_id: format!("u-{}", username),
            username: username.to_string(),
            message: text.to_string(),
            timestamp: "2025-01-10T09:00:00Z".to_string(),
        }
    }

    fn record(thread: Vec<QueryMessage>) -> RawQueryRecord {
        RawQueryRecord {
            id: 42,
            sender_user_id: "u-acme".to_string(),
            receiver_user_id: None,
            title: "Listing not visible".to_string(),
            category: "Technical".to_string(),
            thread,
            query_status: "open".to_string(),
            created_at: "2025-01-10T09:00:00Z".to_string(),
            updated_at: "2025-01-10T10:00:00Z".to_string(),
            last_message: "Any update?".to_string(),
            unread_count: 2,
        }
    }

    #[test]
    fn test_empty_thread_defaults() {
        let query = record(vec![]).to_query().unwrap();

        assert_eq!(query.id, "42");
        assert_eq!(query.description, "");
        assert_eq!(query.vendor_name, "Unknown Vendor");
        assert!(query.thread.is_empty());
        assert!(query.follow_ups.is_empty());
        assert!(query.admin_response.is_none());
        assert!(query.admin_name.is_none());
        assert!(query.assigned_to.is_none());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut duplicate = msg(MessageKind::Query, SenderType::Vendor, "acme", "Where is my listing?");
        duplicate.timestamp = "2025-01-10T09:05:00Z".to_string();

        let query = record(vec![
            msg(MessageKind::Query, SenderType::Vendor, "acme", "Where is my listing?"),
            duplicate,
            msg(MessageKind::Response, SenderType::Admin, "support", "Checking now"),
        ])
        .to_query()
        .unwrap();

        // дубликат с другим timestamp схлопнулся, остался самый ранний
        assert_eq!(query.thread.len(), 2);
        assert_eq!(query.thread[0].timestamp, "2025-01-10T09:00:00Z");
        assert_eq!(query.thread[1].username, "support");
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let raw = record(vec![
            msg(MessageKind::Query, SenderType::Vendor, "acme", "Hello"),
            msg(MessageKind::Query, SenderType::Vendor, "acme", "Hello"),
            msg(MessageKind::Followup, SenderType::Vendor, "acme", "Hello"),
        ]);
        let first = raw.to_query().unwrap();

        let mut again = raw.clone();
        again.thread = first.thread.clone();
        let second = again.to_query().unwrap();

        assert_eq!(first.thread, second.thread);
    }

    #[test]
    fn test_same_text_different_kind_survives() {
        let query = record(vec![
            msg(MessageKind::Query, SenderType::Vendor, "acme", "Hello"),
            msg(MessageKind::Followup, SenderType::Vendor, "acme", "Hello"),
        ])
        .to_query()
        .unwrap();

        // текст совпадает, но тип различается — это не дубликат
        assert_eq!(query.thread.len(), 2);
    }

    #[test]
    fn test_admin_response_extraction() {
        let query = record(vec![
            msg(MessageKind::Query, SenderType::Vendor, "acme", "Problem"),
            msg(MessageKind::Response, SenderType::Admin, "olga", "On it"),
            msg(MessageKind::Response, SenderType::Admin, "ivan", "Done"),
        ])
        .to_query()
        .unwrap();

        assert_eq!(query.description, "Problem");
        assert_eq!(query.vendor_name, "acme");
        assert_eq!(query.admin_response.as_deref(), Some("On it"));
        assert_eq!(query.admin_name.as_deref(), Some("olga"));
    }

    #[test]
    fn test_follow_ups_get_synthetic_ids() {
        let query = record(vec![
            msg(MessageKind::Query, SenderType::Vendor, "acme", "Problem"),
            msg(MessageKind::Followup, SenderType::Vendor, "acme", "Still broken"),
            msg(MessageKind::Followup, SenderType::Vendor, "acme", "Any update?"),
        ])
        .to_query()
        .unwrap();

        assert_eq!(query.follow_ups.len(), 2);
        assert_eq!(query.follow_ups[0].id, "42-0");
        assert_eq!(query.follow_ups[1].id, "42-1");
        assert_eq!(query.follow_ups[1].message.message, "Any update?");
    }

    #[test]
    fn test_assigned_to_tracks_receiver() {
        let mut raw = record(vec![]);
        raw.receiver_user_id = Some("admin-7".to_string());
        let query = raw.to_query().unwrap();
        assert_eq!(query.assigned_to.as_deref(), Some("Admin"));
    }

    #[test]
    fn test_unknown_status_defaults_to_pending() {
        let mut raw = record(vec![]);
        raw.query_status = "totally_new_status".to_string();
        let query = raw.to_query().unwrap();
        assert_eq!(query.status, QueryStatus::Pending);
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut raw = record(vec![]);
        raw.title = "   ".to_string();
        let err = raw.to_query().unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_decode_queries_from_wrapped_payload() {
        let body = r#"{
            "data": {
                "data": [{
                    "id": 7,
                    "sender_user_id": "u-1",
                    "receiver_user_id": "a-1",
                    "title": "Payout delayed",
                    "category": "Payment",
                    "thread": [{
                        "type": "query",
                        "sender_type": "vendor",
                        "user_id": "u-1",
                        "username": "acme",
                        "message": "Payout is late",
                        "timestamp": "2025-01-09T12:00:00Z"
                    }],
                    "query_status": "in_progress",
                    "created_at": "2025-01-09T12:00:00Z",
                    "updated_at": "2025-01-09T13:00:00Z",
                    "last_message": "Payout is late",
                    "unread_count": 1
                }]
            }
        }"#;

        let queries = decode_queries(body).unwrap();
        assert_eq!(queries.len(), 1);

        let query = &queries[0];
        assert_eq!(query.id, "7");
        assert_eq!(query.status, QueryStatus::InProgress);
        assert_eq!(query.priority, QueryPriority::High);
        assert_eq!(query.vendor_name, "acme");
        assert_eq!(query.assigned_to.as_deref(), Some("Admin"));
    }

    #[test]
    fn test_decode_rejects_missing_thread() {
        let body = r#"[{
            "id": 7,
            "sender_user_id": "u-1",
            "title": "No thread here",
            "category": "General",
            "query_status": "open"
        }]"#;

        let err = decode_queries(body).unwrap_err();
        assert_eq!(err.code, "DECODE_ERROR");
    }
}
