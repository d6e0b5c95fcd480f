use crate::domain::a003_industry::aggregate::IndustryId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::list::{Searchable, Sortable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// ID типа для агрегата Partner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartnerId(pub Uuid);

impl PartnerId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for PartnerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PartnerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Партнёр платформы
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
    #[serde(flatten)]
    pub base: BaseAggregate<PartnerId>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub industry_id: Option<IndustryId>,
}

impl Partner {
    /// Создать нового партнёра для вставки
    pub fn new_for_insert(code: String, description: String) -> Self {
        let base = BaseAggregate::new(PartnerId::new_v4(), code, description);
        Self {
            base,
            contact_email: None,
            phone: None,
            website: None,
            industry_id: None,
        }
    }

    /// Создать партнёра с известным ID
    pub fn new_with_id(
        id: PartnerId,
        code: String,
        description: String,
        contact_email: Option<String>,
        phone: Option<String>,
        website: Option<String>,
        industry_id: Option<IndustryId>,
    ) -> Self {
        let base = BaseAggregate::new(id, code, description);
        Self {
            base,
            contact_email,
            phone,
            website,
            industry_id,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название партнёра не может быть пустым".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Код не может быть пустым".into());
        }
        if let Some(email) = &self.contact_email {
            if !email.contains('@') {
                return Err(format!("Некорректный email: {}", email));
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Partner {
    type Id = PartnerId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "partner"
    }

    fn element_name() -> &'static str {
        "Partner"
    }

    fn list_name() -> &'static str {
        "Partners"
    }
}

/// DTO для элемента списка партнёров
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerListItem {
    pub id: String,
    pub code: String,
    pub name: String,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub industry_id: Option<String>,
    pub is_deleted: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Partner> for PartnerListItem {
    fn from(partner: Partner) -> Self {
        Self {
            id: partner.base.id.as_string(),
            code: partner.base.code,
            name: partner.base.description,
            contact_email: partner.contact_email,
            phone: partner.phone,
            industry_id: partner.industry_id.map(|id| id.as_string()),
            is_deleted: partner.base.metadata.is_deleted,
            created_at: partner.base.metadata.created_at,
        }
    }
}

impl Searchable for PartnerListItem {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.code.to_lowercase().contains(&filter)
            || self
                .contact_email
                .as_ref()
                .map(|e| e.to_lowercase().contains(&filter))
                .unwrap_or(false)
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "code" => Some(self.code.clone()),
            "contact_email" => self.contact_email.clone(),
            "phone" => self.phone.clone(),
            _ => None,
        }
    }
}

impl Sortable for PartnerListItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}
