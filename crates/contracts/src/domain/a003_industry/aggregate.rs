use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для агрегата Industry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndustryId(pub Uuid);

impl IndustryId {
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

impl AggregateId for IndustryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(IndustryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Отрасль (справочник для классификации партнёров)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Industry {
    #[serde(flatten)]
    pub base: BaseAggregate<IndustryId>,
}

impl Industry {
    pub fn new_for_insert(code: String, description: String) -> Self {
        let base = BaseAggregate::new(IndustryId::new_v4(), code, description);
        Self { base }
    }

    pub fn new_with_id(id: IndustryId, code: String, description: String) -> Self {
        let base = BaseAggregate::new(id, code, description);
        Self { base }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название отрасли не может быть пустым".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Код не может быть пустым".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Industry {
    type Id = IndustryId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "industry"
    }

    fn element_name() -> &'static str {
        "Industry"
    }

    fn list_name() -> &'static str {
        "Industries"
    }
}

/// DTO для элемента списка отраслей
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryListItem {
    pub id: String,
    pub code: String,
    pub name: String,
    pub is_deleted: bool,
}

impl From<Industry> for IndustryListItem {
    fn from(industry: Industry) -> Self {
        Self {
            id: industry.base.id.as_string(),
            code: industry.base.code,
            name: industry.base.description,
            is_deleted: industry.base.metadata.is_deleted,
        }
    }
}
