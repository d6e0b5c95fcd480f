use crate::domain::a002_category::aggregate::CategoryId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для агрегата Vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VendorId(pub Uuid);

impl VendorId {
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

impl AggregateId for VendorId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(VendorId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Поставщик (vendor), торгующий на платформе
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(flatten)]
    pub base: BaseAggregate<VendorId>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub category_id: Option<CategoryId>,
    /// Прошёл ли поставщик проверку администратором
    pub is_verified: bool,
}

impl Vendor {
    pub fn new_for_insert(code: String, description: String) -> Self {
        let base = BaseAggregate::new(VendorId::new_v4(), code, description);
        Self {
            base,
            contact_email: None,
            phone: None,
            category_id: None,
            is_verified: false,
        }
    }

    pub fn new_with_id(
        id: VendorId,
        code: String,
        description: String,
        contact_email: Option<String>,
        phone: Option<String>,
        category_id: Option<CategoryId>,
    ) -> Self {
        let base = BaseAggregate::new(id, code, description);
        Self {
            base,
            contact_email,
            phone,
            category_id,
            is_verified: false,
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
            return Err("Название поставщика не может быть пустым".into());
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

impl AggregateRoot for Vendor {
    type Id = VendorId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "vendor"
    }

    fn element_name() -> &'static str {
        "Vendor"
    }

    fn list_name() -> &'static str {
        "Vendors"
    }
}

/// DTO для элемента списка поставщиков
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorListItem {
    pub id: String,
    pub code: String,
    pub name: String,
    pub contact_email: Option<String>,
    pub category_id: Option<String>,
    pub is_verified: bool,
    pub is_deleted: bool,
}

impl From<Vendor> for VendorListItem {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.base.id.as_string(),
            code: vendor.base.code,
            name: vendor.base.description,
            contact_email: vendor.contact_email,
            category_id: vendor.category_id.map(|id| id.as_string()),
            is_verified: vendor.is_verified,
            is_deleted: vendor.base.metadata.is_deleted,
        }
    }
}
