use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для агрегата Category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
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

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Категория товаров. Подкатегория — категория с заполненным parent_id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseAggregate<CategoryId>,
    pub parent_id: Option<CategoryId>,
}

impl Category {
    /// Создать новую корневую категорию
    pub fn new_for_insert(code: String, description: String) -> Self {
        let base = BaseAggregate::new(CategoryId::new_v4(), code, description);
        Self {
            base,
            parent_id: None,
        }
    }

    /// Создать подкатегорию
    pub fn new_subcategory(code: String, description: String, parent_id: CategoryId) -> Self {
        let base = BaseAggregate::new(CategoryId::new_v4(), code, description);
        Self {
            base,
            parent_id: Some(parent_id),
        }
    }

    /// Создать категорию с известным ID
    pub fn new_with_id(
        id: CategoryId,
        code: String,
        description: String,
        parent_id: Option<CategoryId>,
    ) -> Self {
        let base = BaseAggregate::new(id, code, description);
        Self { base, parent_id }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn is_subcategory(&self) -> bool {
        self.parent_id.is_some()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название категории не может быть пустым".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Код не может быть пустым".into());
        }
        if self.parent_id == Some(self.base.id) {
            return Err("Категория не может быть родителем самой себя".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

/// DTO для элемента списка категорий
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListItem {
    pub id: String,
    pub code: String,
    pub name: String,
    pub parent_id: Option<String>,
    pub is_deleted: bool,
}

impl From<Category> for CategoryListItem {
    fn from(category: Category) -> Self {
        Self {
            id: category.base.id.as_string(),
            code: category.base.code,
            name: category.base.description,
            parent_id: category.parent_id.map(|id| id.as_string()),
            is_deleted: category.base.metadata.is_deleted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcategory_validation() {
        let root = Category::new_for_insert("CAT-001".into(), "Electronics".into());
        assert!(root.validate().is_ok());
        assert!(!root.is_subcategory());

        let sub = Category::new_subcategory("CAT-002".into(), "Laptops".into(), root.base.id);
        assert!(sub.validate().is_ok());
        assert!(sub.is_subcategory());

        let mut cyclic = Category::new_for_insert("CAT-003".into(), "Phones".into());
        cyclic.parent_id = Some(cyclic.base.id);
        assert!(cyclic.validate().is_err());
    }
}
