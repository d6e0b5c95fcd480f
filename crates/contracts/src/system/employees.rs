use serde::{Deserialize, Serialize};

/// Сотрудник компании (учётная запись админ-панели)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeDto {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEmployeeDto {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
}
