// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Role, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
