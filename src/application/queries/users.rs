// src/application/queries/users.rs
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{UserId, UserRepository},
};
use std::sync::Arc;

/// Read-side service over the user repository. Stateless apart from the
/// injected repository handle, which is set once at construction.
pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Return every user the repository knows about, in the repository's own
    /// order. Records are converted to DTOs in place; nothing is filtered,
    /// reordered, or paginated, and repository failures propagate unchanged.
    pub async fn get_all(&self) -> ApplicationResult<Vec<UserDto>> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn get_user(&self, id: UserId) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(user.into())
    }
}
