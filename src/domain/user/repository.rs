use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::User, value_objects::UserId};
use async_trait::async_trait;

/// Data-access contract for user records. Implementations decide storage and
/// ordering; callers receive records in whatever order the implementation
/// produces them.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
}
