// tests/support/mod.rs
#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;
use userdir_core::application::services::ApplicationServices;
use userdir_core::domain::errors::{DomainError, DomainResult};
use userdir_core::domain::user::{Role, User, UserId, UserRepository, Username};
use userdir_core::infrastructure::time::SystemClock;
use userdir_core::presentation::http::{routes::build_router, state::HttpState};

pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }
}

/// Repository that fails every call, standing in for a lost database.
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

pub fn sample_user(id: i64, username: &str) -> User {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        role: Role::default(),
        is_active: true,
        created_at: base + Duration::minutes(id),
    }
}

pub fn make_test_router(repo: Arc<dyn UserRepository>) -> Router {
    let services = Arc::new(ApplicationServices::new(
        repo,
        Arc::new(SystemClock::default()),
        Duration::seconds(60),
    ));
    let state = HttpState { services };
    build_router(state, &["http://localhost:3000".to_string()])
}
