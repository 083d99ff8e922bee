// src/presentation/http/controllers/users.rs
use crate::application::{dto::UserDto, error::ApplicationError};
use crate::domain::user::UserId;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

pub async fn list_users(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .get_all()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<UserDto>> {
    let id = UserId::new(id).map_err(ApplicationError::from).into_http()?;

    state
        .services
        .user_queries
        .get_user(id)
        .await
        .into_http()
        .map(Json)
}
