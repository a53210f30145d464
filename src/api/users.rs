//! User record endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{User, UserId};
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// Request to create a new user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserApiRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// Request to update a user; absent or empty fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserApiRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// User representation on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub created_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            department: user.department().to_string(),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}

/// Create the `/users` router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<u64>()
        .map(UserId::new)
        .map_err(|_| ApiError::bad_request(format!("Invalid user ID '{}'", raw)).with_param("id"))
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.list().await?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user_id, "Getting user");

    let id = parse_user_id(&user_id)?;
    let user = state.user_service.get(id).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<UserResponse>), ApiError> {
    debug!("Creating user");

    let service_request = CreateUserRequest {
        name: request.name,
        email: request.email,
        department: request.department,
    };

    let user = state.user_service.create(service_request).await?;
    let location = format!("/api/users/{}", user.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(&user)),
    ))
}

/// PUT /api/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user_id, "Updating user");

    let id = parse_user_id(&user_id)?;
    let service_request = UpdateUserRequest {
        name: request.name,
        email: request.email,
        department: request.department,
    };

    let user = state.user_service.update(id, service_request).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(user_id = %user_id, "Deleting user");

    let id = parse_user_id(&user_id)?;
    state.user_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
