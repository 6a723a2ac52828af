//! HTTP routes and handlers for the group API.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use roster_core::error::RosterError;
use roster_core::models::group::{CreateGroup, Group, UpdateGroup};
use roster_core::models::user::User;
use serde::Deserialize;
use serde_json::{Value, json};
use surrealdb::Connection;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Group creation payload. `member_ids` is the initial member list,
/// attached in the order given.
#[derive(Debug, Deserialize)]
pub struct GroupCreate {
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub member_ids: Vec<Uuid>,
}

/// Group update payload; absent fields are left untouched.
#[derive(Debug, Deserialize, Default)]
pub struct GroupUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Build the application router.
pub fn router<C: Connection>(state: AppState<C>) -> Router {
    Router::new()
        .route("/", get(banner))
        .route(
            "/api/v1/groups",
            get(list_groups::<C>).post(create_group::<C>),
        )
        .route(
            "/api/v1/groups/{id}",
            get(get_group::<C>)
                .put(update_group::<C>)
                .delete(delete_group::<C>),
        )
        .route("/api/v1/groups/{id}/users", get(group_members::<C>))
        .route("/api/v1/groups/user/{id}", get(user_groups::<C>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Path ids are parsed by hand so a malformed id maps onto the core
/// validation error instead of axum's default rejection.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        RosterError::Validation {
            message: format!("malformed id: {raw}"),
        }
        .into()
    })
}

async fn banner() -> &'static str {
    "ROSTER group service"
}

async fn list_groups<C: Connection>(
    State(state): State<AppState<C>>,
) -> Result<Json<Vec<Group>>, ApiError> {
    let groups = state.service.list().await?;
    Ok(Json(groups))
}

async fn get_group<C: Connection>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Group>, ApiError> {
    let id = parse_id(&id)?;
    let group = state.service.get(id).await?;
    Ok(Json(group))
}

async fn create_group<C: Connection>(
    State(state): State<AppState<C>>,
    Json(payload): Json<GroupCreate>,
) -> Result<(StatusCode, Json<Group>), ApiError> {
    let group = state
        .service
        .create_with_members(
            CreateGroup {
                name: payload.name,
                description: payload.description,
                created_at: payload.created_at,
            },
            &payload.member_ids,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(group)))
}

async fn update_group<C: Connection>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
    Json(payload): Json<GroupUpdate>,
) -> Result<Json<Group>, ApiError> {
    let id = parse_id(&id)?;
    let group = state
        .service
        .update(
            id,
            UpdateGroup {
                name: payload.name,
                description: payload.description,
            },
        )
        .await?;
    Ok(Json(group))
}

async fn delete_group<C: Connection>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    state.service.delete(id).await?;
    Ok(Json(json!({ "deleted": id })))
}

async fn group_members<C: Connection>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<User>>, ApiError> {
    let id = parse_id(&id)?;
    let users = state.service.members_of(id).await?;
    Ok(Json(users))
}

async fn user_groups<C: Connection>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Group>>, ApiError> {
    let id = parse_id(&id)?;
    let groups = state.service.groups_of(id).await?;
    Ok(Json(groups))
}
