use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use tracing::info;

use crate::error::Result;
use crate::middleware::auth::CurrentUser;
use crate::models::user::UserView;
use crate::AppState;

#[axum::debug_handler]
pub async fn admin_check(
    Extension(CurrentUser(admin)): Extension<CurrentUser>,
) -> Result<impl IntoResponse> {
    info!(email = %admin.email, "Admin check successful");
    Ok(Json(json!({
        "message": "Admin access verified",
        "user": UserView::from(&admin),
    })))
}

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(CurrentUser(admin)): Extension<CurrentUser>,
) -> Result<impl IntoResponse> {
    let users = state.admin_service.list_users();
    info!(email = %admin.email, count = users.len(), "Admin fetched all users");
    Ok(Json(json!({ "users": users })))
}

#[axum::debug_handler]
pub async fn block_user(
    State(state): State<AppState>,
    Extension(CurrentUser(admin)): Extension<CurrentUser>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse> {
    state.admin_service.block_user(&admin.email, &email)?;
    Ok(Json(json!({
        "message": format!("User {} has been blocked", email),
    })))
}

#[axum::debug_handler]
pub async fn unblock_user(
    State(state): State<AppState>,
    Extension(CurrentUser(admin)): Extension<CurrentUser>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse> {
    state.admin_service.unblock_user(&admin.email, &email)?;
    Ok(Json(json!({
        "message": format!("User {} has been unblocked", email),
    })))
}

#[axum::debug_handler]
pub async fn remove_user(
    State(state): State<AppState>,
    Extension(CurrentUser(admin)): Extension<CurrentUser>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse> {
    state.admin_service.remove_user(&admin.email, &email)?;
    Ok(Json(json!({
        "message": format!("User {} has been removed", email),
    })))
}
