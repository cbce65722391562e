use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::dto::user_dto::UpdateProfileRequest;
use crate::error::{Error, Result};
use crate::middleware::auth::CurrentUser;
use crate::models::user::UserView;
use crate::AppState;

#[axum::debug_handler]
pub async fn get_me(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<UserView>> {
    info!(email = %user.email, "Profile accessed");
    Ok(Json(UserView::from(&user)))
}

#[axum::debug_handler]
pub async fn update_me(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.user_service.update_profile(&user.email, payload)?;
    Ok(Json(json!({ "message": "Profile updated successfully" })))
}

#[axum::debug_handler]
pub async fn upload_resume(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    info!(email = %user.email, "Resume upload requested");

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let content_type = field.content_type().unwrap_or_default().to_string();
            let data: bytes::Bytes = field.bytes().await?;
            state
                .user_service
                .attach_resume(&user.email, &content_type, &data)?;
            return Ok(Json(json!({ "message": "Resume uploaded successfully" })));
        }
    }

    Err(Error::BadRequest("No file provided for upload".to_string()))
}
