use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use validator::Validate;

use crate::dto::user_dto::{SigninRequest, SignupRequest, TokenResponse};
use crate::error::Result;
use crate::AppState;

#[axum::debug_handler]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.user_service.signup(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    ))
}

#[axum::debug_handler]
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<SigninRequest>,
) -> Result<Json<TokenResponse>> {
    let access_token = state.user_service.signin(&payload.email, &payload.password)?;
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
