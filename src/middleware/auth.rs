use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::config::get_config;
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::token;
use crate::AppState;

/// The authenticated account for this request, inserted by the gate
/// middlewares and read by handlers via `Extension<CurrentUser>`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

fn unauthorized() -> Error {
    Error::Unauthorized("Invalid authentication credentials".to_string())
}

/// Token-to-account resolution. Tokens are never revoked, so this store
/// lookup on every request is what makes blocking and removal effective:
/// a removed subject fails the lookup, a blocked one fails the flag check.
fn authenticate(state: &AppState, req: &Request) -> Result<User> {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return Err(unauthorized());
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Err(unauthorized());
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return Err(unauthorized());
    };

    let claims = token::decode_access_token(token, &get_config().jwt_secret)?;

    let Some(user) = state.store.get(&claims.sub) else {
        warn!(email = %claims.sub, "Token subject no longer exists");
        return Err(unauthorized());
    };

    if user.is_blocked {
        warn!(email = %user.email, "Blocked user rejected");
        return Err(Error::Forbidden("User is blocked".to_string()));
    }

    Ok(user)
}

pub async fn require_user(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let user = authenticate(&state, &req)?;
    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}

pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let user = authenticate(&state, &req)?;
    if !user.is_admin() {
        warn!(email = %user.email, "Admin access attempted without permission");
        return Err(Error::Forbidden("Not authorized as admin".to_string()));
    }
    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}
