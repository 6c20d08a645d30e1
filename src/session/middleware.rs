use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{debug, instrument, warn};

use super::types::CurrentUser;
use crate::shared::AppError;

/// Capability gate - requires an `Authorization: Bearer <token>` header and
/// adds the token to the request as [`CurrentUser`].
/// Usage: .route_layer(middleware::from_fn(session::require_user))
#[instrument(skip(req, next))]
pub async fn require_user(mut req: Request, next: Next) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| {
            warn!(uri = %req.uri(), "Missing Authorization header in request");
            AppError::Unauthorized("Missing authorization header".to_string())
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            warn!("Invalid Authorization header format (expected Bearer token)");
            AppError::Unauthorized("Invalid authorization header format".to_string())
        })?
        .to_string();

    debug!(uri = %req.uri(), "Current user present");
    req.extensions_mut().insert(CurrentUser::new(token));

    Ok(next.run(req).await)
}
