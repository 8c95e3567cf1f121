use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use aeromed_auth::jwt::validate_token;
use aeromed_core::models::user::Role;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT validation middleware.
///
/// Extracts the `Authorization: Bearer <token>` header and validates the JWT.
/// On success, inserts `AuthUser` into request extensions for handlers to use.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

    let claims = validate_token(token, &state.jwt_secret)?;

    req.extensions_mut().insert(AuthUser {
        id: claims.sub,
        name: claims.name,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from JWT claims.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

impl AuthUser {
    pub fn require(&self, role: Role) -> Result<(), ApiError> {
        if self.role == role {
            Ok(())
        } else {
            Err(ApiError::Forbidden("access denied".to_string()))
        }
    }

    /// Health professionals and managers.
    pub fn require_reviewer(&self) -> Result<(), ApiError> {
        if self.role.is_reviewer() {
            Ok(())
        } else {
            Err(ApiError::Forbidden("access denied".to_string()))
        }
    }
}
