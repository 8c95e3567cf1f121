use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aeromed_core::models::user::{Role, User};

use crate::error::AuthError;

/// Sessions last a working shift.
pub const DEFAULT_TTL: jiff::SignedDuration = jiff::SignedDuration::from_hours(8);

/// Claims carried by an AeroMed bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub name: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Sign a token for `user`, valid for `ttl` from now.
pub fn issue_token(
    user: &User,
    secret: &[u8],
    ttl: jiff::SignedDuration,
) -> Result<String, AuthError> {
    let now = jiff::Timestamp::now().as_second();
    let claims = Claims {
        sub: user.id,
        name: user.name.clone(),
        role: user.role,
        iat: now,
        exp: now + ttl.as_secs(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )?;
    Ok(token)
}

/// Verify signature and expiry, returning the embedded claims.
pub fn validate_token(token: &str, secret: &[u8]) -> Result<Claims, AuthError> {
    if token.is_empty() {
        return Err(AuthError::InvalidToken("empty token".to_string()));
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|e| {
            tracing::debug!(error = %e, "rejected bearer token");
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::Jwt(e),
            }
        })?;

    Ok(token_data.claims)
}
