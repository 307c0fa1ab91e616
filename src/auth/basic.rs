use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sqlx::PgPool;
use tracing::{debug, warn};

use crate::auth::password::verify_password;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::repo::User;

/// Principal and secret parsed out of a Basic Authorization header.
#[derive(Debug)]
pub struct BasicCredentials {
    pub principal: String,
    pub secret: String,
}

impl BasicCredentials {
    /// Parses `Basic <base64(principal:secret)>`. Anything short of a
    /// well-formed header is treated as absent credentials.
    pub fn from_header(header: Option<&str>) -> Option<Self> {
        let header = header?;
        let encoded = header
            .strip_prefix("Basic ")
            .or_else(|| header.strip_prefix("basic "))?;
        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (principal, secret) = decoded.split_once(':')?;
        Some(Self {
            principal: principal.to_string(),
            secret: secret.to_string(),
        })
    }
}

/// Why a request failed authentication. Logged server-side only; clients
/// always receive the same generic 401.
#[derive(Debug, thiserror::Error)]
pub enum AuthFailure {
    #[error("auth header not found")]
    MissingCredentials,
    #[error("user not found for username: {0}")]
    UnknownPrincipal(String),
    #[error("authentication failure for username: {0}")]
    BadSecret(String),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Resolves the header to a stored user: decode, look up the principal as
/// an email address, then verify the secret against the stored hash.
pub async fn verify_credentials(
    db: &PgPool,
    header: Option<&str>,
) -> Result<User, AuthFailure> {
    let credentials =
        BasicCredentials::from_header(header).ok_or(AuthFailure::MissingCredentials)?;

    let user = User::find_by_email(db, &credentials.principal)
        .await?
        .ok_or_else(|| AuthFailure::UnknownPrincipal(credentials.principal.clone()))?;

    if !verify_password(&credentials.secret, &user.password_hash)? {
        return Err(AuthFailure::BadSecret(credentials.principal));
    }

    Ok(user)
}

/// Extractor guarding protected routes. On success the resolved user rides
/// into the handler; any auth failure short-circuits with 401.
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        match verify_credentials(&state.db, header).await {
            Ok(user) => {
                debug!(user_id = %user.id, email = %user.email_address, "authentication successful");
                Ok(AuthUser(user))
            }
            Err(AuthFailure::Store(e)) => Err(ApiError::Internal(e)),
            Err(failure) => {
                warn!(%failure, "authentication rejected");
                Err(ApiError::AccessDenied)
            }
        }
    }
}
