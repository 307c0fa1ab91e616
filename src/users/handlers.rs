use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use tracing::{info, instrument};

use crate::auth::{password, AuthUser};
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::{CreateUserRequest, UserProfile};
use crate::users::repo::User;
use crate::validation::{validate, FieldCheck};

/// GET /api/users: the authenticated user's own public projection.
#[instrument(skip_all)]
pub async fn get_current_user(AuthUser(user): AuthUser) -> Json<UserProfile> {
    Json(UserProfile::from(user))
}

/// POST /api/users: signup. Responds 201 with a Location header pointing
/// at the root collection and an empty body.
#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    validate(&[
        FieldCheck::required("firstName", body.first_name.as_deref()),
        FieldCheck::required("lastName", body.last_name.as_deref()),
        FieldCheck::required("emailAddress", body.email_address.as_deref()),
        FieldCheck::email("emailAddress", body.email_address.as_deref()),
        FieldCheck::required("password", body.password.as_deref()),
    ])
    .map_err(ApiError::Validation)?;

    let hash = password::hash_password(&body.password.unwrap_or_default())?;

    let user = User::create(
        &state.db,
        &body.first_name.unwrap_or_default(),
        &body.last_name.unwrap_or_default(),
        &body.email_address.unwrap_or_default(),
        &hash,
    )
    .await?;

    info!(user_id = %user.id, email = %user.email_address, "user created");

    let mut headers = HeaderMap::new();
    headers.insert(header::LOCATION, HeaderValue::from_static("/"));
    Ok((StatusCode::CREATED, headers))
}
