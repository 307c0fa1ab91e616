use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::courses::dto::{CourseRequest, CourseResponse};
use crate::courses::repo::Course;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::repo::User;
use crate::validation::{validate, FieldCheck};

const COURSE_NOT_FOUND: &str = "Course Not Found";

/// Mutation is owner-only: load-then-compare-then-act, so a non-owner gets
/// 403 for an existing course and 404 only when it truly does not exist.
fn ensure_owner(course: &Course, user: &User, denial: &'static str) -> Result<(), ApiError> {
    if course.user_id == user.id {
        Ok(())
    } else {
        warn!(course_id = %course.id, owner_id = %course.user_id, user_id = %user.id, "ownership mismatch");
        Err(ApiError::Forbidden(denial))
    }
}

/// GET /api/courses: public, newest first.
#[instrument(skip(state))]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = Course::list_all(&state.db).await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// GET /api/courses/:id: public.
#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = Course::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound(COURSE_NOT_FOUND))?;
    Ok(Json(course.into()))
}

/// POST /api/courses: the authenticated user becomes the owner.
#[instrument(skip_all)]
pub async fn create_course(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(body): Json<CourseRequest>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    validate(&[
        FieldCheck::required("title", body.title.as_deref()),
        FieldCheck::required("description", body.description.as_deref()),
    ])
    .map_err(ApiError::Validation)?;

    let course = Course::create(
        &state.db,
        user.id,
        &body.title.unwrap_or_default(),
        &body.description.unwrap_or_default(),
        body.estimated_time.as_deref(),
        body.materials_needed.as_deref(),
    )
    .await?;

    info!(course_id = %course.id, user_id = %user.id, "course created");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::LOCATION,
        format!("/api/courses/{}", course.id).parse().unwrap(),
    );
    Ok((StatusCode::CREATED, headers))
}

/// PUT /api/courses/:id: owner-only update, 204 on success.
#[instrument(skip(state, user, body))]
pub async fn update_course(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<CourseRequest>,
) -> Result<StatusCode, ApiError> {
    validate(&[
        FieldCheck::required("title", body.title.as_deref()),
        FieldCheck::required("description", body.description.as_deref()),
    ])
    .map_err(ApiError::Validation)?;

    let course = Course::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound(COURSE_NOT_FOUND))?;
    ensure_owner(&course, &user, "You can only edit your own courses!")?;

    Course::update(
        &state.db,
        id,
        &body.title.unwrap_or_default(),
        &body.description.unwrap_or_default(),
        body.estimated_time.as_deref(),
        body.materials_needed.as_deref(),
    )
    .await?;

    info!(course_id = %id, user_id = %user.id, "course updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/courses/:id: owner-only, 204 on success.
#[instrument(skip(state, user))]
pub async fn delete_course(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let course = Course::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound(COURSE_NOT_FOUND))?;
    ensure_owner(&course, &user, "You can only delete your own courses!")?;

    Course::delete(&state.db, id).await?;

    info!(course_id = %id, user_id = %user.id, "course deleted");
    Ok(StatusCode::NO_CONTENT)
}
