mod dto;
pub mod handlers;
pub mod repo;

use axum::{
    routing::get,
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/users",
        get(handlers::get_current_user).post(handlers::create_user),
    )
}
