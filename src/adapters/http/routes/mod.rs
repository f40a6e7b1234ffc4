pub mod health;
pub mod waitlist;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/waitlist", waitlist::router())
        .nest("/health", health::router())
}
