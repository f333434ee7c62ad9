use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    response::Html,
    routing::get,
};
use chrono::Local;

use crate::core::course::{COURSE_MAP, convert_course_string};
use crate::core::portal::Portal;
use crate::web::view::{ViewModel, render};

#[derive(Clone)]
pub struct AppState {
    pub portal: Arc<Portal>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/course/{course}", get(show_course_notifications))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Every notification, unfiltered. Fetched fresh on each request.
async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.portal.get_notifications("").await;
    Html(render(&ViewModel {
        data: &data,
        course: None,
        course_map: &COURSE_MAP,
        fetched_at: Local::now(),
    }))
}

async fn show_course_notifications(
    State(state): State<AppState>,
    Path(course): Path<String>,
) -> Html<String> {
    let course_string = convert_course_string(&course);
    let data = state.portal.get_notifications(course_string).await;
    Html(render(&ViewModel {
        data: &data,
        course: Some(course.as_str()),
        course_map: &COURSE_MAP,
        fetched_at: Local::now(),
    }))
}

async fn health_check() -> &'static str {
    "ok"
}
