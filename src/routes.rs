use crate::{
    routes::{
        school_count::get_school_count,
        students::{delete_student, get_student_by_id, get_students, post_student, put_student},
        welcome::get_welcome,
    },
    state::ApiState,
};
use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub mod school_count;
pub mod students;
pub mod welcome;

const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn router(state: ApiState, route_prefix: Option<&str>) -> Router {
    let routes = Router::new()
        .route("/", get(get_welcome).post(get_welcome))
        .route("/students", get(get_students).post(post_student))
        .route(
            "/students/{id}",
            get(get_student_by_id)
                .put(put_student)
                .delete(delete_student),
        )
        .route("/schoolcount", get(get_school_count));

    let routes = match route_prefix {
        Some(prefix) => Router::new().nest(prefix, routes),
        None => routes,
    };

    // enforced inside the body extractor, so an oversized body is a handled rejection
    routes
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
