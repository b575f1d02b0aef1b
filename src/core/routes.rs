//! 路由组装

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::{error::CoreError, middleware::request_logging_middleware};
use crate::app::{
    home,
    users::{handler, UserStore},
    AppState,
};
use crate::infrastructure::config::DEFAULT_BODY_LIMIT;

/// 使用默认请求体上限构建路由
pub fn build_router(users: UserStore) -> Router {
    build_router_with_limit(users, DEFAULT_BODY_LIMIT)
}

pub fn build_router_with_limit(users: UserStore, body_limit: usize) -> Router {
    Router::new()
        .route("/", get(home::welcome))
        .route("/users", get(handler::list_users))
        .route("/test", get(home::test))
        .route("/register-user", post(handler::register_user))
        .route("/delete-user/:id", delete(handler::delete_user))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(users))
}

async fn not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("路径 {} 不存在", uri.path()))
}
