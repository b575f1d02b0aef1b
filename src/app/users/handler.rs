//! 用户处理器

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use tracing::{debug, info};

use super::model::{RegisterUserRequest, User};
use crate::app::AppState;
use crate::core::error::CoreError;

/// 获取全部用户
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list())
}

/// 注册用户，返回 201 和完整的用户列表
///
/// 只有 `application/json` 请求体会被解析，其他内容类型按空对象处理。
pub async fn register_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Vec<User>>), CoreError> {
    let body = body?;
    let request = if is_json_content(&headers) {
        RegisterUserRequest::from_json_body(&body)?
    } else {
        debug!("非 JSON 请求体，忽略 {} 字节", body.len());
        RegisterUserRequest::default()
    };

    let users = state.users.register(request);

    if let Some(user) = users.last() {
        info!("已注册用户 id={}, 当前共 {} 个用户", user.id, users.len());
    }

    Ok((StatusCode::CREATED, Json(users)))
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// 删除用户
///
/// 路径中的 id 按无符号整数解析；无法解析的值不会匹配任何记录，
/// 此时原样返回当前列表。
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<User>> {
    let users = match id.trim().parse::<u64>() {
        Ok(id) => {
            let (users, removed) = state.users.delete(id);
            info!("删除用户 id={}, 移除 {} 条记录", id, removed);
            users
        }
        Err(_) => {
            debug!("无效的用户 id: {:?}", id);
            state.users.list()
        }
    };

    Json(users)
}
