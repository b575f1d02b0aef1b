//! 静态文本端点

use axum::response::Html;

pub const WELCOME_TEXT: &str = "Welcome 🔴";
pub const TEST_TEXT: &str = "hey man 🧡 isbcerl";

/// 主页
pub async fn welcome() -> Html<&'static str> {
    Html(WELCOME_TEXT)
}

pub async fn test() -> Html<&'static str> {
    Html(TEST_TEXT)
}
