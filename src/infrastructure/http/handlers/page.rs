//! Page Handler - 单页前端

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../../web/index.html");

/// 返回单页 UI
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
