use axum::response::Html;

use crate::html::{form_page::FORM_PAGE_HTML, map_page::MAP_PAGE_HTML};

/// Map page with the category sidebar
pub async fn map_page() -> Html<&'static str> {
    Html(MAP_PAGE_HTML)
}

/// Point registration form
pub async fn form_page() -> Html<&'static str> {
    Html(FORM_PAGE_HTML)
}
