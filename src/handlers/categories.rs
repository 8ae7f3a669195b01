use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::categories::{self, FilterOption, LegendEntry};
use crate::error::AppResult;
use crate::routes::ASSETS_PREFIX;

#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    pub categories: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub options: Vec<FilterOption>,
    pub legend: Vec<LegendEntry>,
}

/// Filter options (all selected unless a selection is passed) and legend
pub async fn list_categories(
    Query(query): Query<SelectionQuery>,
) -> AppResult<Json<CategoriesResponse>> {
    let selection = categories::parse_selection(query.categories.as_deref())?;

    Ok(Json(CategoriesResponse {
        options: categories::filter_options(&selection),
        legend: categories::legend(ASSETS_PREFIX),
    }))
}
