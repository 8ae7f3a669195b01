use axum::{
    extract::{Query, State},
    Json,
};

use crate::categories::parse_selection;
use crate::db::fetch_points;
use crate::entities::point;
use crate::error::AppResult;
use crate::handlers::categories::SelectionQuery;
use crate::map::{build_view, MapView};
use crate::routes::ASSETS_PREFIX;
use crate::AppState;

/// Markers and centre for the current category selection
pub async fn map_view(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> AppResult<Json<MapView>> {
    let selection = parse_selection(query.categories.as_deref())?;
    let points = fetch_points(&state.db, Some(selection.as_slice())).await?;

    tracing::debug!(selected = ?selection, count = points.len(), "Map view built");

    Ok(Json(build_view(&points, ASSETS_PREFIX)))
}

/// Raw stored points. Without `categories` every point is returned,
/// including codes outside the enumeration.
pub async fn list_points(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> AppResult<Json<Vec<point::Model>>> {
    let points = match query.categories.as_deref() {
        None => fetch_points(&state.db, None).await?,
        Some(raw) => {
            let selection = parse_selection(Some(raw))?;
            fetch_points(&state.db, Some(selection.as_slice())).await?
        }
    };

    Ok(Json(points))
}
