use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::db::{insert_point, NewPoint};
use crate::error::{AppError, AppResult};
use crate::geolocation::Coordinates;
use crate::session::session_id;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitPointRequest {
    pub category: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub classification_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitPointResponse {
    pub message: String,
    pub latitude: f64,
    pub longitude: f64,
    pub registration_date: String,
}

/// Presence checks run before anything touches the database.
/// The category is stored as given.
pub fn validate_submission(
    payload: SubmitPointRequest,
    coords: Option<Coordinates>,
    registration_date: String,
) -> AppResult<NewPoint> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("Informe o nome do ponto.".to_string()));
    }

    let coords = coords.ok_or_else(|| {
        AppError::BadRequest("Capture a localização antes de finalizar.".to_string())
    })?;

    Ok(NewPoint {
        category: payload.category,
        name: payload.name,
        classification_code: payload.classification_code.filter(|code| !code.is_empty()),
        latitude: coords.latitude,
        longitude: coords.longitude,
        registration_date: Some(registration_date),
    })
}

/// Register a point at the session's captured coordinates
pub async fn submit_point(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<SubmitPointRequest>,
) -> AppResult<(CookieJar, Json<SubmitPointResponse>)> {
    let (jar, id) = session_id(jar);
    let coords = state.sessions.location(id).await.coords();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

    let new_point = validate_submission(payload, coords, today)?;
    let response = SubmitPointResponse {
        message: "Ponto cadastrado com sucesso!".to_string(),
        latitude: new_point.latitude,
        longitude: new_point.longitude,
        registration_date: new_point.registration_date.clone().unwrap_or_default(),
    };

    insert_point(&state.db, new_point).await?;

    Ok((jar, Json(response)))
}
