use axum::{body::Bytes, extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::geolocation::{self, LocationPhase, LocationSession, Resolution};
use crate::session::session_id;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LocationState {
    pub phase: &'static str,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<LocationSession> for LocationState {
    fn from(session: LocationSession) -> Self {
        let phase = match session.phase() {
            LocationPhase::Idle => "idle",
            LocationPhase::Awaiting { .. } => "awaiting",
        };
        let coords = session.coords();

        Self {
            phase,
            latitude: coords.map(|c| c.latitude),
            longitude: coords.map(|c| c.longitude),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocationResult {
    pub status: &'static str,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub message: String,
}

impl From<Resolution> for LocationResult {
    fn from(resolution: Resolution) -> Self {
        let (status, coords) = match resolution {
            Resolution::Resolved(coords) => ("resolved", Some(coords)),
            Resolution::Denied => ("denied", None),
            Resolution::TimedOut => ("timed_out", None),
        };

        Self {
            status,
            latitude: coords.map(|c| c.latitude),
            longitude: coords.map(|c| c.longitude),
            message: resolution.message(),
        }
    }
}

/// Current geolocation state of the caller's session
pub async fn status(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<LocationState>) {
    let (jar, id) = session_id(jar);
    let location = state.sessions.location(id).await;
    (jar, Json(location.into()))
}

/// Start waiting for the browser's location
pub async fn request(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<LocationState>) {
    let (jar, id) = session_id(jar);
    let location = state.sessions.request_location(id).await;
    (jar, Json(location.into()))
}

/// Accept a raw browser geolocation response. Bodies that are not JSON are
/// forwarded as "no data yet".
pub async fn report(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> AppResult<(CookieJar, Json<Value>)> {
    let (jar, id) = session_id(jar);
    let data = serde_json::from_slice(&body).unwrap_or(Value::Null);

    state.sessions.report(id, data).await?;

    Ok((jar, Json(serde_json::json!({ "message": "Resposta recebida" }))))
}

/// Block until the pending request resolves, is denied, or times out
pub async fn await_location(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<LocationResult>)> {
    let (jar, id) = session_id(jar);
    let (started, mut reports) = state.sessions.begin_wait(id).await?;

    let mut location = started;
    let resolution = geolocation::acquire(&mut location, &mut reports)
        .await
        .ok_or_else(|| AppError::Conflict("Nenhuma solicitação de localização em andamento.".to_string()))?;

    state.sessions.finish_wait(id, started, location).await;
    tracing::info!(session = %id, ?resolution, "Location request finished");

    Ok((jar, Json(resolution.into())))
}
