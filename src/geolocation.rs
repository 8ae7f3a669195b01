//! Browser geolocation acquisition.
//!
//! A session moves `Idle -> Awaiting` when the user asks for a fix, then back
//! to `Idle` once the browser's answer resolves to coordinates, a denial, or
//! the wait runs past [`AWAIT_TIMEOUT`]. [`LocationSession::poll`] is the pure
//! transition; [`acquire`] drives it from a channel of raw browser responses.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::time::{timeout_at, Instant};

/// Maximum wait for the browser, measured from the request.
pub const AWAIT_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// What a single browser response amounts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Fix(Coordinates),
    Denied,
    Pending,
}

/// Classify a raw geolocation response.
///
/// Accepts `{latitude, longitude}`, `{coords: {latitude, longitude}}`, or an
/// object whose `permission`/`error` text contains "denied". Anything else,
/// including non-objects and unparseable numbers, is `Pending`.
pub fn classify(data: &Value) -> Reading {
    let Some(object) = data.as_object() else {
        return Reading::Pending;
    };

    let denied = ["permission", "error"].iter().any(|field| {
        object
            .get(*field)
            .map(field_text)
            .is_some_and(|text| text.to_lowercase().contains("denied"))
    });
    if denied {
        return Reading::Denied;
    }

    let flat = (object.get("latitude"), object.get("longitude"));
    let (lat, lon) = match flat {
        (Some(lat), Some(lon)) if !lat.is_null() && !lon.is_null() => (lat, lon),
        _ => match object.get("coords").and_then(Value::as_object) {
            Some(coords) => match (coords.get("latitude"), coords.get("longitude")) {
                (Some(lat), Some(lon)) => (lat, lon),
                _ => return Reading::Pending,
            },
            None => return Reading::Pending,
        },
    };

    match (number(lat), number(lon)) {
        (Some(latitude), Some(longitude)) => Reading::Fix(Coordinates { latitude, longitude }),
        _ => Reading::Pending,
    }
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationPhase {
    Idle,
    Awaiting { since: Instant },
}

/// How a wait ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Resolved(Coordinates),
    Denied,
    TimedOut,
}

impl Resolution {
    pub fn message(&self) -> String {
        match self {
            Resolution::Resolved(c) => format!(
                "Localização obtida: lat={:.6}, long={:.6}",
                c.latitude, c.longitude
            ),
            Resolution::Denied => {
                "Permissão de localização negada no navegador. Habilite o acesso para continuar."
                    .to_string()
            }
            Resolution::TimedOut => {
                "Não foi possível obter a localização dentro do tempo limite. Tente novamente."
                    .to_string()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PollOutcome {
    Waiting,
    Finished(Resolution),
    /// Polled without a request in progress.
    Idle,
}

/// Per-session geolocation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationSession {
    phase: LocationPhase,
    coords: Option<Coordinates>,
}

impl Default for LocationSession {
    fn default() -> Self {
        Self {
            phase: LocationPhase::Idle,
            coords: None,
        }
    }
}

impl LocationSession {
    pub fn phase(&self) -> LocationPhase {
        self.phase
    }

    pub fn coords(&self) -> Option<Coordinates> {
        self.coords
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.phase, LocationPhase::Awaiting { .. })
    }

    /// Instant after which a pending wait times out.
    pub fn deadline(&self) -> Option<Instant> {
        match self.phase {
            LocationPhase::Awaiting { since } => Some(since + AWAIT_TIMEOUT),
            LocationPhase::Idle => None,
        }
    }

    /// Start (or restart) a wait. Previously captured coordinates are dropped.
    pub fn request(&mut self, now: Instant) {
        self.phase = LocationPhase::Awaiting { since: now };
        self.coords = None;
    }

    /// Apply one browser reading taken at `now`.
    pub fn poll(&mut self, reading: Reading, now: Instant) -> PollOutcome {
        let LocationPhase::Awaiting { since } = self.phase else {
            return PollOutcome::Idle;
        };

        let resolution = match reading {
            Reading::Fix(coords) => Resolution::Resolved(coords),
            Reading::Denied => Resolution::Denied,
            Reading::Pending if now.saturating_duration_since(since) < AWAIT_TIMEOUT => {
                return PollOutcome::Waiting;
            }
            Reading::Pending => Resolution::TimedOut,
        };

        self.phase = LocationPhase::Idle;
        self.coords = match resolution {
            Resolution::Resolved(coords) => Some(coords),
            Resolution::Denied | Resolution::TimedOut => None,
        };

        PollOutcome::Finished(resolution)
    }
}

/// Wait for the browser's answer on `reports` until the session resolves.
///
/// Returns `None` if the session has no request in progress. A closed
/// channel means no more data can arrive, so the wait runs out the clock.
pub async fn acquire(
    session: &mut LocationSession,
    reports: &mut mpsc::Receiver<Value>,
) -> Option<Resolution> {
    let deadline = session.deadline()?;

    loop {
        let reading = match timeout_at(deadline, reports.recv()).await {
            Ok(Some(data)) => classify(&data),
            Ok(None) => {
                tokio::time::sleep_until(deadline).await;
                Reading::Pending
            }
            Err(_) => Reading::Pending,
        };

        match session.poll(reading, Instant::now()) {
            PollOutcome::Waiting => {
                tracing::debug!("Browser reported no location data yet");
            }
            PollOutcome::Finished(resolution) => return Some(resolution),
            PollOutcome::Idle => return None,
        }
    }
}
