use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde_json::Value;
use tokio::sync::{mpsc, Mutex};
use tokio::time::Instant;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::geolocation::LocationSession;

pub const SESSION_COOKIE: &str = "sara_session";

/// Browser reports buffered while nobody is awaiting them.
const REPORT_BUFFER: usize = 16;

/// Sessions untouched for this long are dropped by [`SessionStore::purge_idle`].
pub const SESSION_TTL: Duration = Duration::from_secs(60 * 60);

/// State kept for one browser session.
#[derive(Debug)]
pub struct SessionEntry {
    pub location: LocationSession,
    last_seen: Instant,
    reports_tx: Option<mpsc::Sender<Value>>,
    reports_rx: Option<mpsc::Receiver<Value>>,
}

impl SessionEntry {
    fn new(now: Instant) -> Self {
        Self {
            location: LocationSession::default(),
            last_seen: now,
            reports_tx: None,
            reports_rx: None,
        }
    }
}

/// In-memory session registry. Entries are created on first use and dropped
/// once idle for [`SESSION_TTL`].
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, SessionEntry>>>,
}

/// Read the session id from the cookie jar, issuing a new one when missing
/// or malformed.
pub fn session_id(jar: CookieJar) -> (CookieJar, Uuid) {
    if let Some(id) = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
    {
        return (jar, id);
    }

    let id = Uuid::new_v4();
    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true);
    (jar.add(cookie), id)
}

fn evict_idle(sessions: &mut HashMap<Uuid, SessionEntry>, now: Instant) -> usize {
    let before = sessions.len();
    sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) < SESSION_TTL);
    before - sessions.len()
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    /// Drop every session idle for at least [`SESSION_TTL`].
    pub async fn purge_idle(&self) -> usize {
        let mut sessions = self.inner.lock().await;
        let evicted = evict_idle(&mut sessions, Instant::now());
        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.len(), "Idle sessions evicted");
        }
        evicted
    }

    /// Snapshot of the session's geolocation state.
    pub async fn location(&self, id: Uuid) -> LocationSession {
        let mut sessions = self.inner.lock().await;
        match sessions.get_mut(&id) {
            Some(entry) => {
                entry.last_seen = Instant::now();
                entry.location
            }
            None => LocationSession::default(),
        }
    }

    /// Start a fresh wait, replacing any channel from an earlier request.
    pub async fn request_location(&self, id: Uuid) -> LocationSession {
        let now = Instant::now();
        let mut sessions = self.inner.lock().await;
        evict_idle(&mut sessions, now);

        let entry = sessions.entry(id).or_insert_with(|| SessionEntry::new(now));
        let (tx, rx) = mpsc::channel(REPORT_BUFFER);
        entry.location.request(now);
        entry.last_seen = now;
        entry.reports_tx = Some(tx);
        entry.reports_rx = Some(rx);
        tracing::debug!(session = %id, "Location requested");
        entry.location
    }

    /// Forward a raw browser response to the pending wait.
    pub async fn report(&self, id: Uuid, data: Value) -> AppResult<()> {
        let mut sessions = self.inner.lock().await;
        let entry = sessions
            .get_mut(&id)
            .filter(|s| s.location.is_awaiting())
            .ok_or_else(|| AppError::Conflict("Nenhuma solicitação de localização em andamento.".to_string()))?;
        entry.last_seen = Instant::now();
        let tx = entry
            .reports_tx
            .as_ref()
            .ok_or_else(|| AppError::Conflict("Nenhuma solicitação de localização em andamento.".to_string()))?;

        // A full buffer only drops a reading; the wait stays bounded by its deadline
        if tx.try_send(data).is_err() {
            tracing::warn!(session = %id, "Dropped browser location report");
        }
        Ok(())
    }

    /// Take the report receiver for a wait. Only one waiter per request.
    pub async fn begin_wait(
        &self,
        id: Uuid,
    ) -> AppResult<(LocationSession, mpsc::Receiver<Value>)> {
        let mut sessions = self.inner.lock().await;
        let entry = sessions
            .get_mut(&id)
            .filter(|s| s.location.is_awaiting())
            .ok_or_else(|| AppError::Conflict("Nenhuma solicitação de localização em andamento.".to_string()))?;
        entry.last_seen = Instant::now();

        // An earlier waiter went away and took the receiver with it
        if entry.reports_rx.is_none() && entry.reports_tx.as_ref().is_none_or(|tx| tx.is_closed()) {
            let (tx, rx) = mpsc::channel(REPORT_BUFFER);
            entry.reports_tx = Some(tx);
            entry.reports_rx = Some(rx);
        }

        let rx = entry
            .reports_rx
            .take()
            .ok_or_else(|| AppError::Conflict("A localização já está sendo aguardada.".to_string()))?;
        Ok((entry.location, rx))
    }

    /// Store the outcome of a wait. A request issued meanwhile takes precedence,
    /// and a session evicted in the meantime stays gone.
    pub async fn finish_wait(&self, id: Uuid, started: LocationSession, location: LocationSession) {
        let mut sessions = self.inner.lock().await;
        let Some(entry) = sessions.get_mut(&id) else {
            return;
        };
        if entry.location != started {
            return;
        }
        entry.location = location;
        entry.last_seen = Instant::now();
        if !location.is_awaiting() {
            entry.reports_tx = None;
            entry.reports_rx = None;
        }
    }
}

/// Periodically evict idle sessions for the life of the process.
pub fn spawn_sweeper(store: SessionStore, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            store.purge_idle().await;
        }
    })
}
