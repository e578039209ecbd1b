// src/browser/sessions.rs
use crate::browser::BrowserState;
use crate::errors::ServerError;
use base64::Engine;
use rand::{rngs::OsRng, RngCore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub const SESSION_COOKIE: &str = "session";

/// One open page: its id and the browser state behind it.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub state: Arc<Mutex<BrowserState>>,
    /// Set when the id was issued by this request and still has to reach the client.
    pub is_new: bool,
}

#[derive(Debug)]
struct Entry {
    state: Arc<Mutex<BrowserState>>,
    last_seen: Instant,
}

/// Browser states keyed by session id, bounded in count and idle time.
#[derive(Debug)]
pub struct Sessions {
    entries: Mutex<HashMap<String, Entry>>,
    max_sessions: usize,
    idle: Duration,
}

impl Sessions {
    pub fn new(max_sessions: usize, idle: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
            idle,
        }
    }

    /// The session named by `token`, or a fresh one when it is unknown or has gone idle.
    pub fn resolve(&self, token: Option<&str>) -> Result<Session, ServerError> {
        let mut entries = self.entries.lock().map_err(|_| {
            tracing::error!("session table lock poisoned");
            ServerError::InternalError
        })?;
        let now = Instant::now();

        if let Some(id) = token {
            match entries.get_mut(id) {
                Some(entry) if now.duration_since(entry.last_seen) <= self.idle => {
                    entry.last_seen = now;
                    return Ok(Session {
                        id: id.to_string(),
                        state: Arc::clone(&entry.state),
                        is_new: false,
                    });
                }
                Some(_) => {
                    entries.remove(id);
                    tracing::debug!("session expired");
                }
                None => {}
            }
        }

        self.make_room(&mut entries, now);

        let id = new_session_id();
        let state = Arc::new(Mutex::new(BrowserState::default()));
        entries.insert(
            id.clone(),
            Entry {
                state: Arc::clone(&state),
                last_seen: now,
            },
        );
        tracing::debug!(sessions = entries.len(), "session created");

        Ok(Session {
            id,
            state,
            is_new: true,
        })
    }

    /// State of an existing session without touching its idle clock.
    pub fn get(&self, id: &str) -> Option<Arc<Mutex<BrowserState>>> {
        let entries = self.entries.lock().ok()?;
        entries.get(id).map(|e| Arc::clone(&e.state))
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    // Drop idle sessions, then the least recently seen ones until a new one fits.
    fn make_room(&self, entries: &mut HashMap<String, Entry>, now: Instant) {
        entries.retain(|_, e| now.duration_since(e.last_seen) <= self.idle);

        while entries.len() >= self.max_sessions {
            let oldest = entries
                .iter()
                .min_by_key(|(_, e)| e.last_seen)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    entries.remove(&id);
                    tracing::debug!("evicted least recently used session");
                }
                None => break,
            }
        }
    }
}

pub fn new_session_id() -> String {
    let mut raw = [0u8; 32];
    OsRng.fill_bytes(&mut raw);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}

/// Value of the session cookie in a `Cookie` request header, if any.
pub fn session_cookie(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value issuing `id` to the browser.
pub fn set_cookie_value(id: &str) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
