//! Persistent session storage
//!
//! The browser original keeps the token and the user profile under fixed
//! string keys in local storage. [`SessionStore`] is the equivalent
//! key-value seam; [`TokenStore`] layers the session contract on top of
//! it. Key names are unified across all four dashboard roles.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::types::{Session, UserProfile};

/// Storage key for the access token
pub const TOKEN_KEY: &str = "token";

/// Storage key for the serialized user profile
pub const USER_KEY: &str = "user";

/// String key-value persistence backing a [`TokenStore`].
///
/// Absence of a key is a normal outcome, not an error; implementations
/// swallow and log their own I/O failures.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store, the default for tests and short-lived tools
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

/// JSON-file-backed store; survives process restarts the way browser
/// local storage survives page reloads.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, loading any previously persisted entries.
    /// A missing or unreadable file yields an empty store.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
                warn!("session file {} is corrupt: {}", path.display(), err);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        let json = match serde_json::to_string(entries) {
            Ok(json) => json,
            Err(err) => {
                warn!("could not serialize session file: {}", err);
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            warn!("could not write session file {}: {}", self.path.display(), err);
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        self.persist(&entries);
    }
}

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Best-effort expiry check: decode the JWT payload segment without
/// verifying the signature and compare `exp` against now. Anything that
/// does not decode is treated as unexpired; the backend is the authority.
fn token_expired(token: &str) -> bool {
    let Some(payload) = token.split('.').nth(1) else {
        return false;
    };
    let Ok(bytes) = URL_SAFE_NO_PAD.decode(payload) else {
        return false;
    };
    let Ok(claims) = serde_json::from_slice::<Claims>(&bytes) else {
        return false;
    };
    match claims.exp {
        Some(exp) => chrono::Utc::now().timestamp() >= exp,
        None => false,
    }
}

/// The session contract over a pluggable [`SessionStore`].
///
/// A session is fully present or fully absent: a token without a stored
/// profile, an unparsable profile, or a best-effort-expired token all
/// read as [`Session::Anonymous`]. `clear` is idempotent.
#[derive(Clone)]
pub struct TokenStore {
    store: Arc<dyn SessionStore>,
}

impl TokenStore {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The raw access token, if one is stored
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// The stored user profile, if present and parsable
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("stored user profile is unreadable: {}", err);
                None
            }
        }
    }

    /// The current session as a sum type
    pub fn session(&self) -> Session {
        let (Some(token), Some(user)) = (self.token(), self.user()) else {
            return Session::Anonymous;
        };
        if token_expired(&token) {
            return Session::Anonymous;
        }
        Session::Authenticated { token, user }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    /// Persist a full session. Called by the login flow.
    pub fn set_session(&self, token: &str, user: &UserProfile) -> Result<(), crate::error::Error> {
        let user_json = serde_json::to_string(user)?;
        self.store.set(TOKEN_KEY, token);
        self.store.set(USER_KEY, &user_json);
        Ok(())
    }

    /// Remove both entries; safe to call any number of times.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}
