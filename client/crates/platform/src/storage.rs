//! Storage Backends and Hybrid Façade
//!
//! Two interchangeable key/value stores behind one façade:
//! - [`CookieStore`]: the session token lives here so it is readable during
//!   server-side rendering, before any client-local storage exists.
//! - [`PersistentStore`]: everything else (the cached user snapshot) lives
//!   here, so it never bloats outgoing requests as a cookie would.
//!
//! Scoping replaces ambient globals: a store is constructed either against
//! an explicit per-request cookie context, against the process-wide jar of a
//! long-lived client session, or detached. Invariant: no backend ever
//! panics or errors merely because it runs outside its native environment —
//! reads degrade to `None`, writes to no-ops.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use http::HeaderMap;

use crate::cookie::{CookieConfig, extract_all_cookies};

/// Storage key for the bearer token (cookie-routed)
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Storage key for the serialized user snapshot (persistent-routed)
pub const USER_DATA_KEY: &str = "user_data";

/// Keys that must always live in the cookie backend
const COOKIE_ROUTED_KEYS: &[&str] = &[AUTH_TOKEN_KEY];

// ============================================================================
// Request-scoped cookie context
// ============================================================================

/// Cookie state for one server-rendered request
///
/// Holds the cookies the request arrived with plus any writes made while
/// serving it. Writes shadow incoming values so a set-then-get within the
/// same request observes the new value. A `None` pending value is a
/// deletion tombstone.
#[derive(Debug, Default)]
pub struct RequestCookies {
    incoming: HashMap<String, String>,
    pending: RwLock<HashMap<String, Option<String>>>,
}

impl RequestCookies {
    /// Build from the request's `Cookie` header
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            incoming: extract_all_cookies(headers).into_iter().collect(),
            pending: RwLock::new(HashMap::new()),
        }
    }

    /// Build from explicit pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            incoming: pairs.into_iter().collect(),
            pending: RwLock::new(HashMap::new()),
        }
    }

    fn get(&self, name: &str) -> Option<String> {
        let pending = self.pending.read().unwrap_or_else(|e| e.into_inner());
        match pending.get(name) {
            Some(Some(value)) => Some(value.clone()),
            Some(None) => None,
            None => self.incoming.get(name).cloned(),
        }
    }

    fn set(&self, name: &str, value: &str) {
        self.pending
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string(), Some(value.to_string()));
    }

    fn remove(&self, name: &str) {
        self.pending
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string(), None);
    }

    /// `Set-Cookie` header values for every write made during the request
    pub fn set_cookie_values(&self, config: &CookieConfig) -> Vec<String> {
        let pending = self.pending.read().unwrap_or_else(|e| e.into_inner());
        let mut names: Vec<&String> = pending.keys().collect();
        names.sort();
        names
            .into_iter()
            .map(|name| match &pending[name] {
                Some(value) => config.build_set_cookie(name, value),
                None => config.build_delete_cookie(name),
            })
            .collect()
    }
}

// ============================================================================
// Cookie-backed store
// ============================================================================

#[derive(Debug, Clone)]
enum CookieScope {
    /// Server rendering: bound to one request's cookie context
    Request(Arc<RequestCookies>),
    /// Long-lived client session: one process-wide jar
    Process(Arc<RwLock<HashMap<String, String>>>),
    /// No cookie environment at all
    Detached,
}

/// Cookie-backed key/value store
#[derive(Debug, Clone)]
pub struct CookieStore {
    scope: CookieScope,
}

impl CookieStore {
    /// Store bound to one request's cookie context
    pub fn for_request(cookies: Arc<RequestCookies>) -> Self {
        Self {
            scope: CookieScope::Request(cookies),
        }
    }

    /// Store backed by a fresh process-wide jar
    pub fn process() -> Self {
        Self {
            scope: CookieScope::Process(Arc::new(RwLock::new(HashMap::new()))),
        }
    }

    /// Store with no cookie environment; reads return `None`, writes no-op
    pub fn detached() -> Self {
        Self {
            scope: CookieScope::Detached,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match &self.scope {
            CookieScope::Request(cookies) => cookies.get(key),
            CookieScope::Process(jar) => jar
                .read()
                .unwrap_or_else(|e| e.into_inner())
                .get(key)
                .cloned(),
            CookieScope::Detached => None,
        }
    }

    pub fn set(&self, key: &str, value: &str) {
        match &self.scope {
            CookieScope::Request(cookies) => cookies.set(key, value),
            CookieScope::Process(jar) => {
                jar.write()
                    .unwrap_or_else(|e| e.into_inner())
                    .insert(key.to_string(), value.to_string());
            }
            CookieScope::Detached => {
                tracing::debug!(key, "Cookie write ignored: no cookie environment");
            }
        }
    }

    pub fn remove(&self, key: &str) {
        match &self.scope {
            CookieScope::Request(cookies) => cookies.remove(key),
            CookieScope::Process(jar) => {
                jar.write().unwrap_or_else(|e| e.into_inner()).remove(key);
            }
            CookieScope::Detached => {}
        }
    }
}

// ============================================================================
// Persistent store
// ============================================================================

/// Client-local persistent store
///
/// Lives for the whole client session in its native environment. During
/// server rendering no such storage exists, so the detached construction
/// degrades every operation to a safe no-op.
#[derive(Debug, Clone)]
pub struct PersistentStore {
    inner: Option<Arc<RwLock<HashMap<String, String>>>>,
}

impl PersistentStore {
    /// Live store for a long-lived client session
    pub fn new() -> Self {
        Self {
            inner: Some(Arc::new(RwLock::new(HashMap::new()))),
        }
    }

    /// Store for environments without client-local persistence
    pub fn detached() -> Self {
        Self { inner: None }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let inner = self.inner.as_ref()?;
        inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    pub fn set(&self, key: &str, value: &str) {
        let Some(inner) = &self.inner else {
            tracing::debug!(key, "Persistent write ignored: no client storage");
            return;
        };
        inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    pub fn remove(&self, key: &str) {
        let Some(inner) = &self.inner else { return };
        inner.write().unwrap_or_else(|e| e.into_inner()).remove(key);
    }
}

impl Default for PersistentStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Hybrid façade
// ============================================================================

/// Hybrid key/value façade
///
/// Routes the fixed cookie-routed key set to the cookie backend and every
/// other key to the persistent backend. Callers never pick a backend
/// themselves.
#[derive(Debug, Clone)]
pub struct HybridStorage {
    cookies: CookieStore,
    persistent: PersistentStore,
}

impl HybridStorage {
    pub fn new(cookies: CookieStore, persistent: PersistentStore) -> Self {
        Self {
            cookies,
            persistent,
        }
    }

    /// Storage for a long-lived client session
    pub fn client() -> Self {
        Self::new(CookieStore::process(), PersistentStore::new())
    }

    /// Storage for one server-rendered request
    ///
    /// The persistent backend is detached: client-local storage does not
    /// exist while rendering on the server.
    pub fn for_request(cookies: Arc<RequestCookies>) -> Self {
        Self::new(CookieStore::for_request(cookies), PersistentStore::detached())
    }

    fn is_cookie_routed(key: &str) -> bool {
        COOKIE_ROUTED_KEYS.contains(&key)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        if Self::is_cookie_routed(key) {
            self.cookies.get(key)
        } else {
            self.persistent.get(key)
        }
    }

    pub fn set(&self, key: &str, value: &str) {
        if Self::is_cookie_routed(key) {
            self.cookies.set(key, value);
        } else {
            self.persistent.set(key, value);
        }
    }

    pub fn remove(&self, key: &str) {
        if Self::is_cookie_routed(key) {
            self.cookies.remove(key);
        } else {
            self.persistent.remove(key);
        }
    }
}
