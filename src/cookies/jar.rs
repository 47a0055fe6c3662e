use crate::cookies::canonicalcookie::CanonicalCookie;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use time::OffsetDateTime;

/// A cookie held by the jar, with its resolved expiration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JarEntry {
    pub name: String,
    pub value: String,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
    pub creation_time: OffsetDateTime,
    pub expiration_time: Option<OffsetDateTime>,
}

impl JarEntry {
    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        self.expiration_time
            .is_some_and(|expiry| expiry <= current_time)
    }
}

/// In-memory cookie jar for a single origin, standing in for `document.cookie`.
///
/// Clones share the same storage, so a test can keep a handle on the jar
/// while the engine owns the environment that writes to it. A disabled jar
/// drops every write, like a browser with cookies blocked.
#[derive(Debug, Clone)]
pub struct CookieJar {
    // Store: Map<Name, Entry>
    store: Arc<DashMap<String, JarEntry>>,
    enabled: Arc<AtomicBool>,
}

impl Default for CookieJar {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieJar {
    pub fn new() -> Self {
        Self {
            store: Arc::new(DashMap::new()),
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A jar that ignores all writes.
    pub fn disabled() -> Self {
        let jar = Self::new();
        jar.set_enabled(false);
        jar
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Applies one `document.cookie` assignment.
    ///
    /// A `max-age` takes precedence over `expires`; a cookie whose expiration
    /// is not in the future deletes any stored cookie of the same name.
    pub fn parse_and_save_cookie(&self, cookie_line: &str) {
        if !self.is_enabled() {
            tracing::trace!("cookies disabled, dropping write");
            return;
        }

        let parsed = match cookie::Cookie::parse_encoded(cookie_line) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(error = %e, line = %cookie_line, "failed to parse cookie");
                return;
            }
        };

        let now = OffsetDateTime::now_utc();
        let expiration_time = match parsed.max_age() {
            // Out-of-range lifetimes never expire.
            Some(max_age) => now.checked_add(max_age),
            None => parsed.expires().and_then(|e| e.datetime()),
        };

        if expiration_time.is_some_and(|expiry| expiry <= now) {
            self.store.remove(parsed.name());
            return;
        }

        let entry = JarEntry {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            path: parsed.path().map(str::to_string),
            domain: parsed.domain().map(str::to_string),
            secure: parsed.secure().unwrap_or(false),
            creation_time: now,
            expiration_time,
        };
        self.store.insert(entry.name.clone(), entry);
    }

    /// Live cookies in creation order.
    pub fn entries(&self) -> Vec<JarEntry> {
        let now = OffsetDateTime::now_utc();
        let mut entries: Vec<JarEntry> = self
            .store
            .iter()
            .filter(|e| !e.value().is_expired(now))
            .map(|e| e.value().clone())
            .collect();
        entries.sort_by(|a, b| {
            a.creation_time
                .cmp(&b.creation_time)
                .then_with(|| a.name.cmp(&b.name))
        });
        entries
    }

    /// The `document.cookie` read value: `a=1; b=2`.
    pub fn cookie_string(&self) -> String {
        self.entries()
            .iter()
            .map(|e| {
                cookie::Cookie::new(e.name.as_str(), e.value.as_str())
                    .encoded()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Decoded value of the live cookie `name`.
    pub fn get(&self, name: &str) -> Option<String> {
        let now = OffsetDateTime::now_utc();
        self.store
            .get(name)
            .filter(|e| !e.value().is_expired(now))
            .map(|e| e.value().value.clone())
    }

    /// Stores `cookie` directly, bypassing the enabled switch.
    pub fn insert(&self, cookie: &CanonicalCookie) {
        let enabled = self.is_enabled();
        self.set_enabled(true);
        self.parse_and_save_cookie(&cookie.to_cookie_line());
        self.set_enabled(enabled);
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.store.clear();
    }
}
