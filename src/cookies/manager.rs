use crate::cookies::canonicalcookie::{CanonicalCookie, Expiry};
use crate::environment::Environment;

const TEST_COOKIE: &str = "browsermap_test_cookie";

/// Cookie access over an [`Environment`]'s cookie jar.
///
/// Reads parse the `document.cookie`-style string the environment returns;
/// writes hand the environment one assignment line per cookie.
pub struct CookieManager<'a, E: Environment + ?Sized> {
    env: &'a mut E,
}

impl<'a, E: Environment + ?Sized> CookieManager<'a, E> {
    pub fn new(env: &'a mut E) -> Self {
        Self { env }
    }

    /// The cookie called `name`, with its decoded value.
    pub fn get(&self, name: &str) -> Option<CanonicalCookie> {
        if name.is_empty() {
            return None;
        }
        let header = self.env.cookie_string();
        cookie::Cookie::split_parse_encoded(header.as_str())
            .filter_map(Result::ok)
            .find(|c| c.name() == name)
            .map(|c| CanonicalCookie::new(c.name(), c.value()))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Writes `cookie`. Reserved or empty names are ignored.
    pub fn set(&mut self, cookie: &CanonicalCookie) {
        if CanonicalCookie::is_reserved_name(&cookie.name) {
            tracing::debug!(name = %cookie.name, "refusing to write cookie with reserved name");
            return;
        }
        let line = cookie.to_cookie_line();
        tracing::trace!(line = %line, "writing cookie");
        self.env.write_cookie(&line);
    }

    /// Expires cookie `name` if it exists.
    pub fn remove(&mut self, name: &str) {
        if !self.exists(name) {
            return;
        }
        tracing::trace!(name = %name, "removing cookie");
        self.env.write_cookie(&CanonicalCookie::removal_line(name));
    }

    /// Round-trips a short-lived test cookie through the jar.
    pub fn cookies_enabled(&mut self) -> bool {
        let probe = CanonicalCookie::new(TEST_COOKIE, TEST_COOKIE)
            .with_expiry(Expiry::Seconds(10))
            .with_path("/");
        self.set(&probe);
        if self.get(TEST_COOKIE).is_some() {
            self.remove(TEST_COOKIE);
            true
        } else {
            false
        }
    }
}
