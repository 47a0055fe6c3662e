//! Cookie model and cookie storage.
//!
//! | Type | Responsibility |
//! |------|----------------|
//! | [`CanonicalCookie`](canonicalcookie::CanonicalCookie) | one cookie and its wire line |
//! | [`Expiry`](canonicalcookie::Expiry) | relative, pre-formatted or absolute expiration |
//! | [`CookieManager`](manager::CookieManager) | get/set/remove/exists over an [`Environment`](crate::environment::Environment) |
//! | [`CookieJar`](jar::CookieJar) | in-memory `document.cookie` used by emulated environments |
//!
//! BrowserMap keeps two cookies: the active device-group cookie
//! (`BMAP_device` by default) and the override-origin cookie (`o_BMAP_device`),
//! which holds the detected groups while a `?device=` override is in effect.
//!
//! ```
//! use browsermap::cookies::jar::CookieJar;
//! use browsermap::cookies::canonicalcookie::CanonicalCookie;
//!
//! let jar = CookieJar::new();
//! jar.parse_and_save_cookie(&CanonicalCookie::new("BMAP_device", "tablet").with_path("/").to_cookie_line());
//! assert_eq!(jar.get("BMAP_device").as_deref(), Some("tablet"));
//! ```

pub mod canonicalcookie;
pub mod jar;
pub mod manager;
