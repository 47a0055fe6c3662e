use browsermap::cookies::canonicalcookie::{CanonicalCookie, Expiry};
use browsermap::cookies::jar::CookieJar;
use browsermap::cookies::manager::CookieManager;
use browsermap::emulation::{DeviceRegistry, EmulatedEnvironment};

fn env_with(jar: &CookieJar) -> EmulatedEnvironment {
    let device = DeviceRegistry::get_by_title("Pixel 7").unwrap();
    EmulatedEnvironment::builder(device)
        .cookie_jar(jar.clone())
        .build()
}

#[test]
fn test_set_get_remove() {
    let jar = CookieJar::new();
    let mut env = env_with(&jar);
    let mut cookies = CookieManager::new(&mut env);

    cookies.set(
        &CanonicalCookie::new("BMAP_device", "smartphone,highResolutionDisplay").with_path("/"),
    );
    let cookie = cookies.get("BMAP_device").unwrap();
    assert_eq!(cookie.value, "smartphone,highResolutionDisplay");
    assert!(cookies.exists("BMAP_device"));

    cookies.remove("BMAP_device");
    assert!(!cookies.exists("BMAP_device"));
    assert!(jar.is_empty());
}

#[test]
fn test_reserved_names_are_ignored() {
    let jar = CookieJar::new();
    let mut env = env_with(&jar);
    let mut cookies = CookieManager::new(&mut env);

    for name in ["expires", "Max-Age", "PATH", "domain", "secure", ""] {
        cookies.set(&CanonicalCookie::new(name, "x"));
    }
    assert!(jar.is_empty());
}

#[test]
fn test_cookies_enabled_round_trip() {
    let jar = CookieJar::new();
    let mut env = env_with(&jar);
    assert!(CookieManager::new(&mut env).cookies_enabled());
    assert!(jar.get("browsermap_test_cookie").is_none());

    jar.set_enabled(false);
    assert!(!CookieManager::new(&mut env).cookies_enabled());
}

#[test]
fn test_expiry_lines_reach_the_jar() {
    let jar = CookieJar::new();
    let mut env = env_with(&jar);
    let mut cookies = CookieManager::new(&mut env);

    cookies.set(&CanonicalCookie::new("short", "1").with_expiry(Expiry::Seconds(3600)));
    cookies.set(&CanonicalCookie::new("gone", "1").with_expiry(Expiry::Seconds(-1)));
    cookies.set(
        &CanonicalCookie::new("dated", "1")
            .with_expiry(Expiry::FormattedDate("Thu, 01 Jan 1970 00:00:00 GMT".to_string())),
    );

    assert_eq!(jar.get("short").as_deref(), Some("1"));
    assert!(jar.get("gone").is_none());
    assert!(jar.get("dated").is_none());
    let entry = jar.entries().into_iter().find(|e| e.name == "short").unwrap();
    assert!(entry.expiration_time.is_some());
}

#[test]
fn test_unbounded_lifetime_is_kept() {
    let jar = CookieJar::new();
    let mut env = env_with(&jar);
    let mut cookies = CookieManager::new(&mut env);

    cookies.set(&CanonicalCookie::new("a", "b").with_expiry(Expiry::Seconds(i64::MAX)));
    assert_eq!(cookies.get("a").map(|c| c.value).as_deref(), Some("b"));
}

#[test]
fn test_values_are_percent_encoded() {
    let jar = CookieJar::new();
    let mut env = env_with(&jar);
    let mut cookies = CookieManager::new(&mut env);

    cookies.set(&CanonicalCookie::new("note", "a b;c"));
    assert_eq!(cookies.get("note").unwrap().value, "a b;c");
    let header = jar.cookie_string();
    assert!(header.starts_with("note=a%20b"));
    assert!(!header.contains(';'));
    assert_eq!(jar.get("note").as_deref(), Some("a b;c"));
}

#[test]
fn test_header_lists_cookies_in_creation_order() {
    let jar = CookieJar::new();
    jar.parse_and_save_cookie("first=1");
    jar.parse_and_save_cookie("second=2");
    assert_eq!(jar.cookie_string(), "first=1; second=2");
    assert_eq!(jar.len(), 2);

    jar.clear();
    assert!(jar.is_empty());
}
