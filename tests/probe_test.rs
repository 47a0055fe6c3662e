use browsermap::emulation::{DeviceRegistry, EmulatedEnvironment, ScreenOrientation};
use browsermap::probe::{ProbeRegistry, ProbeValue};
use browsermap::{BrowserMap, MapError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn env(title: &str) -> EmulatedEnvironment {
    EmulatedEnvironment::builder(DeviceRegistry::get_by_title(title).unwrap()).build()
}

#[test]
fn test_probe_is_memoized_until_cleared() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut map = BrowserMap::new(env("Pixel 7"));
    map.add_probe("counted", move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        ProbeValue::Number(7.0)
    })
    .unwrap();

    assert_eq!(map.probe("counted"), Some(ProbeValue::Number(7.0)));
    assert_eq!(map.probe("counted"), Some(ProbeValue::Number(7.0)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    map.clear_probe_cache();
    map.probe("counted");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_first_registration_wins() {
    let mut map = BrowserMap::new(env("Pixel 7"));
    map.add_probe("answer", |_| 1.0.into())
        .unwrap()
        .add_probe("answer", |_| 2.0.into())
        .unwrap();
    assert_eq!(map.probe("answer"), Some(ProbeValue::Number(1.0)));
}

#[test]
fn test_invalid_probe_names() {
    let mut map = BrowserMap::new(env("Pixel 7"));
    assert!(matches!(
        map.add_probe("", |_| ProbeValue::Null),
        Err(MapError::InvalidProbeName { .. })
    ));
    assert!(map.add_probe("two words", |_| ProbeValue::Null).is_err());
}

#[test]
fn test_unknown_probe_is_none() {
    let map = BrowserMap::with_defaults(env("Pixel 7")).unwrap();
    assert_eq!(map.probe("window.nothing"), None);
}

#[test]
fn test_probe_cycle_yields_none() {
    let mut probes = ProbeRegistry::new();
    probes.add("a", |s| s.probe("b").unwrap_or(ProbeValue::Null)).unwrap();
    probes.add("b", |s| s.probe("a").unwrap_or(ProbeValue::Null)).unwrap();
    let env = env("Pixel 7");
    assert_eq!(probes.probe("a", &env), Some(ProbeValue::Null));
}

#[test]
fn test_default_probe_values() {
    let map = BrowserMap::with_defaults(env("iPad Mini")).unwrap();
    assert_eq!(map.probe("clientWidth"), Some(ProbeValue::Number(768.0)));
    assert_eq!(map.probe("orientation"), Some(ProbeValue::Text("portrait".into())));
    assert_eq!(map.probe("portrait"), Some(ProbeValue::Bool(true)));
    assert_eq!(map.probe("Modernizr.touch"), Some(ProbeValue::Bool(true)));
    assert_eq!(map.probe("devicePixelRatio"), Some(ProbeValue::Number(2.0)));
    assert_eq!(map.probe("canResizeBrowserWindow"), Some(ProbeValue::Bool(false)));
    assert_eq!(map.probe("window.orientation"), Some(ProbeValue::Number(0.0)));
    assert_eq!(
        map.probe("navigator.platform"),
        Some(ProbeValue::Text("iPad".into()))
    );
}

#[test]
fn test_orientation_dependent_widths() {
    let device = DeviceRegistry::get_by_title("iPad Mini").unwrap();
    let env = EmulatedEnvironment::builder(device)
        .orientation(ScreenOrientation::Landscape)
        .build();
    let map = BrowserMap::with_defaults(env).unwrap();
    assert_eq!(map.probe("landscape"), Some(ProbeValue::Bool(true)));
    assert_eq!(
        map.probe("screenWidthDependingOnOrientation"),
        Some(ProbeValue::Number(1024.0))
    );
    assert_eq!(
        map.probe("clientWidthDependingOnOrientation"),
        Some(ProbeValue::Number(1024.0))
    );
}

#[test]
fn test_desktop_can_resize() {
    let map = BrowserMap::with_defaults(env("Desktop 1080p")).unwrap();
    assert_eq!(map.probe("canResizeBrowserWindow"), Some(ProbeValue::Bool(true)));
    assert_eq!(map.probe("window.orientation"), Some(ProbeValue::Null));
}

#[test]
fn test_probing_results_json() {
    let map = BrowserMap::with_defaults(env("Desktop 1080p")).unwrap();
    let results = map.probing_results();
    assert!(results.contains_key("BrowserMap.version"));
    assert_eq!(results.get("clientWidth"), Some(&ProbeValue::Number(1280.0)));

    let json: serde_json::Value = serde_json::from_str(&map.probing_results_json()).unwrap();
    assert_eq!(json["clientWidth"], 1280.0);
    assert_eq!(json["Modernizr.touch"], false);
}
