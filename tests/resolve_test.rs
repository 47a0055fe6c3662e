use browsermap::devicegroup::DeviceGroupDescriptor;
use browsermap::emulation::{DeviceRegistry, EmulatedEnvironment};
use browsermap::forward::resolve::alternate_site;
use browsermap::page::{DocumentHead, LinkElement};
use browsermap::BrowserMap;

fn engine(head: Option<DocumentHead>) -> BrowserMap<EmulatedEnvironment> {
    let device = DeviceRegistry::get_by_title("Desktop 1080p").unwrap();
    let mut builder = EmulatedEnvironment::builder(device);
    if let Some(head) = head {
        builder = builder.head(head);
    }
    BrowserMap::with_defaults(builder.build()).unwrap()
}

fn alternates() -> DocumentHead {
    DocumentHead::new()
        .with_link(
            LinkElement::alternate("http://x.com/en/phone.html")
                .with_hreflang("en")
                .with_devgroups("smartphone"),
        )
        .with_link(
            LinkElement::alternate("http://x.com/fr/phone.html")
                .with_hreflang("fr")
                .with_devgroups("smartphone"),
        )
        .with_link(
            LinkElement::alternate("http://x.com/fr/index.html")
                .with_hreflang("fr")
                .with_devgroups("browser")
                .as_current_variant(),
        )
}

#[test]
fn test_group_url_without_alternates() {
    let mut map = engine(Some(alternates()));
    map.add_device_group(
        DeviceGroupDescriptor::new("tv")
            .ranking(40.0)
            .url("/m/")
            .selector(true)
            .test(|_| false),
    )
    .unwrap();

    let url = map.resolve_url("http://x.com/index.html?a=1&b=2", &["tv"], &["tv"]);
    assert_eq!(url, "/m/?a=1&b=2");
}

#[test]
fn test_selector_fallback() {
    let map = engine(None);
    let url = map.resolve_url("http://x.com/index.html?a=1", &["tablet", "watch"], &["tablet"]);
    assert_eq!(url, "http://x.com/index.tablet.html?a=1");
}

#[test]
fn test_no_selectors_strips_existing() {
    let map = engine(None);
    let url = map.resolve_url("http://x.com/index.tablet.html", &["browser"], &[] as &[&str]);
    assert_eq!(url, "http://x.com/index.html");
}

#[test]
fn test_current_variant_language_breaks_tie() {
    let map = engine(Some(alternates()));
    let url = map.resolve_url("http://x.com/fr/index.html", &["smartphone"], &["smartphone"]);
    assert_eq!(url, "http://x.com/fr/phone.html");
}

#[test]
fn test_first_alternate_without_tie_break() {
    let head = DocumentHead::new()
        .with_link(LinkElement::alternate("http://x.com/a.html").with_devgroups("tablet"))
        .with_link(LinkElement::alternate("http://x.com/b.html").with_devgroups("tablet"));
    let map = engine(Some(head));
    let url = map.resolve_url("http://x.com/index.html", &["tablet"], &["tablet"]);
    assert_eq!(url, "http://x.com/a.html");
}

#[test]
fn test_more_matching_groups_beat_tie_break() {
    let head = DocumentHead::new()
        .with_link(
            LinkElement::alternate("http://x.com/de/tablet.html")
                .with_hreflang("de")
                .with_devgroups("tablet"),
        )
        .with_link(
            LinkElement::alternate("http://x.com/en/tablet-hd.html")
                .with_hreflang("en")
                .with_devgroups("tablet,highResolutionDisplay,browser"),
        );
    let map = engine(Some(head.clone()));
    let sites = head.alternate_sites();
    let detected = ["tablet", "highResolutionDisplay", "browser"];

    let best = alternate_site(&sites, &detected, |s| s.hreflang.as_deref() == Some("de"));
    assert_eq!(best.unwrap().href, "http://x.com/en/tablet-hd.html");
    assert_eq!(
        map.resolve_url("http://x.com/index.html", &detected, &["tablet"]),
        "http://x.com/en/tablet-hd.html"
    );
}

#[test]
fn test_links_without_devgroups_are_not_sites() {
    let head = DocumentHead::new()
        .with_link(LinkElement::alternate("http://x.com/plain.html").with_hreflang("de"))
        .with_link(LinkElement::canonical("http://x.com/index.html"));
    assert!(head.alternate_sites().is_empty());
    assert_eq!(head.canonical_url(), Some("http://x.com/index.html"));
}
