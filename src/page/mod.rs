//! Page head model.
//!
//! BrowserMap only reads a handful of head elements:
//!
//! | Markup | Meaning |
//! |--------|---------|
//! | `<link rel="alternate" href hreflang data-bmap-devgroups="g1,g2">` | device/language variant of the page |
//! | `<link rel="alternate" data-bmap-currentvar="true">` | marks the variant being viewed |
//! | `<link rel="canonical" href>` | canonical URL, never forwarded to |
//! | `<meta name="browsermap.enabled" content="false">` | kill switch |
//!
//! [`DocumentHead`] holds those elements in a serde-friendly form so pages can
//! be described as JSON fixtures.

use crate::base::maperror::MapError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute listing the device groups an alternate link serves.
pub const DATA_DEVGROUPS: &str = "data-bmap-devgroups";
/// Attribute marking the alternate link of the current variant.
pub const DATA_CURRENT_VARIANT: &str = "data-bmap-currentvar";
/// Meta name of the kill switch.
pub const META_ENABLED: &str = "browsermap.enabled";

/// A `<link>` element of the document head.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkElement {
    pub rel: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub hreflang: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    /// Remaining attributes, including the `data-bmap-*` ones.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl LinkElement {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn alternate(href: impl Into<String>) -> Self {
        Self::new("alternate", href)
    }

    pub fn canonical(href: impl Into<String>) -> Self {
        Self::new("canonical", href)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    pub fn with_devgroups(self, devgroups: impl Into<String>) -> Self {
        self.with_attribute(DATA_DEVGROUPS, devgroups)
    }

    pub fn as_current_variant(self) -> Self {
        self.with_attribute(DATA_CURRENT_VARIANT, "true")
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn to_site(&self) -> AlternateSite {
        AlternateSite {
            id: self.id.clone(),
            href: self.href.clone(),
            hreflang: self.hreflang.clone(),
            devgroups: self.attribute(DATA_DEVGROUPS).unwrap_or_default().to_string(),
        }
    }
}

/// A `<meta>` element of the document head.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaElement {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl MetaElement {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            content: Some(content.into()),
        }
    }
}

/// The parts of `<head>` BrowserMap reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHead {
    #[serde(default)]
    pub links: Vec<LinkElement>,
    #[serde(default)]
    pub metas: Vec<MetaElement>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a head description such as
    /// `{"links": [{"rel": "canonical", "href": "/a.html"}]}`.
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        serde_json::from_str(json).map_err(|e| MapError::invalid_document(e.to_string()))
    }

    pub fn with_link(mut self, link: LinkElement) -> Self {
        self.links.push(link);
        self
    }

    pub fn with_meta(mut self, meta: MetaElement) -> Self {
        self.metas.push(meta);
        self
    }

    /// Alternate links that declare at least one device group, in document order.
    pub fn alternate_sites(&self) -> Vec<AlternateSite> {
        self.links
            .iter()
            .filter(|link| link.rel == "alternate")
            .filter(|link| link.attribute(DATA_DEVGROUPS).is_some_and(|d| !d.is_empty()))
            .map(LinkElement::to_site)
            .collect()
    }

    /// The alternate link marked with `data-bmap-currentvar="true"`.
    pub fn current_variant(&self) -> Option<AlternateSite> {
        self.links
            .iter()
            .filter(|link| link.rel == "alternate")
            .find(|link| link.attribute(DATA_CURRENT_VARIANT) == Some("true"))
            .map(LinkElement::to_site)
    }

    /// Href of the first `rel="canonical"` link.
    pub fn canonical_url(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel == "canonical")
            .map(|link| link.href.as_str())
    }

    /// False only when `<meta name="browsermap.enabled" content="false">` is present.
    pub fn is_enabled(&self) -> bool {
        !self.metas.iter().any(|meta| {
            meta.name.as_deref() == Some(META_ENABLED) && meta.content.as_deref() == Some("false")
        })
    }
}

/// A device/language variant of the page declared by an alternate link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateSite {
    pub id: Option<String>,
    pub href: String,
    pub hreflang: Option<String>,
    /// Comma-separated device group names.
    pub devgroups: String,
}

impl AlternateSite {
    /// Trimmed, non-empty device group tokens.
    pub fn devgroup_tokens(&self) -> impl Iterator<Item = &str> {
        self.devgroups
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head() -> DocumentHead {
        DocumentHead::new()
            .with_link(LinkElement::canonical("http://x.com/index.html"))
            .with_link(
                LinkElement::alternate("http://x.com/m/index.html")
                    .with_hreflang("en")
                    .with_devgroups("smartphone, tablet"),
            )
            .with_link(LinkElement::alternate("http://x.com/de/index.html").with_hreflang("de"))
            .with_link(
                LinkElement::alternate("http://x.com/index.html")
                    .with_hreflang("en")
                    .as_current_variant(),
            )
    }

    #[test]
    fn test_alternate_sites_need_devgroups() {
        let sites = head().alternate_sites();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].href, "http://x.com/m/index.html");
        assert_eq!(
            sites[0].devgroup_tokens().collect::<Vec<_>>(),
            vec!["smartphone", "tablet"]
        );
    }

    #[test]
    fn test_current_variant() {
        let variant = head().current_variant().unwrap();
        assert_eq!(variant.href, "http://x.com/index.html");
        assert_eq!(variant.hreflang.as_deref(), Some("en"));
        assert_eq!(variant.devgroups, "");
    }

    #[test]
    fn test_canonical_url() {
        assert_eq!(head().canonical_url(), Some("http://x.com/index.html"));
        assert_eq!(DocumentHead::new().canonical_url(), None);
    }

    #[test]
    fn test_kill_switch() {
        assert!(head().is_enabled());
        let disabled = head().with_meta(MetaElement::new(META_ENABLED, "false"));
        assert!(!disabled.is_enabled());
        let other = head().with_meta(MetaElement::new(META_ENABLED, "true"));
        assert!(other.is_enabled());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "links": [
                {"rel": "alternate", "href": "/t/", "attributes": {"data-bmap-devgroups": "tablet"}}
            ],
            "metas": [{"name": "browsermap.enabled", "content": "false"}]
        }"#;
        let head = DocumentHead::from_json(json).unwrap();
        assert_eq!(head.alternate_sites()[0].devgroups, "tablet");
        assert!(!head.is_enabled());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = DocumentHead::from_json("{\"links\": 3}").unwrap_err();
        assert!(matches!(err, MapError::InvalidDocument { .. }));
    }
}
