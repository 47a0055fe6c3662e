//! The capability interface BrowserMap runs against.
//!
//! Everything the engine reads from or writes to the page goes through
//! [`Environment`]: the location, the head elements, navigator and display
//! measurements, the cookie jar, the page's anchors, and navigation. A real
//! embedding backs it with a browser; [`crate::emulation::EmulatedEnvironment`]
//! backs it with a device profile and an in-memory cookie jar.

use crate::page::DocumentHead;
use serde::{Deserialize, Serialize};

/// Navigator properties exposed by the `navigator.*` probes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorInfo {
    pub user_agent: String,
    pub vendor: String,
    pub platform: String,
    pub app_name: String,
    pub app_version: String,
    pub app_code_name: String,
}

/// Screen and viewport measurements, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayInfo {
    pub screen_width: u32,
    pub screen_height: u32,
    /// `document.documentElement.clientWidth`.
    pub client_width: u32,
    pub client_height: u32,
    pub inner_width: u32,
    pub inner_height: u32,
    /// `window.devicePixelRatio`.
    pub device_pixel_ratio: f64,
    /// `window.orientation`, when the platform reports one.
    pub orientation_angle: Option<i32>,
}

/// CSS/DOM feature support, the subset Modernizr reports for BrowserMap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSupport {
    pub touch: bool,
    pub css_transforms_3d: bool,
}

pub trait Environment {
    /// `window.location.href`.
    fn current_url(&self) -> String;

    /// The document head, if the page has one.
    fn document_head(&self) -> Option<&DocumentHead>;

    fn navigator_info(&self) -> &NavigatorInfo;

    fn display(&self) -> DisplayInfo;

    fn features(&self) -> FeatureSupport;

    /// Evaluate a media query; `None` when media queries are unavailable.
    fn match_media(&self, query: &str) -> Option<bool>;

    /// `document.cookie` as read: `name=value` pairs joined by `"; "`.
    fn cookie_string(&self) -> String;

    /// `document.cookie = line`.
    fn write_cookie(&mut self, line: &str);

    /// Hrefs of the `<a>` elements of the page, in document order.
    fn anchor_hrefs(&self) -> Vec<String>;

    fn set_anchor_href(&mut self, index: usize, href: String);

    /// Full page load of `url`.
    fn navigate(&mut self, url: &str);
}
