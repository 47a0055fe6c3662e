use super::device::{Device, DEFAULT_CHROME_VERSION};
use crate::cookies::jar::CookieJar;
use crate::environment::{DisplayInfo, Environment, FeatureSupport, NavigatorInfo};
use crate::page::DocumentHead;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenOrientation {
    #[default]
    Portrait,
    Landscape,
}

/// An [`Environment`] backed by a [`Device`] profile.
///
/// Navigation is recorded and also moves the current URL, so calling the
/// forwarding controller again behaves like the next page load.
#[derive(Debug, Clone)]
pub struct EmulatedEnvironment {
    device: Device,
    orientation: ScreenOrientation,
    viewport: (u32, u32),
    url: String,
    head: Option<DocumentHead>,
    navigator: NavigatorInfo,
    cookies: CookieJar,
    anchors: Vec<String>,
    navigations: Vec<String>,
    media_queries: bool,
}

impl EmulatedEnvironment {
    pub fn builder(device: Device) -> EmulatedEnvironmentBuilder {
        EmulatedEnvironmentBuilder::new(device)
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn orientation(&self) -> ScreenOrientation {
        self.orientation
    }

    pub fn cookie_jar(&self) -> &CookieJar {
        &self.cookies
    }

    /// Every URL navigated to, oldest first.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub fn last_navigation(&self) -> Option<&str> {
        self.navigations.last().map(String::as_str)
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn set_head(&mut self, head: DocumentHead) {
        self.head = Some(head);
    }

    pub fn anchors(&self) -> &[String] {
        &self.anchors
    }
}

impl Environment for EmulatedEnvironment {
    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn document_head(&self) -> Option<&DocumentHead> {
        self.head.as_ref()
    }

    fn navigator_info(&self) -> &NavigatorInfo {
        &self.navigator
    }

    fn display(&self) -> DisplayInfo {
        let (width, height) = self.viewport;
        let orientation_angle = self.device.is_mobile().then_some(match self.orientation {
            ScreenOrientation::Portrait => 0,
            ScreenOrientation::Landscape => 90,
        });
        DisplayInfo {
            screen_width: self.device.screen.width,
            screen_height: self.device.screen.height,
            client_width: width,
            client_height: height,
            inner_width: width,
            inner_height: height,
            device_pixel_ratio: self.device.screen.device_scale_factor,
            orientation_angle,
        }
    }

    fn features(&self) -> FeatureSupport {
        FeatureSupport {
            touch: self.device.has_touch(),
            css_transforms_3d: self.device.has_css_transforms_3d(),
        }
    }

    /// Understands `max-resolution: <n>dppx` and
    /// `-webkit-max-device-pixel-ratio: <n>` clauses; any other clause does
    /// not match.
    fn match_media(&self, query: &str) -> Option<bool> {
        if !self.media_queries {
            return None;
        }
        let ratio = self.device.screen.device_scale_factor;
        let matches = query.split(',').any(|clause| {
            let clause = clause.trim().trim_start_matches('(').trim_end_matches(')');
            let Some((feature, value)) = clause.split_once(':') else {
                return false;
            };
            let value = value.trim();
            let limit = match feature.trim() {
                "max-resolution" => value.strip_suffix("dppx"),
                "-webkit-max-device-pixel-ratio" => Some(value),
                _ => None,
            };
            limit
                .and_then(|v| v.trim().parse::<f64>().ok())
                .is_some_and(|limit| ratio <= limit + 1e-9)
        });
        Some(matches)
    }

    fn cookie_string(&self) -> String {
        self.cookies.cookie_string()
    }

    fn write_cookie(&mut self, line: &str) {
        self.cookies.parse_and_save_cookie(line);
    }

    fn anchor_hrefs(&self) -> Vec<String> {
        self.anchors.clone()
    }

    fn set_anchor_href(&mut self, index: usize, href: String) {
        if let Some(anchor) = self.anchors.get_mut(index) {
            *anchor = href;
        }
    }

    fn navigate(&mut self, url: &str) {
        tracing::debug!(url = %url, "navigating");
        self.navigations.push(url.to_string());
        self.url = url.to_string();
    }
}

/// Builder for [`EmulatedEnvironment`].
#[derive(Debug, Clone)]
#[must_use]
pub struct EmulatedEnvironmentBuilder {
    device: Device,
    orientation: Option<ScreenOrientation>,
    viewport: Option<(u32, u32)>,
    url: String,
    head: Option<DocumentHead>,
    cookies: Option<CookieJar>,
    anchors: Vec<String>,
    media_queries: bool,
}

impl EmulatedEnvironmentBuilder {
    pub fn new(device: Device) -> Self {
        Self {
            device,
            orientation: None,
            viewport: None,
            url: String::new(),
            head: None,
            cookies: None,
            anchors: Vec::new(),
            media_queries: true,
        }
    }

    /// Defaults to portrait for mobile devices and landscape otherwise.
    pub fn orientation(mut self, orientation: ScreenOrientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn landscape(self) -> Self {
        self.orientation(ScreenOrientation::Landscape)
    }

    pub fn portrait(self) -> Self {
        self.orientation(ScreenOrientation::Portrait)
    }

    /// Overrides the viewport the device profile gives for the orientation.
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = Some((width, height));
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn head(mut self, head: DocumentHead) -> Self {
        self.head = Some(head);
        self
    }

    /// Shares `jar` with the environment; keep a clone to inspect it.
    pub fn cookie_jar(mut self, jar: CookieJar) -> Self {
        self.cookies = Some(jar);
        self
    }

    pub fn anchor(mut self, href: impl Into<String>) -> Self {
        self.anchors.push(href.into());
        self
    }

    /// Makes `match_media` report that media queries are unsupported.
    pub fn without_media_queries(mut self) -> Self {
        self.media_queries = false;
        self
    }

    pub fn build(self) -> EmulatedEnvironment {
        let orientation = self.orientation.unwrap_or(if self.device.is_mobile() {
            ScreenOrientation::Portrait
        } else {
            ScreenOrientation::Landscape
        });
        let size = match orientation {
            ScreenOrientation::Portrait => self.device.screen.vertical,
            ScreenOrientation::Landscape => self.device.screen.horizontal,
        };
        let viewport = self.viewport.unwrap_or((size.width, size.height));

        let user_agent = self.device.get_user_agent(DEFAULT_CHROME_VERSION);
        let navigator = NavigatorInfo {
            app_version: user_agent
                .strip_prefix("Mozilla/")
                .unwrap_or(&user_agent)
                .to_string(),
            user_agent,
            vendor: self.device.vendor.to_string(),
            platform: self.device.platform.to_string(),
            app_name: "Netscape".to_string(),
            app_code_name: "Mozilla".to_string(),
        };

        EmulatedEnvironment {
            device: self.device,
            orientation,
            viewport,
            url: self.url,
            head: self.head,
            navigator,
            cookies: self.cookies.unwrap_or_default(),
            anchors: self.anchors,
            navigations: Vec::new(),
            media_queries: self.media_queries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emulation::DeviceRegistry;

    fn device(title: &str) -> Device {
        DeviceRegistry::get_by_title(title).unwrap()
    }

    #[test]
    fn test_mobile_defaults_to_portrait() {
        let env = EmulatedEnvironment::builder(device("Pixel 7")).build();
        assert_eq!(env.orientation(), ScreenOrientation::Portrait);
        let display = env.display();
        assert_eq!((display.client_width, display.client_height), (412, 915));
        assert_eq!(display.orientation_angle, Some(0));
    }

    #[test]
    fn test_desktop_defaults_to_landscape() {
        let env = EmulatedEnvironment::builder(device("Desktop 1080p")).build();
        assert_eq!(env.orientation(), ScreenOrientation::Landscape);
        assert_eq!(env.display().client_width, 1280);
        assert_eq!(env.display().orientation_angle, None);
    }

    #[test]
    fn test_media_query_resolution() {
        let env = EmulatedEnvironment::builder(device("iPad Mini")).build();
        assert_eq!(env.match_media("(max-resolution: 1.95dppx)"), Some(false));
        assert_eq!(env.match_media("(max-resolution: 2dppx)"), Some(true));
        assert_eq!(
            env.match_media("(min-width: 10px), (-webkit-max-device-pixel-ratio: 2.5)"),
            Some(true)
        );

        let no_mq = EmulatedEnvironment::builder(device("iPad Mini"))
            .without_media_queries()
            .build();
        assert_eq!(no_mq.match_media("(max-resolution: 2dppx)"), None);
    }

    #[test]
    fn test_navigator_from_device() {
        let env = EmulatedEnvironment::builder(device("Pixel 7")).build();
        let nav = env.navigator_info();
        assert!(nav.user_agent.contains("Chrome/120.0.0.0"));
        assert!(nav.app_version.starts_with("5.0 (Linux"));
        assert_eq!(nav.app_code_name, "Mozilla");
    }

    #[test]
    fn test_navigate_moves_location() {
        let mut env = EmulatedEnvironment::builder(device("Pixel 7"))
            .url("http://x.com/index.html")
            .build();
        env.navigate("http://x.com/index.smartphone.html");
        assert_eq!(env.current_url(), "http://x.com/index.smartphone.html");
        assert_eq!(env.navigations().len(), 1);
    }

    #[test]
    fn test_anchor_rewrite() {
        let mut env = EmulatedEnvironment::builder(device("Pixel 7"))
            .anchor("http://x.com/a.html")
            .build();
        env.set_anchor_href(0, "http://x.com/a.html?device=tablet".to_string());
        env.set_anchor_href(5, "ignored".to_string());
        assert_eq!(env.anchors(), ["http://x.com/a.html?device=tablet"]);
    }
}
