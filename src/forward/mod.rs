//! The BrowserMap engine.
//!
//! [`BrowserMap`] ties the pieces together: it owns the probe and device
//! group registries, the configuration and the [`Environment`], and runs the
//! forwarding state machine in [`BrowserMap::forward_request`].
//!
//! ```
//! use browsermap::BrowserMap;
//! use browsermap::emulation::{DeviceRegistry, EmulatedEnvironment};
//!
//! let device = DeviceRegistry::get_by_title("iPad Mini").unwrap();
//! let env = EmulatedEnvironment::builder(device)
//!     .url("http://www.example.com/index.html")
//!     .build();
//!
//! let mut map = BrowserMap::with_defaults(env).unwrap();
//! let outcome = map.forward_request();
//! assert_eq!(
//!     outcome.target.as_deref(),
//!     Some("http://www.example.com/index.tablet.highResolutionDisplay.html")
//! );
//! assert!(outcome.navigated);
//! ```

pub mod resolve;
mod state;

pub use state::{ForwardOutcome, ForwardState};

use crate::base::collections::difference;
use crate::base::maperror::MapError;
use crate::config::{BrowserMapConfig, ConfigOverrides};
use crate::cookies::canonicalcookie::CanonicalCookie;
use crate::cookies::manager::CookieManager;
use crate::devicegroup::{
    self, DeviceGroup, DeviceGroupDescriptor, DeviceGroupRegistry, MatchedSet,
};
use crate::environment::Environment;
use crate::probe::{self, ProbeRegistry, ProbeScope, ProbeValue};
use crate::urlutil;
use resolve::ResolveContext;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Device detection and variant forwarding over an [`Environment`].
pub struct BrowserMap<E: Environment> {
    config: BrowserMapConfig,
    probes: ProbeRegistry,
    groups: DeviceGroupRegistry,
    matched: MatchedSet,
    match_run: bool,
    language_override: Option<String>,
    env: E,
}

impl<E: Environment> BrowserMap<E> {
    /// An engine with no probes and no device groups.
    pub fn new(env: E) -> Self {
        Self {
            config: BrowserMapConfig::default(),
            probes: ProbeRegistry::new(),
            groups: DeviceGroupRegistry::new(),
            matched: MatchedSet::new(),
            match_run: false,
            language_override: None,
            env,
        }
    }

    /// An engine with the default probes and device groups installed.
    pub fn with_defaults(env: E) -> Result<Self, MapError> {
        let mut map = Self::new(env);
        probe::defaults::install(&mut map.probes)?;
        devicegroup::defaults::install(&mut map.groups)?;
        Ok(map)
    }

    /// Drops every probe, group, cached value and match result, and
    /// restores the default configuration.
    pub fn reset(&mut self) {
        self.config = BrowserMapConfig::default();
        self.probes.clear();
        self.groups.clear();
        self.matched = MatchedSet::new();
        self.match_run = false;
        self.language_override = None;
        tracing::debug!("engine reset");
    }

    /// Applies the fields set in `overrides`; the others keep their value.
    pub fn configure(&mut self, overrides: ConfigOverrides) -> &mut Self {
        self.config.apply(overrides);
        tracing::debug!(config = ?self.config, "configuration updated");
        self
    }

    pub fn config(&self) -> &BrowserMapConfig {
        &self.config
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn into_env(self) -> E {
        self.env
    }

    /// Registers a probe. A name that is already taken keeps its first
    /// probe.
    pub fn add_probe<F>(&mut self, name: &str, probe: F) -> Result<&mut Self, MapError>
    where
        F: Fn(&ProbeScope<'_>) -> ProbeValue + Send + Sync + 'static,
    {
        self.probes.add(name, probe)?;
        Ok(self)
    }

    pub fn probe(&self, name: &str) -> Option<ProbeValue> {
        self.probes.probe(name, &self.env)
    }

    pub fn clear_probe_cache(&self) {
        self.probes.clear_cache();
    }

    pub fn probing_results(&self) -> BTreeMap<String, ProbeValue> {
        self.probes.all_results(&self.env)
    }

    /// [`probing_results`](Self::probing_results) as a JSON object.
    pub fn probing_results_json(&self) -> String {
        serde_json::to_string(&self.probing_results()).unwrap_or_default()
    }

    pub fn add_device_group(
        &mut self,
        descriptor: DeviceGroupDescriptor,
    ) -> Result<&mut Self, MapError> {
        self.groups.add(descriptor)?;
        Ok(self)
    }

    pub fn device_groups(&self) -> &DeviceGroupRegistry {
        &self.groups
    }

    pub fn groups_by_ranking(&self) -> Vec<Arc<DeviceGroup>> {
        self.groups.by_ranking()
    }

    pub fn device_group_by_name(&self, name: &str) -> Option<&Arc<DeviceGroup>> {
        self.groups.get(name)
    }

    /// Runs every device group test and replaces the matched set.
    pub fn match_device_groups(&mut self) -> &MatchedSet {
        let scope = ProbeScope::new(&self.probes, &self.env);
        self.matched = self.groups.match_groups(&scope);
        self.match_run = true;
        tracing::debug!(groups = ?self.matched.names(), "device groups matched");
        &self.matched
    }

    pub fn matched_device_groups(&self) -> &MatchedSet {
        &self.matched
    }

    pub fn match_run(&self) -> bool {
        self.match_run
    }

    /// Language selected by the last forwarded request.
    pub fn language_override(&self) -> Option<&str> {
        self.language_override.as_deref()
    }

    /// False when the page opts out through its `browsermap.enabled` meta.
    pub fn is_enabled(&self) -> bool {
        self.env.document_head().map_or(true, |head| head.is_enabled())
    }

    /// The variant of `current` for `detected` groups and `url_selectors`.
    pub fn resolve_url<S: AsRef<str>, T: AsRef<str>>(
        &self,
        current: &str,
        detected: &[S],
        url_selectors: &[T],
    ) -> String {
        let ctx = ResolveContext {
            head: self.env.document_head(),
            groups: &self.groups,
            language: self.language_override.as_deref(),
        };
        resolve::resolve_url(&ctx, current, detected, url_selectors)
    }

    /// Classifies the client, persists the result and navigates to the
    /// variant of the current page when it is not already there.
    pub fn forward_request(&mut self) -> ForwardOutcome {
        if !self.is_enabled() {
            tracing::debug!("forwarding disabled by page");
            return ForwardOutcome::disabled();
        }

        let current_url = self.env.current_url();
        let language_parameter = &self.config.language_override_parameter;
        let device_parameter = &self.config.device_override_parameter;
        let language_override =
            non_empty(urlutil::value_for_parameter(&current_url, language_parameter));
        let device_override = urlutil::value_for_parameter(&current_url, device_parameter)
            .map(|value| split_groups(&value))
            .filter(|groups| !groups.is_empty());
        self.language_override = language_override;

        let (state, detected) = match device_override {
            Some(detected) => (self.store_override(&detected), detected),
            None => self.detect_without_override(),
        };

        if state == ForwardState::NeitherPresent {
            tracing::debug!(groups = ?detected, "stored detected device groups");
        } else {
            self.adopt_detected(&detected);
        }
        let url_selectors = self.matched.selector_names();

        if state == ForwardState::OverrideCookiesDisabled
            && self.config.enable_forwarding_when_cookies_disabled
        {
            self.rewrite_links(&current_url, &detected.join(","));
        }

        let target = self.resolve_url(&current_url, &detected, &url_selectors);
        let canonical = self
            .env
            .document_head()
            .and_then(|head| head.canonical_url())
            .map(str::to_string);
        let navigated = target != current_url && canonical.as_deref() != Some(target.as_str());
        tracing::debug!(
            state = ?state,
            current = %current_url,
            target = %target,
            navigated,
            "request forwarded"
        );
        if navigated {
            self.env.navigate(&target);
        }

        ForwardOutcome {
            state,
            detected,
            url_selectors,
            target: Some(target),
            navigated,
        }
    }

    /// Drops the device override.
    ///
    /// When an override-origin cookie exists its groups become the active
    /// cookie again. The override parameter is removed from the current URL,
    /// which is then navigated to; the new URL is returned.
    pub fn remove_override(&mut self) -> String {
        let device_cookie = self.config.device_cookie_name();
        let origin_cookie = self.config.origin_cookie_name();

        let mut cookies = self.cookies();
        if let Some(origin) = cookies.get(&origin_cookie) {
            cookies.remove(&device_cookie);
            cookies.remove(&origin_cookie);
            cookies.set(&CanonicalCookie::new(device_cookie, origin.value).with_path("/"));
            tracing::debug!("restored device groups from override-origin cookie");
        }

        let url = urlutil::strip_parameter(
            &self.env.current_url(),
            &self.config.device_override_parameter,
        );
        self.env.navigate(&url);
        url
    }

    fn cookies(&mut self) -> CookieManager<'_, E> {
        CookieManager::new(&mut self.env)
    }

    /// Persists an override, keeping the groups it replaces in the
    /// override-origin cookie.
    fn store_override(&mut self, detected: &[String]) -> ForwardState {
        let override_value = detected.join(",");
        let device_cookie = self.config.device_cookie_name();
        let origin_cookie = self.config.origin_cookie_name();

        if !self.cookies().cookies_enabled() {
            tracing::debug!(groups = %override_value, "override without cookie support");
            return ForwardState::OverrideCookiesDisabled;
        }

        let active = self.cookies().get(&device_cookie);
        let origin = self.cookies().get(&origin_cookie);

        let state = match (&active, &origin) {
            (None, None) => {
                let detected_value = self.match_device_groups().names().join(",");
                if detected_value != override_value {
                    self.cookies()
                        .set(&CanonicalCookie::new(&origin_cookie, detected_value).with_path("/"));
                }
                ForwardState::OverrideNoPriorCookie
            }
            (Some(active), None) => {
                if active.value != override_value {
                    self.cookies()
                        .set(&CanonicalCookie::new(&origin_cookie, &active.value).with_path("/"));
                }
                ForwardState::OverrideWithPriorCookie
            }
            (_, Some(_)) => ForwardState::OverrideWithPriorCookie,
        };

        let mut cookies = self.cookies();
        cookies.set(&CanonicalCookie::new(&device_cookie, &override_value).with_path("/"));
        if origin.is_some_and(|o| o.value == override_value) {
            cookies.remove(&origin_cookie);
        }
        tracing::debug!(state = ?state, groups = %override_value, "stored device override");
        state
    }

    /// Reads the groups back from the device cookie, or detects and stores
    /// them on a first visit.
    fn detect_without_override(&mut self) -> (ForwardState, Vec<String>) {
        let device_cookie = self.config.device_cookie_name();
        if let Some(active) = self.cookies().get(&device_cookie) {
            return (ForwardState::CookiePresentNoOverride, split_groups(&active.value));
        }

        let detected = self.match_device_groups().names();
        self.cookies()
            .set(&CanonicalCookie::new(&device_cookie, detected.join(",")).with_path("/"));
        (ForwardState::NeitherPresent, detected)
    }

    /// Rebuilds the matched set from names that did not come from a match
    /// run. Unregistered names are skipped.
    fn adopt_detected(&mut self, detected: &[String]) {
        let registered: Vec<String> = self.groups.iter().map(|g| g.name.clone()).collect();
        let unknown = difference(detected, &registered);
        if !unknown.is_empty() {
            tracing::debug!(groups = ?unknown, "ignoring unregistered device groups");
        }
        let mut matched = MatchedSet::new();
        for group in detected.iter().filter_map(|name| self.groups.get(name)) {
            matched.insert(Arc::clone(group));
        }
        self.matched = matched;
    }

    /// Appends the override to every same-domain link that lacks it.
    fn rewrite_links(&mut self, current_url: &str, override_value: &str) {
        let domain = urlutil::domain_of(current_url);
        if domain.is_empty() {
            return;
        }
        let parameter = self.config.device_override_parameter.clone();
        for (index, href) in self.env.anchor_hrefs().into_iter().enumerate() {
            if !href.contains(&domain) {
                continue;
            }
            if urlutil::value_for_parameter(&href, &parameter).as_deref() == Some(override_value) {
                continue;
            }
            let rewritten = urlutil::append_parameter(&href, &parameter, override_value);
            tracing::trace!(from = %href, to = %rewritten, "rewrote link");
            self.env.set_anchor_href(index, rewritten);
        }
    }
}

impl<E: Environment + std::fmt::Debug> std::fmt::Debug for BrowserMap<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserMap")
            .field("config", &self.config)
            .field("probes", &self.probes)
            .field("groups", &self.groups)
            .field("matched", &self.matched)
            .field("match_run", &self.match_run)
            .field("env", &self.env)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn split_groups(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
