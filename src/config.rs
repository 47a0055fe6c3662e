//! Engine configuration.
//!
//! [`BrowserMapConfig`] holds the effective settings; [`ConfigOverrides`]
//! carries a partial update where absent fields keep their current value.

use crate::base::maperror::MapError;
use serde::{Deserialize, Serialize};

/// Effective engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserMapConfig {
    /// Prefix of the device-group cookie name.
    pub cookie_prefix: String,
    /// Device-group cookie name, appended to the prefix.
    pub device_group_cookie_name: String,
    /// Query parameter forcing device groups (comma-separated).
    pub device_override_parameter: String,
    /// Query parameter selecting an `hreflang` among alternate links.
    pub language_override_parameter: String,
    /// Rewrite same-domain links to carry the override when cookies are off.
    pub enable_forwarding_when_cookies_disabled: bool,
}

impl Default for BrowserMapConfig {
    fn default() -> Self {
        Self {
            cookie_prefix: "BMAP_".to_string(),
            device_group_cookie_name: "device".to_string(),
            device_override_parameter: "device".to_string(),
            language_override_parameter: "language".to_string(),
            enable_forwarding_when_cookies_disabled: false,
        }
    }
}

impl BrowserMapConfig {
    /// Name of the active device-group cookie (`BMAP_device`).
    pub fn device_cookie_name(&self) -> String {
        format!("{}{}", self.cookie_prefix, self.device_group_cookie_name)
    }

    /// Name of the override-origin cookie (`o_BMAP_device`).
    pub fn origin_cookie_name(&self) -> String {
        format!("o_{}", self.device_cookie_name())
    }

    /// Applies every field set in `overrides`.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(v) = overrides.cookie_prefix {
            self.cookie_prefix = v;
        }
        if let Some(v) = overrides.device_group_cookie_name {
            self.device_group_cookie_name = v;
        }
        if let Some(v) = overrides.device_override_parameter {
            self.device_override_parameter = v;
        }
        if let Some(v) = overrides.language_override_parameter {
            self.language_override_parameter = v;
        }
        if let Some(v) = overrides.enable_forwarding_when_cookies_disabled {
            self.enable_forwarding_when_cookies_disabled = v;
        }
    }
}

/// A partial configuration update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    pub cookie_prefix: Option<String>,
    pub device_group_cookie_name: Option<String>,
    pub device_override_parameter: Option<String>,
    pub language_override_parameter: Option<String>,
    pub enable_forwarding_when_cookies_disabled: Option<bool>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{"cookiePrefix": "X_", "enableForwardingWhenCookiesDisabled": true}`.
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        serde_json::from_str(json).map_err(|e| MapError::invalid_config(e.to_string()))
    }

    pub fn cookie_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.cookie_prefix = Some(prefix.into());
        self
    }

    pub fn device_group_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.device_group_cookie_name = Some(name.into());
        self
    }

    pub fn device_override_parameter(mut self, name: impl Into<String>) -> Self {
        self.device_override_parameter = Some(name.into());
        self
    }

    pub fn language_override_parameter(mut self, name: impl Into<String>) -> Self {
        self.language_override_parameter = Some(name.into());
        self
    }

    pub fn enable_forwarding_when_cookies_disabled(mut self, enabled: bool) -> Self {
        self.enable_forwarding_when_cookies_disabled = Some(enabled);
        self
    }
}
