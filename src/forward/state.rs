use serde::Serialize;

/// Which branch of the forwarding state machine a request took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ForwardState {
    /// The page opted out with `browsermap.enabled=false`.
    Disabled,
    /// Override parameter on a client that had no device cookie yet.
    OverrideNoPriorCookie,
    /// Override parameter on a client that already had a device cookie
    /// or an override-origin cookie.
    OverrideWithPriorCookie,
    /// Override parameter on a client that does not keep cookies.
    OverrideCookiesDisabled,
    /// No override; groups were read back from the device cookie.
    CookiePresentNoOverride,
    /// First visit: no override and no cookie, so detection ran.
    NeitherPresent,
}

impl ForwardState {
    pub fn is_override(self) -> bool {
        matches!(
            self,
            Self::OverrideNoPriorCookie
                | Self::OverrideWithPriorCookie
                | Self::OverrideCookiesDisabled
        )
    }
}

/// Result of one [`forward_request`](super::BrowserMap::forward_request) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardOutcome {
    pub state: ForwardState,
    /// Group names in effect, in override, cookie or ranking order.
    pub detected: Vec<String>,
    /// Detected groups that are registered as selectors.
    pub url_selectors: Vec<String>,
    /// Resolved variant URL; `None` when forwarding is disabled.
    pub target: Option<String>,
    pub navigated: bool,
}

impl ForwardOutcome {
    pub(crate) fn disabled() -> Self {
        Self {
            state: ForwardState::Disabled,
            detected: Vec::new(),
            url_selectors: Vec::new(),
            target: None,
            navigated: false,
        }
    }
}
