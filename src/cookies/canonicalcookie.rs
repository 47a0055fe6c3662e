use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, UtcOffset};

const GMT_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Attribute names that can never be used as a cookie name.
const RESERVED_NAMES: [&str; 5] = ["expires", "max-age", "path", "domain", "secure"];

/// When a cookie expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiry {
    /// Relative lifetime, written as `max-age`.
    Seconds(i64),
    /// A date already formatted for the `expires` attribute.
    FormattedDate(String),
    /// An instant, formatted as a GMT date for the `expires` attribute.
    AbsoluteInstant(OffsetDateTime),
}

/// A cookie as BrowserMap writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalCookie {
    pub name: String,
    pub value: String,
    /// `None` makes a session cookie.
    pub expires: Option<Expiry>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
}

impl CanonicalCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_expiry(mut self, expiry: Expiry) -> Self {
        self.expires = Some(expiry);
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Empty names and attribute names (`expires`, `max-age`, `path`,
    /// `domain`, `secure`, any case) are not valid cookie names.
    pub fn is_reserved_name(name: &str) -> bool {
        name.is_empty()
            || RESERVED_NAMES
                .iter()
                .any(|reserved| name.eq_ignore_ascii_case(reserved))
    }

    /// The `document.cookie` assignment for this cookie:
    /// `name=value[; max-age=N | ; expires=DATE][; domain=D][; path=P][; secure]`.
    pub fn to_cookie_line(&self) -> String {
        let mut line = cookie::Cookie::new(self.name.as_str(), self.value.as_str())
            .encoded()
            .to_string();

        match &self.expires {
            Some(Expiry::Seconds(secs)) => {
                line.push_str(&format!("; max-age={secs}"));
            }
            Some(Expiry::FormattedDate(date)) if !date.is_empty() => {
                line.push_str(&format!("; expires={date}"));
            }
            Some(Expiry::AbsoluteInstant(instant)) => {
                line.push_str(&format!("; expires={}", gmt_string(*instant)));
            }
            _ => {}
        }
        if let Some(domain) = self.domain.as_deref().filter(|d| !d.is_empty()) {
            line.push_str(&format!("; domain={domain}"));
        }
        if let Some(path) = self.path.as_deref().filter(|p| !p.is_empty()) {
            line.push_str(&format!("; path={path}"));
        }
        if self.secure {
            line.push_str("; secure");
        }
        line
    }

    /// Line that deletes cookie `name` (empty value, expired yesterday).
    pub fn removal_line(name: &str) -> String {
        let yesterday = OffsetDateTime::now_utc() - Duration::days(1);
        format!(
            "{}; expires={}; path=/",
            cookie::Cookie::new(name, "").encoded(),
            gmt_string(yesterday)
        )
    }
}

/// Formats `instant` like `Date.toGMTString()`: `Tue, 14 Oct 2026 09:05:00 GMT`.
pub fn gmt_string(instant: OffsetDateTime) -> String {
    instant
        .to_offset(UtcOffset::UTC)
        .format(GMT_FORMAT)
        .unwrap_or_default()
}
