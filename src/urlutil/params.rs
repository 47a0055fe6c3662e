use super::parts::query_string_of;
use std::collections::HashMap;
use url::form_urlencoded;

/// Decoded query parameters of `url`. Later duplicates win.
pub fn url_parameters(url: &str) -> HashMap<String, String> {
    let query = match url.find('?') {
        Some(idx) => &url[idx + 1..],
        None => return HashMap::new(),
    };
    let query = query.split('#').next().unwrap_or_default();

    form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Decoded value of query parameter `name`, if present.
pub fn value_for_parameter(url: &str, name: &str) -> Option<String> {
    url_parameters(url).remove(name)
}

/// Removes every `name=...` pair from the query string of `url`.
pub fn strip_parameter(url: &str, name: &str) -> String {
    let query = query_string_of(url);
    if query.is_empty() {
        return url.to_string();
    }
    let base = &url[..url.len() - query.len()];
    let kept: Vec<&str> = query[1..]
        .split('&')
        .filter(|pair| !pair.is_empty() && pair.split('=').next() != Some(name))
        .collect();
    if kept.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, kept.join("&"))
    }
}

/// Appends `name=value` to the query string of `url`, starting one if needed.
pub fn append_parameter(url: &str, name: &str, value: &str) -> String {
    let separator = if query_string_of(url).is_empty() { '?' } else { '&' };
    format!("{url}{separator}{name}={value}")
}
