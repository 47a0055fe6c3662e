const HTTP: &str = "http://";
const HTTPS: &str = "https://";

/// Removes the first `https://` and then the first `http://` occurrence.
pub fn strip_scheme(url: &str) -> String {
    url.replacen(HTTPS, "", 1).replacen(HTTP, "", 1)
}

/// Host part of `url`: everything between the scheme and the first `/`.
pub fn domain_of(url: &str) -> String {
    let stripped = strip_scheme(url);
    match stripped.find('/') {
        Some(idx) => stripped[..idx].to_string(),
        None => stripped,
    }
}

/// Query string including its leading `?`, or `""`.
///
/// The last `?` starts the query, so a `?` inside a path segment is not
/// mistaken for the separator when the real query follows it.
pub fn query_string_of(url: &str) -> &str {
    match url.rfind('?') {
        Some(idx) => &url[idx..],
        None => "",
    }
}

/// `url` with its query string removed.
pub fn strip_query(url: &str) -> &str {
    &url[..url.len() - query_string_of(url).len()]
}

/// File component of `url` (after the last `/`), ignoring scheme and query.
pub fn file_of(url: &str) -> String {
    let stripped = strip_scheme(url);
    let path = strip_query(&stripped);
    match path.rfind('/') {
        Some(idx) => path[idx + 1..].to_string(),
        None => String::new(),
    }
}

/// Folder of `url` up to and including the last `/`, scheme included.
pub fn folder_of(url: &str) -> String {
    let stripped = strip_scheme(url);
    let path = strip_query(&stripped);
    let Some(idx) = path.rfind('/') else {
        return String::new();
    };
    let folder = &path[..=idx];
    // Re-prefix whatever preceded the folder in `url` (the scheme).
    match url.find(folder) {
        Some(start) => format!("{}{}", &url[..start], folder),
        None => folder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_of() {
        assert_eq!(domain_of("http://www.example.com/a/b.html"), "www.example.com");
        assert_eq!(domain_of("https://example.com"), "example.com");
        assert_eq!(domain_of("example.com:8080/x"), "example.com:8080");
    }

    #[test]
    fn test_query_string_of() {
        assert_eq!(query_string_of("http://x.com/a.html?a=1&b=2"), "?a=1&b=2");
        assert_eq!(query_string_of("http://x.com/a.html"), "");
    }

    #[test]
    fn test_file_of() {
        assert_eq!(file_of("http://x.com/a/index.html?x=1"), "index.html");
        assert_eq!(file_of("http://x.com/a/"), "");
        assert_eq!(file_of("http://x.com"), "");
        assert_eq!(file_of("/content/page.tablet.html"), "page.tablet.html");
    }

    #[test]
    fn test_folder_of() {
        assert_eq!(folder_of("http://x.com/a/index.html"), "http://x.com/a/");
        assert_eq!(folder_of("https://x.com/index.html?q=/z"), "https://x.com/");
        assert_eq!(folder_of("/a/b.html"), "/a/");
        assert_eq!(folder_of("index.html"), "");
    }
}
