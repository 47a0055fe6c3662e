use super::file::{extension_of, remove_selectors};
use super::parts::{file_of, folder_of, query_string_of, strip_query, strip_scheme};

/// Selector tokens of the file in `url`: `a/index.tablet.mobile.html`
/// yields `["tablet", "mobile"]`.
pub fn selectors_of(url: &str) -> Vec<String> {
    let stripped = strip_scheme(url);
    let path = strip_query(&stripped);
    let Some(idx) = path.rfind('/') else {
        return Vec::new();
    };
    let tokens: Vec<&str> = path[idx + 1..].split('.').collect();
    if tokens.len() > 2 {
        tokens[1..tokens.len() - 1]
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        Vec::new()
    }
}

/// Rewrites the file of `url` to carry exactly `selectors`, replacing any
/// selectors already present and keeping the query string.
///
/// A URL without a file component is returned unchanged.
pub fn add_selectors<S: AsRef<str>>(url: &str, selectors: &[S]) -> String {
    let file = remove_selectors(&file_of(url));
    if file.is_empty() {
        return url.to_string();
    }

    let extension = extension_of(&file);
    let basename = if extension.is_empty() {
        file.as_str()
    } else {
        &file[..file.len() - extension.len() - 1]
    };

    let mut rewritten = folder_of(url);
    rewritten.push_str(basename);
    for selector in selectors {
        rewritten.push('.');
        rewritten.push_str(selector.as_ref());
    }
    if !extension.is_empty() {
        rewritten.push('.');
        rewritten.push_str(extension);
    }
    rewritten.push_str(query_string_of(url));
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_of() {
        assert_eq!(
            selectors_of("http://x.com/a/index.tablet.mobile.html"),
            vec!["tablet", "mobile"]
        );
        assert!(selectors_of("http://x.com/a/index.html").is_empty());
        assert!(selectors_of("http://x.com/a/").is_empty());
        assert_eq!(selectors_of("/p.smartphone.html?a=b.c.d"), vec!["smartphone"]);
    }

    #[test]
    fn test_add_selectors() {
        assert_eq!(
            add_selectors("http://www.example.com/index.html", &["mobile"]),
            "http://www.example.com/index.mobile.html"
        );
        assert_eq!(
            add_selectors("http://x.com/index.smartphone.html?a=1", &["tablet"]),
            "http://x.com/index.tablet.html?a=1"
        );
    }

    #[test]
    fn test_add_no_selectors_strips_existing() {
        let none: [&str; 0] = [];
        assert_eq!(
            add_selectors("http://x.com/index.smartphone.html", &none),
            "http://x.com/index.html"
        );
    }

    #[test]
    fn test_add_selectors_without_file() {
        assert_eq!(add_selectors("http://x.com/a/", &["tablet"]), "http://x.com/a/");
        assert_eq!(add_selectors("http://x.com", &["tablet"]), "http://x.com");
    }

    #[test]
    fn test_add_selectors_without_extension() {
        assert_eq!(
            add_selectors("http://x.com/content/page", &["tablet"]),
            "http://x.com/content/page.tablet"
        );
    }
}
