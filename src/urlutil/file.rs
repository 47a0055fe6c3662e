/// Extension of `file` (after the last `.`), or `""`.
pub fn extension_of(file: &str) -> &str {
    match file.rfind('.') {
        Some(idx) => &file[idx + 1..],
        None => "",
    }
}

/// Collapses `base.sel1.sel2.ext` to `base.ext`; names with two or fewer
/// dot tokens are returned unchanged.
pub fn remove_selectors(file: &str) -> String {
    let tokens: Vec<&str> = file.split('.').collect();
    if tokens.len() > 2 {
        format!("{}.{}", tokens[0], tokens[tokens.len() - 1])
    } else {
        file.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("index.html"), "html");
        assert_eq!(extension_of("index.smartphone.html"), "html");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(""), "");
    }

    #[test]
    fn test_remove_selectors() {
        assert_eq!(remove_selectors("index.tablet.mobile.html"), "index.html");
        assert_eq!(remove_selectors("index.html"), "index.html");
        assert_eq!(remove_selectors("index"), "index");
        assert_eq!(remove_selectors(""), "");
    }
}
