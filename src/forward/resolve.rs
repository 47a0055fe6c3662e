//! Variant URL resolution.
//!
//! Candidates are tried in priority order:
//!
//! 1. the best-scoring alternate link of the page head,
//! 2. the `url` of the first detected group that has one,
//! 3. the current URL with the selector groups added to its file name.
//!
//! The query string of the current URL is carried over to whichever wins.

use crate::devicegroup::DeviceGroupRegistry;
use crate::page::{AlternateSite, DocumentHead};
use crate::urlutil;

/// Best alternate site for `detected`.
///
/// A site scores one point per devgroups token found in `detected`; a site
/// that scored and that `filter` accepts gets one more. Only a strictly
/// greater score replaces the current best, so the first top scorer in
/// document order wins. Sites scoring zero are never chosen.
pub fn alternate_site<'s, S, F>(
    sites: &'s [AlternateSite],
    detected: &[S],
    filter: F,
) -> Option<&'s AlternateSite>
where
    S: AsRef<str>,
    F: Fn(&AlternateSite) -> bool,
{
    let mut best: Option<&AlternateSite> = None;
    let mut max_score = 0usize;
    for site in sites {
        let mut score = site
            .devgroup_tokens()
            .filter(|token| detected.iter().any(|d| d.as_ref() == *token))
            .count();
        if score > 0 && filter(site) {
            score += 1;
        }
        if score > max_score {
            max_score = score;
            best = Some(site);
        }
    }
    best
}

/// Accepts sites whose `hreflang` starts with `language`, or equals the
/// `hreflang` of the page's current variant.
pub fn language_filter<'a>(
    language: Option<&'a str>,
    current_variant: Option<&'a AlternateSite>,
) -> impl Fn(&AlternateSite) -> bool + 'a {
    move |site: &AlternateSite| {
        if let (Some(language), Some(hreflang)) = (language, site.hreflang.as_deref()) {
            if !language.is_empty() && hreflang.starts_with(language) {
                return true;
            }
        }
        current_variant.is_some_and(|current| current.hreflang == site.hreflang)
    }
}

/// Inputs of [`resolve_url`] that come from the page and the engine.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub head: Option<&'a DocumentHead>,
    pub groups: &'a DeviceGroupRegistry,
    pub language: Option<&'a str>,
}

/// The variant URL of `current` for `detected` and `url_selectors`.
pub fn resolve_url<S: AsRef<str>, T: AsRef<str>>(
    ctx: &ResolveContext<'_>,
    current: &str,
    detected: &[S],
    url_selectors: &[T],
) -> String {
    let query = urlutil::query_string_of(current);
    let without_query = urlutil::strip_query(current);

    let from_alternate = ctx.head.and_then(|head| {
        let sites = head.alternate_sites();
        let current_variant = head.current_variant();
        let filter = language_filter(ctx.language, current_variant.as_ref());
        alternate_site(&sites, detected, filter)
            .map(|site| site.href.clone())
            .filter(|href| !href.is_empty())
    });

    let from_group = || {
        detected.iter().find_map(|name| {
            ctx.groups
                .get(name.as_ref().trim())
                .and_then(|group| group.url())
                .map(str::to_string)
        })
    };

    let candidate = from_alternate
        .or_else(from_group)
        .unwrap_or_else(|| urlutil::add_selectors(without_query, url_selectors));

    tracing::trace!(current = %current, candidate = %candidate, "resolved variant");
    format!("{candidate}{query}")
}
