//! URL and file-name string utilities.
//!
//! These functions work on raw strings rather than parsed [`url::Url`]s: the
//! values they handle come straight from the page (current location, link
//! hrefs, group URLs such as `/m/`) and may be relative or partial. They never
//! panic; malformed input degrades to a best-effort substring.
//!
//! ```
//! use browsermap::urlutil;
//!
//! let url = urlutil::add_selectors("http://www.example.com/index.html", &["mobile"]);
//! assert_eq!(url, "http://www.example.com/index.mobile.html");
//! assert_eq!(urlutil::selectors_of(&url), vec!["mobile"]);
//! ```

mod file;
mod params;
mod parts;
mod selectors;

pub use file::{extension_of, remove_selectors};
pub use params::{append_parameter, strip_parameter, url_parameters, value_for_parameter};
pub use parts::{domain_of, file_of, folder_of, query_string_of, strip_query, strip_scheme};
pub use selectors::{add_selectors, selectors_of};
