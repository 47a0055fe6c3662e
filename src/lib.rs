//! # browsermap
//!
//! Device-group detection and device-specific URL forwarding.
//!
//! `browsermap` classifies a client into ranked device groups
//! ("smartphone", "tablet", "highResolutionDisplay"...) by evaluating
//! memoized capability probes, remembers the classification in a cookie, and
//! sends the client to the variant of the current page built for those
//! groups.
//!
//! ## Quick Start
//!
//! ```
//! use browsermap::BrowserMap;
//! use browsermap::emulation::{DeviceRegistry, EmulatedEnvironment};
//! use browsermap::environment::Environment;
//!
//! let device = DeviceRegistry::get_by_title("iPhone 12 Pro").unwrap();
//! let env = EmulatedEnvironment::builder(device)
//!     .url("http://www.example.com/index.html?ref=mail")
//!     .build();
//!
//! let mut map = BrowserMap::with_defaults(env).unwrap();
//! let outcome = map.forward_request();
//! assert_eq!(outcome.detected, vec!["smartphone", "highResolutionDisplay"]);
//! assert_eq!(
//!     map.env().current_url(),
//!     "http://www.example.com/index.smartphone.highResolutionDisplay.html?ref=mail"
//! );
//! ```
//!
//! ## Variant resolution
//!
//! The target URL is the first of:
//!
//! 1. an alternate link of the page whose `data-bmap-devgroups` best match
//!    the detected groups,
//! 2. the `url` of the first detected group that declares one,
//! 3. the current file name with the selector groups inserted
//!    (`index.html` becomes `index.tablet.html`).
//!
//! A `?device=` parameter overrides detection and is remembered in the
//! device cookie until [`BrowserMap::remove_override`] is called.
//!
//! ## Modules
//!
//! - [`base`] - Error type and collection helpers
//! - [`config`] - Engine configuration
//! - [`cookies`] - Cookie model, manager and in-memory jar
//! - [`devicegroup`] - Device groups and the matcher
//! - [`emulation`] - Device profiles and an emulated environment
//! - [`environment`] - The capability interface the engine runs against
//! - [`forward`] - The engine and variant resolution
//! - [`page`] - Document head model
//! - [`probe`] - Capability probes
//! - [`urlutil`] - URL and file-name helpers

pub mod base;
pub mod config;
pub mod cookies;
pub mod devicegroup;
pub mod emulation;
pub mod environment;
pub mod forward;
pub mod page;
pub mod probe;
pub mod urlutil;

pub use base::maperror::MapError;
pub use config::{BrowserMapConfig, ConfigOverrides};
pub use forward::{BrowserMap, ForwardOutcome, ForwardState};
