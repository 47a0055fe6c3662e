//! Device emulation.
//!
//! Provides an in-memory [`Environment`](crate::environment::Environment)
//! combining:
//! - a device profile (screen, pixel ratio, touch, user agent)
//! - a page (location, head, anchors)
//! - a cookie jar
//!
//! It backs the integration tests, the benches and the demo, and is how
//! device group rules are checked against known hardware without a browser.

mod device;
mod environment;

pub use device::{Device, DeviceRegistry, Orientation, Screen, DEFAULT_CHROME_VERSION};
pub use environment::{EmulatedEnvironment, EmulatedEnvironmentBuilder, ScreenOrientation};
