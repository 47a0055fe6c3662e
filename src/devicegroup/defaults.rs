//! The standard device groups.
//!
//! | Group | Ranking | Selector | Matches |
//! |-------|---------|----------|---------|
//! | `smartphone` | 0 | yes | narrow viewport that cannot be resized |
//! | `tablet` | 10 | yes | medium or large touch viewport that cannot be resized |
//! | `highResolutionDisplay` | 20 | yes | pixel ratio of 2 or more |
//! | `browser` | 30 | no | wide, non-touch viewport with 3D transforms |
//! | `oldBrowser` | `f64::MAX` | no | nothing else matched |

use super::group::{DeviceGroupDescriptor, MatchScope};
use super::registry::DeviceGroupRegistry;
use crate::base::maperror::MapError;

pub const SMARTPHONE: &str = "smartphone";
pub const TABLET: &str = "tablet";
pub const HIGH_RESOLUTION_DISPLAY: &str = "highResolutionDisplay";
pub const BROWSER: &str = "browser";
pub const OLD_BROWSER: &str = "oldBrowser";

pub fn install(registry: &mut DeviceGroupRegistry) -> Result<(), MapError> {
    for descriptor in descriptors() {
        registry.add(descriptor)?;
    }
    Ok(())
}

pub fn descriptors() -> Vec<DeviceGroupDescriptor> {
    vec![
        DeviceGroupDescriptor::new(SMARTPHONE)
            .ranking(0.0)
            .description("Smartphone")
            .selector(true)
            .test(smartphone),
        DeviceGroupDescriptor::new(TABLET)
            .ranking(10.0)
            .description("Standard Tablet")
            .selector(true)
            .test(tablet),
        DeviceGroupDescriptor::new(HIGH_RESOLUTION_DISPLAY)
            .ranking(20.0)
            .description("High Resolution Display")
            .selector(true)
            .test(|s| s.number("devicePixelRatio") >= 2.0),
        DeviceGroupDescriptor::new(BROWSER)
            .ranking(30.0)
            .description("Modern desktop browser")
            .test(browser),
        DeviceGroupDescriptor::new(OLD_BROWSER)
            .ranking(f64::MAX)
            .description("Old desktop browser")
            .test(|s| s.matched().is_empty()),
    ]
}

fn smartphone(s: &MatchScope<'_>) -> bool {
    let width = s.number("clientWidth");
    if s.flag("portrait") && width > 480.0 {
        return false;
    }
    if s.flag("landscape") && width >= 900.0 {
        return false;
    }
    !s.flag("canResizeBrowserWindow")
}

fn tablet(s: &MatchScope<'_>) -> bool {
    let width = s.number("clientWidth");
    if s.flag("portrait") && width <= 480.0 {
        return false;
    }
    if s.flag("landscape") && width < 900.0 {
        return false;
    }
    s.flag("Modernizr.touch") && !s.flag("canResizeBrowserWindow")
}

fn browser(s: &MatchScope<'_>) -> bool {
    let width = s.number("clientWidth");
    if s.flag("portrait") && width < 720.0 {
        return false;
    }
    if s.flag("landscape") && width < 1200.0 {
        return false;
    }
    s.flag("Modernizr.csstransforms3d") && !s.flag("Modernizr.touch")
}
