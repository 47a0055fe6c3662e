//! The standard probe set.
//!
//! Probe names are part of the page contract: device group tests written
//! for the browser refer to them verbatim (`clientWidth`, `portrait`,
//! `Modernizr.touch`...).

use super::registry::{ProbeRegistry, ProbeScope};
use super::value::ProbeValue;
use crate::base::maperror::MapError;

/// Pixels of browser/system chrome a maximized window still loses to the
/// screen (the soft-button bar of Android 4.x phones in landscape).
/// `canResizeBrowserWindow` only reports true beyond this allowance.
pub const DEVICE_CHROME_ALLOWANCE: f64 = 42.0;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Registers every standard probe. Names already registered keep their
/// earlier probe.
pub fn install(registry: &mut ProbeRegistry) -> Result<(), MapError> {
    registry.add("BrowserMap.version", |_| VERSION.into())?;
    registry.add("Modernizr.touch", |s| s.env().features().touch.into())?;
    registry.add("Modernizr.csstransforms3d", |s| {
        s.env().features().css_transforms_3d.into()
    })?;
    registry.add("window.devicePixelRatio", |s| {
        s.env().display().device_pixel_ratio.into()
    })?;
    registry.add("window.orientation", |s| {
        s.env().display().orientation_angle.into()
    })?;

    registry.add("navigator.vendor", |s| s.env().navigator_info().vendor.as_str().into())?;
    registry.add("navigator.platform", |s| {
        s.env().navigator_info().platform.as_str().into()
    })?;
    registry.add("navigator.appName", |s| {
        s.env().navigator_info().app_name.as_str().into()
    })?;
    registry.add("navigator.appVersion", |s| {
        s.env().navigator_info().app_version.as_str().into()
    })?;
    registry.add("navigator.appCodeName", |s| {
        s.env().navigator_info().app_code_name.as_str().into()
    })?;
    registry.add("navigator.userAgent", |s| {
        s.env().navigator_info().user_agent.as_str().into()
    })?;

    registry.add("screenWidth", |s| s.env().display().screen_width.into())?;
    registry.add("screenHeight", |s| s.env().display().screen_height.into())?;
    registry.add("clientWidth", |s| s.env().display().client_width.into())?;
    registry.add("orientation", orientation)?;
    registry.add("portrait", |s| (s.text("orientation") == "portrait").into())?;
    registry.add("landscape", |s| (s.text("orientation") == "landscape").into())?;
    registry.add(
        "screenWidthDependingOnOrientation",
        screen_width_depending_on_orientation,
    )?;
    registry.add(
        "clientWidthDependingOnOrientation",
        client_width_depending_on_orientation,
    )?;
    registry.add("devicePixelRatio", device_pixel_ratio)?;
    registry.add("canResizeBrowserWindow", can_resize_browser_window)?;
    Ok(())
}

fn orientation(scope: &ProbeScope<'_>) -> ProbeValue {
    let display = scope.env().display();
    if display.inner_width > display.inner_height {
        "landscape".into()
    } else {
        "portrait".into()
    }
}

fn screen_width_depending_on_orientation(scope: &ProbeScope<'_>) -> ProbeValue {
    let display = scope.env().display();
    let (w, h) = (display.screen_width, display.screen_height);
    let width = if scope.text("orientation") == "portrait" {
        w.min(h)
    } else {
        w.max(h)
    };
    width.into()
}

fn client_width_depending_on_orientation(scope: &ProbeScope<'_>) -> ProbeValue {
    let display = scope.env().display();
    let (w, h) = (display.client_width, display.client_height);
    let width = if scope.text("orientation") == "portrait" {
        w.min(h)
    } else {
        w.max(h)
    };
    width.into()
}

/// Scans `max-resolution` media queries from 0.5 to 3.0 in 0.05 steps and
/// reports the first ratio that matches.
fn device_pixel_ratio(scope: &ProbeScope<'_>) -> ProbeValue {
    let mut ratio = -1.0;
    for hundredths in (50..=300).step_by(5) {
        let r = f64::from(hundredths) / 100.0;
        let query = format!(
            "(max-resolution: {r}dppx), (max-resolution: {}dpi), \
             (-webkit-max-device-pixel-ratio: {r}), (-o-device-pixel-ratio: {r})",
            r * 96.0
        );
        match scope.env().match_media(&query) {
            Some(true) => {
                ratio = r;
                break;
            }
            Some(false) => {}
            None => break,
        }
    }

    // Ratios above the scanned range, or no media query support at all.
    if ratio < 0.0 {
        let reported = scope.number("window.devicePixelRatio");
        if reported > 0.0 {
            ratio = reported;
        }
    }

    // BlackBerry and Windows Phone answer the media queries wrongly.
    let user_agent = scope.text("navigator.userAgent");
    if user_agent.contains("BlackBerry") || user_agent.contains("Windows Phone") {
        let screen = scope.number("screenWidthDependingOnOrientation");
        let client = scope.number("clientWidthDependingOnOrientation");
        ratio = (screen / client * 100.0).round() / 100.0;
    }
    ratio.into()
}

fn can_resize_browser_window(scope: &ProbeScope<'_>) -> ProbeValue {
    let screen = scope.number("screenWidthDependingOnOrientation");
    let ratio = scope.number("devicePixelRatio");
    let available = (screen / ratio).round() - DEVICE_CHROME_ALLOWANCE;
    (available > scope.number("clientWidth")).into()
}
