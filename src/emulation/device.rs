/// Chrome version substituted into `%s` user agent templates.
pub const DEFAULT_CHROME_VERSION: &str = "120.0.0.0";

#[derive(Debug, Clone)]
pub struct Device {
    pub title: &'static str,
    pub user_agent: &'static str,
    pub platform: &'static str,
    pub vendor: &'static str,
    pub screen: Screen,
    pub capabilities: &'static [&'static str], // e.g., "touch", "mobile", "css3d"
}

impl Device {
    /// Get the User-Agent string, replacing %s with the Chrome version.
    pub fn get_user_agent(&self, chrome_version: &str) -> String {
        self.user_agent.replace("%s", chrome_version)
    }

    /// Check if this is a mobile device.
    pub fn is_mobile(&self) -> bool {
        self.capabilities.contains(&"mobile")
    }

    /// Check if this device has touch capability.
    pub fn has_touch(&self) -> bool {
        self.capabilities.contains(&"touch")
    }

    /// Check if the browser supports 3D CSS transforms.
    pub fn has_css_transforms_3d(&self) -> bool {
        self.capabilities.contains(&"css3d")
    }
}

/// Screen size in CSS pixels and the viewport in each orientation.
#[derive(Debug, Clone)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
    pub device_scale_factor: f64,
    pub horizontal: Orientation,
    pub vertical: Orientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    pub width: u32,
    pub height: u32,
}

// Registry of emulated devices; phone entries follow Chromium's EmulatedDevices.ts
pub struct DeviceRegistry;

impl DeviceRegistry {
    pub fn get_by_title(title: &str) -> Option<Device> {
        Self::all().into_iter().find(|d| d.title == title)
    }

    pub fn all() -> Vec<Device> {
        vec![
            // iPhone 12 Pro
            Device {
                title: "iPhone 12 Pro",
                user_agent: "Mozilla/5.0 (iPhone; CPU iPhone OS 13_2_3 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.0.3 Mobile/15E148 Safari/604.1",
                platform: "iPhone",
                vendor: "Apple Computer, Inc.",
                screen: Screen {
                    width: 390,
                    height: 844,
                    device_scale_factor: 3.0,
                    horizontal: Orientation { width: 844, height: 390 },
                    vertical: Orientation { width: 390, height: 844 },
                },
                capabilities: &["touch", "mobile", "css3d"],
            },
            // Pixel 7
            Device {
                title: "Pixel 7",
                user_agent: "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/%s Mobile Safari/537.36",
                platform: "Linux armv8l",
                vendor: "Google Inc.",
                screen: Screen {
                    width: 412,
                    height: 915,
                    device_scale_factor: 2.625,
                    horizontal: Orientation { width: 915, height: 412 },
                    vertical: Orientation { width: 412, height: 915 },
                },
                capabilities: &["touch", "mobile", "css3d"],
            },
            // Samsung Galaxy S8+
            Device {
                title: "Samsung Galaxy S8+",
                user_agent: "Mozilla/5.0 (Linux; Android 8.0.0; SM-G955U Build/R16NW) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/%s Mobile Safari/537.36",
                platform: "Linux armv8l",
                vendor: "Google Inc.",
                screen: Screen {
                    width: 360,
                    height: 740,
                    device_scale_factor: 4.0,
                    horizontal: Orientation { width: 740, height: 360 },
                    vertical: Orientation { width: 360, height: 740 },
                },
                capabilities: &["touch", "mobile", "css3d"],
            },
            // iPad Mini
            Device {
                title: "iPad Mini",
                user_agent: "Mozilla/5.0 (iPad; CPU OS 13_3 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/87.0.4280.77 Mobile/15E148 Safari/604.1",
                platform: "iPad",
                vendor: "Apple Computer, Inc.",
                screen: Screen {
                    width: 768,
                    height: 1024,
                    device_scale_factor: 2.0,
                    horizontal: Orientation { width: 1024, height: 768 },
                    vertical: Orientation { width: 768, height: 1024 },
                },
                capabilities: &["touch", "mobile", "css3d"],
            },
            // Desktop Chrome, 1080p monitor, window not maximized
            Device {
                title: "Desktop 1080p",
                user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/%s Safari/537.36",
                platform: "Win32",
                vendor: "Google Inc.",
                screen: Screen {
                    width: 1920,
                    height: 1080,
                    device_scale_factor: 1.0,
                    horizontal: Orientation { width: 1280, height: 800 },
                    vertical: Orientation { width: 800, height: 1280 },
                },
                capabilities: &["css3d"],
            },
            // Desktop browser without 3D transforms
            Device {
                title: "Legacy Desktop",
                user_agent: "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)",
                platform: "Win32",
                vendor: "",
                screen: Screen {
                    width: 1024,
                    height: 768,
                    device_scale_factor: 1.0,
                    horizontal: Orientation { width: 1000, height: 700 },
                    vertical: Orientation { width: 700, height: 1000 },
                },
                capabilities: &[],
            },
        ]
    }
}
