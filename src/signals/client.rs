//! Client signature parsing.
//!
//! Derives structured device/software attributes from the free-text
//! client-identification string plus the client-hint metadata. This is a
//! marker-table heuristic, not a user-agent grammar: every check is an
//! ordered rule table evaluated by a shared substring matcher.

use serde::Serialize;
use strum_macros::EnumIter;

/// Markers that identify bots, crawlers and non-browser HTTP clients.
const BOT_MARKERS: &[&str] = &[
    "bot",
    "crawler",
    "spider",
    "slurp",
    "scraper",
    "curl",
    "wget",
    "python-requests",
    "python-urllib",
    "go-http-client",
    "java/",
    "okhttp",
    "facebookexternalhit",
    "bingpreview",
    "pingdom",
    "uptimerobot",
];

/// Markers that identify mobile clients.
const MOBILE_MARKERS: &[&str] = &[
    "mobile",
    "android",
    "iphone",
    "ipod",
    "windows phone",
    "blackberry",
    "opera mini",
    "opera mobi",
];

/// Headless-tool markers; any hit sets both the headless and automation flags.
const HEADLESS_MARKERS: &[&str] = &["headless", "phantomjs", "puppeteer", "playwright"];

/// Automation-framework markers; any hit sets the automation flag only.
const DRIVER_MARKERS: &[&str] = &["selenium", "webdriver", "chromedriver", "geckodriver"];

/// Ordered OS detection table; first match wins.
const OS_MARKERS: &[(&str, &str)] = &[
    ("windows phone", "Windows Phone"),
    ("windows nt", "Windows"),
    ("android", "Android"),
    ("iphone", "iOS"),
    ("ipad", "iOS"),
    ("ipod", "iOS"),
    ("mac os x", "macOS"),
    ("cros", "ChromeOS"),
    ("linux", "Linux"),
    ("freebsd", "FreeBSD"),
];

/// Ordered browser detection table: (marker, display name, version prefix).
/// First match wins; the order puts derivative browsers before the engines
/// they embed (Edge and Opera both carry a `chrome/` token).
const BROWSER_MARKERS: &[(&str, &str, &str)] = &[
    ("edg/", "Edge", "edg/"),
    ("opr/", "Opera", "opr/"),
    ("samsungbrowser/", "Samsung Internet", "samsungbrowser/"),
    ("firefox/", "Firefox", "firefox/"),
    ("chrome/", "Chrome", "chrome/"),
    ("safari/", "Safari", "version/"),
    ("msie ", "Internet Explorer", "msie "),
];

/// Device category derived from the client signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum DeviceCategory {
    /// Mobile phone or similar handheld.
    Mobile,
    /// Tablet, per client-hint metadata.
    Tablet,
    /// Desktop or laptop browser.
    Desktop,
    /// Bot, crawler or non-browser client.
    Bot,
    /// No usable client identification.
    #[default]
    Unknown,
}

impl DeviceCategory {
    /// Returns the category as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceCategory::Mobile => "mobile",
            DeviceCategory::Tablet => "tablet",
            DeviceCategory::Desktop => "desktop",
            DeviceCategory::Bot => "bot",
            DeviceCategory::Unknown => "unknown",
        }
    }
}

/// Parsed device/software attributes of one client.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSignature {
    /// Operating system name, or `""` when undetected.
    pub os: String,
    /// Browser name, or `""` when undetected.
    pub browser: String,
    /// Browser version, or `""` when undetected.
    pub browser_version: String,
    /// Device category.
    pub device_category: DeviceCategory,
    /// Whether the client looks like a mobile device.
    pub is_mobile: bool,
    /// Whether the client looks like a bot.
    pub is_bot: bool,
    /// Whether a headless-tool marker was found.
    pub is_headless: bool,
    /// Whether any automation marker was found.
    pub is_automation: bool,
}

/// Parses a client-identification string and client-hint metadata.
///
/// Empty input yields device category `unknown` with all flags false.
/// Category decision order, first match wins: bot → mobile → tablet hint in
/// the client-hint metadata → desktop. The headless/automation checks are
/// substring scans over the lowercased input and run regardless of the
/// already-decided category.
pub fn parse_client_signature(user_agent: &str, client_hints: &str) -> ClientSignature {
    if user_agent.is_empty() {
        return ClientSignature::default();
    }

    let ua_lower = user_agent.to_lowercase();

    let is_bot = contains_any(&ua_lower, BOT_MARKERS);
    let is_mobile = contains_any(&ua_lower, MOBILE_MARKERS);

    let device_category = if is_bot {
        DeviceCategory::Bot
    } else if is_mobile {
        DeviceCategory::Mobile
    } else if client_hints.to_lowercase().contains("tablet") {
        DeviceCategory::Tablet
    } else {
        DeviceCategory::Desktop
    };

    let os = first_match(&ua_lower, OS_MARKERS);
    let (browser, browser_version) = detect_browser(&ua_lower);

    let mut signature = ClientSignature {
        os,
        browser,
        browser_version,
        device_category,
        is_mobile,
        is_bot,
        is_headless: false,
        is_automation: false,
    };

    if contains_any(&ua_lower, HEADLESS_MARKERS) {
        signature.is_headless = true;
        signature.is_automation = true;
    }
    if contains_any(&ua_lower, DRIVER_MARKERS) {
        signature.is_automation = true;
    }

    signature
}

/// The shared "any marker contained in the input" routine.
fn contains_any(haystack: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| haystack.contains(marker))
}

/// First matching name from an ordered (marker, name) table, or `""`.
fn first_match(haystack: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .find(|(marker, _)| haystack.contains(marker))
        .map(|(_, name)| name.to_string())
        .unwrap_or_default()
}

/// Browser name and version from the ordered browser table.
fn detect_browser(ua_lower: &str) -> (String, String) {
    for (marker, name, version_prefix) in BROWSER_MARKERS {
        if ua_lower.contains(marker) {
            return (name.to_string(), extract_version(ua_lower, version_prefix));
        }
    }
    (String::new(), String::new())
}

/// Extracts the version substring (digits and dots) after a product token.
fn extract_version(ua_lower: &str, prefix: &str) -> String {
    let Some(idx) = ua_lower.find(prefix) else {
        return String::new();
    };
    let rest = &ua_lower[idx + prefix.len()..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());
    rest[..end].to_string()
}
