//! Browser version extraction.
//!
//! With a known browser the version is whatever follows the browser's anchor
//! token and a `/` or space. Without one, a bare `Version/` token is tried,
//! and that fallback does not accept hyphens in the version text.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::browser::Browser;

static ANCHORED_PATTERNS: Lazy<HashMap<Browser, Regex>> = Lazy::new(|| {
    Browser::ALL
        .into_iter()
        .map(|browser| {
            let pattern = format!(
                r"(?i-u){}[/ ]([0-9A-Za-z_.\-]+)",
                regex::escape(browser.version_anchor())
            );
            (browser, Regex::new(&pattern).unwrap())
        })
        .collect()
});

static FALLBACK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)version[/ ]([0-9A-Za-z_.]+)").unwrap());

/// Extract the version for `browser` from the user agent, or `""`.
pub fn extract_version(user_agent: &str, browser: Option<Browser>) -> String {
    let pattern = match browser {
        Some(browser) => ANCHORED_PATTERNS.get(&browser),
        None => Some(&*FALLBACK_PATTERN),
    };

    pattern
        .and_then(|re| re.captures(user_agent))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
