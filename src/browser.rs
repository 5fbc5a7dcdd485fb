//! Browser family detection.
//!
//! Browsers are recognised by plain substring containment on the
//! lower-cased user agent. Candidates are tried in [`Browser::ALL`] order and
//! the first hit wins, no matter where in the string it occurs. That is why
//! Chrome, whose user agent also advertises `Safari`, is listed before Safari.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::Error;

/// Browser family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Opera,
    Konqueror,
    Firefox,
    Chrome,
    Epiphany,
    Safari,
    Msie,
    Curl,
    Maxthon,
}

impl Browser {
    /// Every browser, in matching priority order.
    pub const ALL: [Browser; 9] = [
        Browser::Opera,
        Browser::Konqueror,
        Browser::Firefox,
        Browser::Chrome,
        Browser::Epiphany,
        Browser::Safari,
        Browser::Msie,
        Browser::Curl,
        Browser::Maxthon,
    ];

    /// Get the string representation, which is also the matched token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Opera => "opera",
            Browser::Konqueror => "konqueror",
            Browser::Firefox => "firefox",
            Browser::Chrome => "chrome",
            Browser::Epiphany => "epiphany",
            Browser::Safari => "safari",
            Browser::Msie => "msie",
            Browser::Curl => "curl",
            Browser::Maxthon => "maxthon",
        }
    }

    /// Token that precedes the version number in the user agent.
    pub fn version_anchor(&self) -> &'static str {
        match self {
            Browser::Safari => "version",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Browser {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Browser::ALL
            .into_iter()
            .find(|browser| browser.as_str() == lower)
            .ok_or_else(|| Error::UnknownBrowser(s.to_string()))
    }
}

/// Find the highest-priority browser token contained in the user agent.
pub fn classify_browser_name(user_agent: &str) -> Option<Browser> {
    let lower = user_agent.to_lowercase();
    Browser::ALL
        .into_iter()
        .find(|browser| lower.contains(browser.as_str()))
}
