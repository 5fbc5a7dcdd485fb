//! user-agent-parse - Rule-based user-agent classifier
//!
//! Turns a user-agent string into a browser family, browser version,
//! operating system and coarse device type, using fixed ordered rule tables.
//! Every function here is total: unrecognised input yields empty strings and
//! default device types, never an error.
//!
//! # Architecture
//!
//! Four independent classifiers feed one result record:
//! 1. [`browser`]: ordered browser-token scan
//! 2. [`version`]: version extraction anchored on the detected browser
//! 3. [`os`]: ordered OS signature table with label templates
//! 4. [`device`]: cascade of device rules with configurable defaults
//!
//! # Example
//!
//! ```
//! use user_agent_parse::{parse, DeviceType};
//!
//! let agent = parse(
//!     "Mozilla/5.0 (Windows NT 5.1; en) AppleWebKit/526.9 (KHTML, like Gecko) Version/4.0dp1 Safari/526.8",
//! );
//!
//! assert_eq!(agent.name, "safari");
//! assert_eq!(agent.version, "4.0dp1");
//! assert_eq!(agent.full_name, "safari 4.0dp1");
//! assert_eq!(agent.os, "Windows XP");
//! assert_eq!(agent.device_type, DeviceType::Desktop);
//! ```

use serde::Serialize;
use tracing::debug;

pub use browser::{classify_browser_name, Browser};
pub use device::{classify_device_type, Cascade, DeviceType, DeviceTypeOptions};
pub use error::Error;
pub use os::classify_os;
pub use version::extract_version;

pub mod browser;
pub mod device;
pub mod os;
pub mod version;

mod error {
    use std::fmt;

    #[derive(Debug)]
    pub enum Error {
        UnknownDeviceType(String),
        UnknownBrowser(String),
        Config(serde_json::Error),
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Error::UnknownDeviceType(s) => write!(f, "Unknown device type: {}", s),
                Error::UnknownBrowser(s) => write!(f, "Unknown browser: {}", s),
                Error::Config(e) => write!(f, "Config error: {}", e),
            }
        }
    }

    impl std::error::Error for Error {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                Error::Config(e) => Some(e),
                _ => None,
            }
        }
    }

    impl From<serde_json::Error> for Error {
        fn from(e: serde_json::Error) -> Self {
            Error::Config(e)
        }
    }
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed user agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAgent {
    /// The input, verbatim
    pub full: String,
    /// Browser family token, or "" when unrecognised
    pub name: &'static str,
    /// Browser version, or ""
    pub version: String,
    /// `name` and `version` joined by one space
    pub full_name: String,
    /// Operating system label, or ""
    pub os: String,
    /// Device category, never empty
    pub device_type: DeviceType,
}

impl ParsedAgent {
    /// The browser family, if one was recognised.
    pub fn browser(&self) -> Option<Browser> {
        self.name.parse().ok()
    }
}

/// Parser holding the device defaults and rule cascade.
pub struct UserAgentParser {
    options: DeviceTypeOptions,
    cascade: Option<Cascade>,
}

impl UserAgentParser {
    /// Create a parser with default options and the built-in rules.
    pub fn new() -> Self {
        Self::with_options(DeviceTypeOptions::default())
    }

    pub fn with_options(options: DeviceTypeOptions) -> Self {
        Self {
            options,
            cascade: None,
        }
    }

    /// Create a parser with a custom device cascade.
    pub fn with_cascade(options: DeviceTypeOptions, cascade: Cascade) -> Self {
        Self {
            options,
            cascade: Some(cascade),
        }
    }

    pub fn options(&self) -> &DeviceTypeOptions {
        &self.options
    }

    /// Parse a user agent into a [`ParsedAgent`].
    pub fn parse(&self, user_agent: &str) -> ParsedAgent {
        let cascade = self.cascade.as_ref().unwrap_or_else(|| device::default_cascade());
        compose(user_agent, cascade, &self.options)
    }
}

impl Default for UserAgentParser {
    fn default() -> Self {
        Self::new()
    }
}

fn compose(user_agent: &str, cascade: &Cascade, options: &DeviceTypeOptions) -> ParsedAgent {
    let browser = browser::classify_browser_name(user_agent);
    let name = browser.map(|b| b.as_str()).unwrap_or("");
    let version = version::extract_version(user_agent, browser);
    let full_name = format!("{} {}", name, version);
    let os = os::classify_os(user_agent);
    let device = cascade.classify(user_agent, options);

    debug!(
        browser = name,
        version = %version,
        os = %os,
        device_type = %device.device_type,
        rule = device.source,
        "parsed user agent"
    );

    ParsedAgent {
        full: user_agent.to_string(),
        name,
        version,
        full_name,
        os,
        device_type: device.device_type,
    }
}

/// Parse a user agent with the default options.
pub fn parse(user_agent: &str) -> ParsedAgent {
    parse_with_options(user_agent, &DeviceTypeOptions::default())
}

/// Parse a user agent with custom device defaults.
pub fn parse_with_options(user_agent: &str, options: &DeviceTypeOptions) -> ParsedAgent {
    compose(user_agent, device::default_cascade(), options)
}

/// Parse an optional user agent; a missing value behaves like `""`.
pub fn parse_optional(user_agent: Option<&str>) -> ParsedAgent {
    parse(user_agent.unwrap_or(""))
}
