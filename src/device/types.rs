//! Core types for the device-type cascade.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Coarse hardware category of the requesting client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Tv,
    Tablet,
    Phone,
    Desktop,
    Bot,
}

impl DeviceType {
    /// Every device type, in declaration order.
    pub const ALL: [DeviceType; 5] = [
        DeviceType::Tv,
        DeviceType::Tablet,
        DeviceType::Phone,
        DeviceType::Desktop,
        DeviceType::Bot,
    ];

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Tv => "tv",
            DeviceType::Tablet => "tablet",
            DeviceType::Phone => "phone",
            DeviceType::Desktop => "desktop",
            DeviceType::Bot => "bot",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tv" => Ok(DeviceType::Tv),
            "tablet" => Ok(DeviceType::Tablet),
            "phone" => Ok(DeviceType::Phone),
            "desktop" => Ok(DeviceType::Desktop),
            "bot" => Ok(DeviceType::Bot),
            _ => Err(Error::UnknownDeviceType(s.to_string())),
        }
    }
}

/// Result from a device-type stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageResult {
    /// The resolved device type.
    pub device_type: DeviceType,
    /// Name of the stage that produced this result.
    pub source: &'static str,
}

impl StageResult {
    /// Create a new stage result.
    pub fn new(device_type: DeviceType, source: &'static str) -> Self {
        Self {
            device_type,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_type_as_str() {
        assert_eq!(DeviceType::Tv.as_str(), "tv");
        assert_eq!(DeviceType::Tablet.as_str(), "tablet");
        assert_eq!(DeviceType::Phone.as_str(), "phone");
        assert_eq!(DeviceType::Desktop.as_str(), "desktop");
        assert_eq!(DeviceType::Bot.as_str(), "bot");
    }

    #[test]
    fn test_device_type_from_str() {
        assert_eq!("tablet".parse::<DeviceType>().unwrap(), DeviceType::Tablet);
        assert_eq!("DESKTOP".parse::<DeviceType>().unwrap(), DeviceType::Desktop);
        assert!(matches!(
            "watch".parse::<DeviceType>(),
            Err(Error::UnknownDeviceType(s)) if s == "watch"
        ));
    }

    #[test]
    fn test_device_type_display_matches_as_str() {
        for device in DeviceType::ALL {
            assert_eq!(device.to_string(), device.as_str());
        }
    }

    #[test]
    fn test_device_type_serde() {
        let json = serde_json::to_string(&DeviceType::Tv).unwrap();
        assert_eq!(json, "\"tv\"");
        let back: DeviceType = serde_json::from_str("\"bot\"").unwrap();
        assert_eq!(back, DeviceType::Bot);
    }
}
