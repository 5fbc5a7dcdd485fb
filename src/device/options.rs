//! Default outcomes of the device-type cascade.

use serde::{Deserialize, Serialize};

use super::DeviceType;
use crate::Error;

/// The three outcomes the cascade resolves without a specific rule.
///
/// Keys use the camelCase names when (de)serialized, so a JSON
/// object such as `{"unknownUserAgentDeviceType": "desktop"}` overrides
/// only that field and keeps the others at their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceTypeOptions {
    /// Returned for an empty user agent.
    pub empty_user_agent_device_type: DeviceType,
    /// Returned when no rule matched.
    pub unknown_user_agent_device_type: DeviceType,
    /// Returned when the crawler rule matched.
    pub bot_user_agent_device_type: DeviceType,
}

impl Default for DeviceTypeOptions {
    fn default() -> Self {
        Self {
            empty_user_agent_device_type: DeviceType::Desktop,
            unknown_user_agent_device_type: DeviceType::Phone,
            bot_user_agent_device_type: DeviceType::Bot,
        }
    }
}

impl DeviceTypeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON object. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn empty_user_agent_device_type(mut self, device_type: DeviceType) -> Self {
        self.empty_user_agent_device_type = device_type;
        self
    }

    pub fn unknown_user_agent_device_type(mut self, device_type: DeviceType) -> Self {
        self.unknown_user_agent_device_type = device_type;
        self
    }

    pub fn bot_user_agent_device_type(mut self, device_type: DeviceType) -> Self {
        self.bot_user_agent_device_type = device_type;
        self
    }
}
