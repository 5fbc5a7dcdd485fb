//! Device-type classification cascade.
//!
//! The cascade runs a series of rule stages in order, returning as soon as
//! any stage decides the device type. An empty user agent, and one that no
//! stage recognises, resolve to the defaults carried by
//! [`DeviceTypeOptions`].
//!
//! # Example
//!
//! ```
//! use user_agent_parse::device::{Cascade, DeviceType, DeviceTypeOptions};
//!
//! let cascade = Cascade::default_rules();
//! let options = DeviceTypeOptions::default();
//!
//! let result = cascade.classify("Roku/DVP-9.10 (519.10E04111A)", &options);
//! assert_eq!(result.device_type, DeviceType::Tv);
//! assert_eq!(result.source, "smart_tv");
//! ```

mod options;
mod rules;
mod stage;
mod types;


pub use options::DeviceTypeOptions;
pub use rules::default_rules;
pub use stage::{Outcome, RuleStage, Stage};
pub use types::{DeviceType, StageResult};

use once_cell::sync::Lazy;
use tracing::trace;

static DEFAULT_CASCADE: Lazy<Cascade> = Lazy::new(Cascade::default_rules);

/// A cascade of device stages that runs in order until one succeeds.
pub struct Cascade {
    stages: Vec<Box<dyn Stage>>,
}

impl Cascade {
    /// Create an empty cascade (no stages).
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create a cascade with the given stages.
    pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Create a cascade with the built-in rules.
    pub fn default_rules() -> Self {
        let mut cascade = Self::new();
        for rule in rules::default_rules() {
            cascade.add_stage(rule);
        }
        cascade
    }

    /// Add a stage to the end of the cascade.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) {
        self.stages.push(Box::new(stage));
    }

    /// Classify a user agent by running stages in order.
    ///
    /// Returns the first stage result, or the configured unknown device type
    /// with source `"fallback"`. An empty user agent short-circuits to the
    /// configured empty device type with source `"empty"`.
    pub fn classify(&self, user_agent: &str, options: &DeviceTypeOptions) -> StageResult {
        if user_agent.is_empty() {
            trace!("empty user agent");
            return StageResult::new(options.empty_user_agent_device_type, "empty");
        }

        for stage in &self.stages {
            if let Some(result) = stage.classify(user_agent, options) {
                trace!(stage = stage.name(), device_type = %result.device_type, "device rule matched");
                return result;
            }
        }

        trace!("no device rule matched");
        StageResult::new(options.unknown_user_agent_device_type, "fallback")
    }

    /// Get the number of stages in the cascade.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

impl Default for Cascade {
    fn default() -> Self {
        Self::default_rules()
    }
}

/// The shared cascade holding the built-in rules.
pub fn default_cascade() -> &'static Cascade {
    &DEFAULT_CASCADE
}

/// Classify the device type with the built-in rules.
pub fn classify_device_type(user_agent: &str, options: &DeviceTypeOptions) -> DeviceType {
    DEFAULT_CASCADE.classify(user_agent, options).device_type
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysTv;

    impl Stage for AlwaysTv {
        fn name(&self) -> &'static str {
            "always_tv"
        }

        fn classify(&self, _user_agent: &str, _options: &DeviceTypeOptions) -> Option<StageResult> {
            Some(StageResult::new(DeviceType::Tv, "always_tv"))
        }
    }

    struct NeverMatches;

    impl Stage for NeverMatches {
        fn name(&self) -> &'static str {
            "never_matches"
        }

        fn classify(&self, _user_agent: &str, _options: &DeviceTypeOptions) -> Option<StageResult> {
            None
        }
    }

    #[test]
    fn test_empty_cascade_returns_fallback() {
        let cascade = Cascade::new();
        let result = cascade.classify("anything", &DeviceTypeOptions::default());
        assert_eq!(result.device_type, DeviceType::Phone);
        assert_eq!(result.source, "fallback");
    }

    #[test]
    fn test_empty_user_agent_skips_stages() {
        let mut cascade = Cascade::new();
        cascade.add_stage(AlwaysTv);
        let result = cascade.classify("", &DeviceTypeOptions::default());
        assert_eq!(result.device_type, DeviceType::Desktop);
        assert_eq!(result.source, "empty");
    }

    #[test]
    fn test_first_match_wins() {
        let mut cascade = Cascade::new();
        cascade.add_stage(AlwaysTv);
        cascade.add_stage(NeverMatches);
        let result = cascade.classify("test", &DeviceTypeOptions::default());
        assert_eq!(result.device_type, DeviceType::Tv);
    }

    #[test]
    fn test_skips_non_matching_stages() {
        let cascade = Cascade::with_stages(vec![Box::new(NeverMatches) as Box<dyn Stage>, Box::new(AlwaysTv)]);
        let result = cascade.classify("test", &DeviceTypeOptions::default());
        assert_eq!(result.source, "always_tv");
    }

    #[test]
    fn test_default_rules_cascade() {
        assert_eq!(Cascade::default_rules().stage_count(), 14);
        assert_eq!(Cascade::default().stage_count(), 14);
    }

    #[test]
    fn test_custom_defaults_are_honoured() {
        let options = DeviceTypeOptions::new()
            .empty_user_agent_device_type(DeviceType::Bot)
            .unknown_user_agent_device_type(DeviceType::Desktop)
            .bot_user_agent_device_type(DeviceType::Phone);
        assert_eq!(classify_device_type("", &options), DeviceType::Bot);
        assert_eq!(classify_device_type("Dalvik/2.1.0", &options), DeviceType::Desktop);
        assert_eq!(
            classify_device_type("Mozilla/5.0 (compatible; Googlebot/2.1)", &options),
            DeviceType::Phone
        );
    }

    #[test]
    fn test_xbox_on_windows_is_tv() {
        let result = Cascade::default_rules().classify(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; Xbox; Xbox One) AppleWebKit/537.36 Edge/44.18363.8131",
            &DeviceTypeOptions::default(),
        );
        assert_eq!(result.device_type, DeviceType::Tv);
        assert_eq!(result.source, "tv_console");
    }

    #[test]
    fn test_opera_handset_beats_windows_desktop() {
        let result = Cascade::default_rules().classify(
            "HTC-P4600 Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1) Opera 8.60 [en]",
            &DeviceTypeOptions::default(),
        );
        assert_eq!(result.device_type, DeviceType::Phone);
        assert_eq!(result.source, "opera_handset");
    }

    #[test]
    fn test_windows_crawler_reaches_bot_rule() {
        let result = Cascade::default_rules().classify(
            "Mozilla/4.0 (compatible; Windows NT 5.1; SiteBot)",
            &DeviceTypeOptions::default(),
        );
        assert_eq!(result.device_type, DeviceType::Bot);
        assert_eq!(result.source, "crawler");
    }
}
