//! Stage trait and the predicate-backed rule stage.

use super::{DeviceType, DeviceTypeOptions, StageResult};

/// A single stage in the device-type cascade.
///
/// Each stage examines the user agent and either:
/// - Returns `Some(result)` if it decides the device type
/// - Returns `None` to pass to the next stage
pub trait Stage: Send + Sync {
    /// The name of this stage (for debugging/logging).
    fn name(&self) -> &'static str;

    /// Try to classify the user agent.
    fn classify(&self, user_agent: &str, options: &DeviceTypeOptions) -> Option<StageResult>;
}

/// What a rule yields once its predicate holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Always this device type.
    Fixed(DeviceType),
    /// Whatever `bot_user_agent_device_type` is configured to.
    Bot,
}

impl Outcome {
    fn resolve(self, options: &DeviceTypeOptions) -> DeviceType {
        match self {
            Outcome::Fixed(device_type) => device_type,
            Outcome::Bot => options.bot_user_agent_device_type,
        }
    }
}

/// A named `(predicate, outcome)` pair.
#[derive(Clone, Copy)]
pub struct RuleStage {
    name: &'static str,
    predicate: fn(&str) -> bool,
    outcome: Outcome,
}

impl RuleStage {
    pub const fn new(name: &'static str, predicate: fn(&str) -> bool, outcome: Outcome) -> Self {
        Self {
            name,
            predicate,
            outcome,
        }
    }

    /// Rule yielding a fixed device type.
    pub const fn fixed(name: &'static str, predicate: fn(&str) -> bool, device_type: DeviceType) -> Self {
        Self::new(name, predicate, Outcome::Fixed(device_type))
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl Stage for RuleStage {
    fn name(&self) -> &'static str {
        self.name
    }

    fn classify(&self, user_agent: &str, options: &DeviceTypeOptions) -> Option<StageResult> {
        if (self.predicate)(user_agent) {
            Some(StageResult::new(self.outcome.resolve(options), self.name))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mentions_fridge(ua: &str) -> bool {
        ua.contains("Fridge")
    }

    #[test]
    fn test_rule_stage_fixed() {
        let stage = RuleStage::fixed("fridge", mentions_fridge, DeviceType::Tv);
        let options = DeviceTypeOptions::default();
        assert_eq!(stage.name(), "fridge");
        assert_eq!(
            stage.classify("SmartFridge/1.0", &options),
            Some(StageResult::new(DeviceType::Tv, "fridge"))
        );
        assert_eq!(stage.classify("Toaster/1.0", &options), None);
    }

    #[test]
    fn test_rule_stage_bot_follows_options() {
        let stage = RuleStage::new("fridge", mentions_fridge, Outcome::Bot);
        let options = DeviceTypeOptions::default().bot_user_agent_device_type(DeviceType::Desktop);
        let result = stage.classify("Fridge", &options).unwrap();
        assert_eq!(result.device_type, DeviceType::Desktop);
        assert_eq!(stage.outcome(), Outcome::Bot);
    }
}
