//! Engine configuration, loadable from TOML.

use adventure_rules::{Result, TravelPolicy};
use serde::{Deserialize, Serialize};

/// What happens when the protagonist travels to the site they are already at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelfArrival {
    /// Arrival events are drawn again.
    #[default]
    Trigger,
    /// Arrival events are skipped.
    Suppress,
}

/// Runtime tuning shared by every session built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How journeys are priced.
    pub travel: TravelPolicy,

    pub self_arrival: SelfArrival,

    /// Seed for arrival draws. `None` seeds from the OS.
    pub rng_seed: Option<u64>,

    /// Separator between port names in `$ports`.
    pub ports_delimiter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            travel: TravelPolicy::default(),
            self_arrival: SelfArrival::default(),
            rng_seed: None,
            ports_delimiter: ", ".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Fix the arrival seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Replace the travel policy.
    pub fn with_travel(mut self, travel: TravelPolicy) -> Self {
        self.travel = travel;
        self
    }

    /// Replace the self-arrival policy.
    pub fn with_self_arrival(mut self, self_arrival: SelfArrival) -> Self {
        self.self_arrival = self_arrival;
        self
    }
}
