//! Events and the options they present.

use serde::{Deserialize, Serialize};

use super::Action;

/// A single selectable choice: display text plus the action it runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOption {
    /// Template text; filled before it is shown.
    pub text: String,
    pub action: Action,
}

impl GameOption {
    /// Create an option.
    pub fn new(text: impl Into<String>, action: Action) -> Self {
        Self {
            text: text.into(),
            action,
        }
    }
}

/// What an event does once it fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventKind {
    /// Run an action directly; the event itself shows nothing.
    Scripted { action: Action },
    /// Log `text` and replace the option panel with `options`.
    Narrative {
        text: String,
        #[serde(default)]
        options: Vec<GameOption>,
    },
}

/// A script-defined narrative or mechanical trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    /// Relative arrival weight. Zero or less only fires when the event is a site's sole candidate.
    #[serde(default)]
    pub weight: i32,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl Event {
    /// A narrative event with no options yet.
    pub fn narrative(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            weight: 0,
            kind: EventKind::Narrative {
                text: text.into(),
                options: Vec::new(),
            },
        }
    }

    /// An event that runs `action` when it fires.
    pub fn scripted(id: impl Into<String>, action: Action) -> Self {
        Self {
            id: id.into(),
            weight: 0,
            kind: EventKind::Scripted { action },
        }
    }

    /// Set the arrival weight.
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Append an option. Has no effect on scripted events.
    pub fn with_option(mut self, option: GameOption) -> Self {
        if let EventKind::Narrative { options, .. } = &mut self.kind {
            options.push(option);
        }
        self
    }

    /// Whether this event can win a weighted draw.
    pub fn is_weighted(&self) -> bool {
        self.weight > 0
    }
}
