//! Sites and the ports that connect them.

use serde::{Deserialize, Serialize};

use super::{Action, Event};

/// A location node in the world graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    /// Outgoing paths, in display order.
    #[serde(default)]
    pub ports: Vec<Port>,
    /// Candidate events evaluated on every arrival.
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Site {
    /// Create a site with no ports and no events.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ports: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Add an outgoing port.
    pub fn with_port(mut self, port: Port) -> Self {
        self.ports.push(port);
        self
    }

    /// Add an arrival event candidate.
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// The first port leading to `target`, if any.
    pub fn port_to(&self, target: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.target == target)
    }
}

fn default_distance() -> u32 {
    1
}

/// A directed edge from one site to another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replaces plain navigation when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    /// Abstract length of the path, used by distance-based travel costs.
    #[serde(default = "default_distance")]
    pub distance: u32,
}

impl Port {
    /// A plain, unnamed port leading to `target`.
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            name: None,
            action: None,
            distance: default_distance(),
        }
    }

    /// Set the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override navigation with a custom action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Set the path length.
    pub fn with_distance(mut self, distance: u32) -> Self {
        self.distance = distance;
        self
    }

    /// Display label: the port's own name, or `go to <target name>`.
    pub fn label(&self, target_name: &str) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("go to {}", target_name),
        }
    }
}
