//! Script definitions - the immutable authored game data.
//!
//! A script consists of:
//! - **Sites**: locations, each with outgoing ports and arrival events
//! - **Events**: top-level events addressable by id
//! - **Entry**: where a session starts and the story shown first

mod action;
mod event;
mod site;

pub use action::*;
pub use event::*;
pub use site::*;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{GameError, Result};
use crate::state::StatusValues;

/// Session starting point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Id of the site a session begins at.
    pub site: String,
    /// Intro text, templated when the session starts.
    #[serde(default)]
    pub story: String,
    /// Initial status counters.
    #[serde(default)]
    pub status: StatusValues,
}

impl Entry {
    /// Start at `site` with `story` and default status.
    pub fn new(site: impl Into<String>, story: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            story: story.into(),
            status: StatusValues::default(),
        }
    }

    /// Override the initial status counters.
    pub fn with_status(mut self, status: StatusValues) -> Self {
        self.status = status;
        self
    }
}

/// On-disk shape of a script.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScriptFile {
    #[serde(default)]
    sites: Vec<Site>,
    #[serde(default)]
    events: Vec<Event>,
    entry: Entry,
}

impl From<ScriptFile> for Data {
    fn from(file: ScriptFile) -> Self {
        let mut data = Data::new(file.entry);
        for site in file.sites {
            data.push_site(site);
        }
        for event in file.events {
            data.push_event(event);
        }
        data
    }
}

impl From<Data> for ScriptFile {
    fn from(data: Data) -> Self {
        Self {
            sites: data.sites,
            events: data.events,
            entry: data.entry,
        }
    }
}

/// The whole script. Loaded once and shared read-only between sessions.
///
/// Sites and events keep their authored order; lookups by id go through
/// indexes built as they are added. The first definition of an id wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ScriptFile", into = "ScriptFile")]
pub struct Data {
    sites: Vec<Site>,
    events: Vec<Event>,
    pub entry: Entry,
    site_index: HashMap<String, usize>,
    event_index: HashMap<String, usize>,
}

impl Data {
    /// Create a script with no sites and no events.
    pub fn new(entry: Entry) -> Self {
        Self {
            sites: Vec::new(),
            events: Vec::new(),
            entry,
            site_index: HashMap::new(),
            event_index: HashMap::new(),
        }
    }

    /// Add a site.
    pub fn with_site(mut self, site: Site) -> Self {
        self.push_site(site);
        self
    }

    /// Add a top-level event.
    pub fn with_event(mut self, event: Event) -> Self {
        self.push_event(event);
        self
    }

    fn push_site(&mut self, site: Site) {
        self.site_index
            .entry(site.id.clone())
            .or_insert(self.sites.len());
        self.sites.push(site);
    }

    fn push_event(&mut self, event: Event) {
        self.event_index
            .entry(event.id.clone())
            .or_insert(self.events.len());
        self.events.push(event);
    }

    /// Parse and validate a TOML script.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let data: Data = toml::from_str(source)?;
        data.validate()?;
        Ok(data)
    }

    /// Parse and validate a JSON script.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let data: Data = serde_json::from_str(source)?;
        data.validate()?;
        Ok(data)
    }

    /// All sites in authored order.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// All top-level events in authored order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get site by id.
    pub fn site(&self, id: &str) -> Option<&Site> {
        self.site_index.get(id).and_then(|&i| self.sites.get(i))
    }

    /// Get top-level event by id.
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.event_index.get(id).and_then(|&i| self.events.get(i))
    }

    /// Check referential integrity: the entry site exists, ids are unique,
    /// and every port leads somewhere.
    pub fn validate(&self) -> Result<()> {
        if self.site(&self.entry.site).is_none() {
            return Err(GameError::MissingEntrySite(self.entry.site.clone()));
        }

        if self.site_index.len() != self.sites.len() {
            let mut seen = HashSet::new();
            if let Some(site) = self.sites.iter().find(|s| !seen.insert(s.id.as_str())) {
                return Err(GameError::DuplicateId {
                    kind: "site",
                    id: site.id.clone(),
                });
            }
        }

        if self.event_index.len() != self.events.len() {
            let mut seen = HashSet::new();
            if let Some(event) = self.events.iter().find(|e| !seen.insert(e.id.as_str())) {
                return Err(GameError::DuplicateId {
                    kind: "event",
                    id: event.id.clone(),
                });
            }
        }

        for site in &self.sites {
            for port in &site.ports {
                if !self.site_index.contains_key(&port.target) {
                    return Err(GameError::DanglingPort {
                        site: site.id.clone(),
                        target: port.target.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            sites = self.sites.len(),
            events = self.events.len(),
            entry = %self.entry.site,
            "script validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"
[entry]
site = "village"
story = "You wake in $site."
status = { hp = 20, money = 50 }

[[sites]]
id = "village"
name = "Village"

[[sites.ports]]
target = "forest"

[[sites.ports]]
target = "forest"
name = "take the long road"
distance = 3

[[sites.events]]
id = "market"
weight = 2
text = "Traders shout in $site."
options = [{ text = "haggle", action = "haggle" }]

[[sites]]
id = "forest"
name = "Dark Forest"

[[sites.ports]]
target = "village"
action = "flee_home"

[[events]]
id = "ambush"
action = "fight"
"#;

    #[test]
    fn test_load_toml_script() {
        let data = Data::from_toml_str(SCRIPT).unwrap();

        assert_eq!(data.sites().len(), 2);
        assert_eq!(data.entry.status.hp, 20);
        assert_eq!(data.entry.status.money, 50);
        // Missing fields fall back to the default status.
        assert_eq!(data.entry.status.honor, 0);

        let village = data.site("village").unwrap();
        assert_eq!(village.ports.len(), 2);
        assert_eq!(village.ports[1].distance, 3);
        assert_eq!(village.events[0].weight, 2);

        let forest = data.site("forest").unwrap();
        assert!(matches!(&forest.ports[0].action, Some(Action::Named(n)) if n == "flee_home"));

        assert!(matches!(data.event("ambush").unwrap().kind, EventKind::Scripted { .. }));
        assert!(data.event("missing").is_none());
    }

    #[test]
    fn test_load_json_script() {
        let data = Data::from_json_str(
            r#"{"entry": {"site": "hut"}, "sites": [{"id": "hut", "name": "Hut"}]}"#,
        )
        .unwrap();
        assert_eq!(data.entry.story, "");
        assert_eq!(data.entry.status, StatusValues::default());
    }

    #[test]
    fn test_missing_entry_site() {
        let data = Data::new(Entry::new("castle", "")).with_site(Site::new("village", "Village"));
        assert!(matches!(data.validate(), Err(GameError::MissingEntrySite(s)) if s == "castle"));
    }

    #[test]
    fn test_dangling_port() {
        let data = Data::new(Entry::new("village", ""))
            .with_site(Site::new("village", "Village").with_port(Port::to("moon")));
        assert!(matches!(
            data.validate(),
            Err(GameError::DanglingPort { target, .. }) if target == "moon"
        ));
    }

    #[test]
    fn test_duplicate_ids() {
        let data = Data::new(Entry::new("village", ""))
            .with_site(Site::new("village", "Village"))
            .with_site(Site::new("village", "Other Village"));
        assert!(matches!(data.validate(), Err(GameError::DuplicateId { kind: "site", .. })));

        let data = Data::new(Entry::new("village", ""))
            .with_site(Site::new("village", "Village"))
            .with_event(Event::narrative("e", "one"))
            .with_event(Event::narrative("e", "two"));
        assert!(matches!(data.validate(), Err(GameError::DuplicateId { kind: "event", .. })));
    }

    #[test]
    fn test_parse_error_surfaces() {
        assert!(matches!(Data::from_toml_str("[entry"), Err(GameError::Toml(_))));
        assert!(matches!(Data::from_json_str("{"), Err(GameError::Json(_))));
    }

    #[test]
    fn test_lookup_by_id() {
        let mut data = Data::new(Entry::new("s0", ""));
        for i in 0..200 {
            data = data
                .with_site(Site::new(format!("s{}", i), format!("Site {}", i)))
                .with_event(Event::narrative(format!("e{}", i), format!("text {}", i)));
        }

        assert_eq!(data.site("s150").map(|s| s.name.as_str()), Some("Site 150"));
        assert_eq!(data.event("e7").map(|e| e.id.as_str()), Some("e7"));
        assert!(data.site("s200").is_none());
        assert_eq!(data.sites()[3].id, "s3");
    }

    #[test]
    fn test_first_duplicate_wins_lookup() {
        let data = Data::new(Entry::new("village", ""))
            .with_site(Site::new("village", "Village"))
            .with_site(Site::new("village", "Other Village"));
        assert_eq!(data.site("village").map(|s| s.name.as_str()), Some("Village"));
        assert_eq!(data.sites().len(), 2);
    }

    #[test]
    fn test_reloaded_script_is_indexed() {
        let json = serde_json::to_string(&Data::from_toml_str(SCRIPT).unwrap()).unwrap();
        assert!(!json.contains("index"));

        let data = Data::from_json_str(&json).unwrap();
        assert_eq!(data.site("forest").map(|s| s.name.as_str()), Some("Dark Forest"));
        assert!(data.event("ambush").is_some());
    }
}
