//! Player state management - the protagonist's mutable status for one session.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GameError;

/// The closed set of numeric status counters a protagonist carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKey {
    Hp,
    Money,
    Honor,
}

impl StatusKey {
    /// Every status key, in display order.
    pub const ALL: [StatusKey; 3] = [StatusKey::Hp, StatusKey::Money, StatusKey::Honor];

    /// The key as it appears in scripts and templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKey::Hp => "hp",
            StatusKey::Money => "money",
            StatusKey::Honor => "honor",
        }
    }
}

impl FromStr for StatusKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hp" => Ok(StatusKey::Hp),
            "money" => Ok(StatusKey::Money),
            "honor" => Ok(StatusKey::Honor),
            other => Err(GameError::InvalidKey(other.to_string())),
        }
    }
}

impl std::fmt::Display for StatusKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values of the three status counters. No bounds are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusValues {
    pub hp: i64,
    pub money: i64,
    pub honor: i64,
}

impl Default for StatusValues {
    fn default() -> Self {
        Self {
            hp: 100,
            money: 100,
            honor: 0,
        }
    }
}

impl StatusValues {
    /// Read the value stored for `key`.
    pub fn get(&self, key: StatusKey) -> i64 {
        match key {
            StatusKey::Hp => self.hp,
            StatusKey::Money => self.money,
            StatusKey::Honor => self.honor,
        }
    }

    fn get_mut(&mut self, key: StatusKey) -> &mut i64 {
        match key {
            StatusKey::Hp => &mut self.hp,
            StatusKey::Money => &mut self.money,
            StatusKey::Honor => &mut self.honor,
        }
    }
}

/// A snapshot of the protagonist: where they are, how long they have travelled,
/// and their status counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Id of the current site.
    pub site: String,
    /// Elapsed days since the session began.
    pub days: u32,
    pub status: StatusValues,
}

impl State {
    /// Create the opening state at `site`.
    pub fn new(site: impl Into<String>, status: StatusValues) -> Self {
        Self {
            site: site.into(),
            days: 0,
            status,
        }
    }

    /// Shorthand for `self.status.get(key)`.
    pub fn get(&self, key: StatusKey) -> i64 {
        self.status.get(key)
    }
}

/// Outcome of a single status mutation, kept for log text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub key: StatusKey,
    pub delta: i64,
    /// Value after the delta was applied.
    pub value: i64,
    pub reason: Option<String>,
}

impl Mutation {
    /// Render the `value-mutation` log line, e.g. `trap: hp -10`.
    pub fn describe(&self) -> String {
        match &self.reason {
            Some(reason) => format!("{}: {} {:+}", reason, self.key, self.delta),
            None => format!("{} {:+}", self.key, self.delta),
        }
    }
}

/// Owner of the session's [`State`].
///
/// All writes go through these methods so that every change can be logged the same way.
#[derive(Debug, Clone)]
pub struct StateStore {
    state: State,
}

impl StateStore {
    /// Create a store holding `state`.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Read-only view of the current state.
    pub fn read(&self) -> &State {
        &self.state
    }

    /// Add `delta` to the counter for `key`. Values accumulate without clamping.
    pub fn mutate(&mut self, key: StatusKey, delta: i64, reason: Option<&str>) -> Mutation {
        let slot = self.state.status.get_mut(key);
        *slot = slot.saturating_add(delta);
        let value = *slot;

        tracing::debug!(%key, delta, value, reason, "status mutated");

        Mutation {
            key,
            delta,
            value,
            reason: reason.map(str::to_string),
        }
    }

    /// Move the protagonist. Callers must have checked that `site` exists.
    pub fn set_site(&mut self, site: impl Into<String>) {
        self.state.site = site.into();
    }

    /// Advance the day counter by `days`.
    pub fn advance_days(&mut self, days: u32) {
        self.state.days = self.state.days.saturating_add(days);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> StateStore {
        StateStore::new(State::new(
            "village",
            StatusValues {
                hp: 20,
                money: 50,
                honor: 0,
            },
        ))
    }

    #[test]
    fn test_status_key_parsing() {
        assert_eq!("hp".parse::<StatusKey>().unwrap(), StatusKey::Hp);
        assert_eq!("honor".parse::<StatusKey>().unwrap(), StatusKey::Honor);

        let err = "gold".parse::<StatusKey>().unwrap_err();
        assert!(matches!(err, GameError::InvalidKey(k) if k == "gold"));
    }

    #[test]
    fn test_mutations_accumulate_without_clamping() {
        let mut store = store();

        for key in StatusKey::ALL {
            let start = store.read().get(key);
            let deltas = [-30, 7, -100, 4];
            for delta in deltas {
                store.mutate(key, delta, None);
            }
            assert_eq!(store.read().get(key), start + deltas.iter().sum::<i64>());
        }
        assert!(store.read().status.hp < 0);
    }

    #[test]
    fn test_mutation_record() {
        let mut store = store();

        let first = store.mutate(StatusKey::Hp, -10, Some("trap"));
        let second = store.mutate(StatusKey::Hp, 3, None);

        assert_eq!(first.value, 10);
        assert_eq!(first.describe(), "trap: hp -10");
        assert_eq!(second.value, 13);
        assert_eq!(second.describe(), "hp +3");
        assert_eq!(store.read().status.hp, 13);
    }

    #[test]
    fn test_site_and_days() {
        let mut store = store();
        store.advance_days(2);
        store.advance_days(1);
        store.set_site("forest");

        assert_eq!(store.read().days, 3);
        assert_eq!(store.read().site, "forest");
    }

    #[test]
    fn test_default_status() {
        let status = StatusValues::default();
        assert_eq!(status.get(StatusKey::Hp), 100);
        assert_eq!(status.get(StatusKey::Money), 100);
        assert_eq!(status.get(StatusKey::Honor), 0);
    }
}
