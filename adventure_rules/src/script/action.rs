//! Actions - behaviors invoked against the running game.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::game::Game;

/// A callable action body. Shared so that scripts can be reused across sessions.
pub type ActionFn = Arc<dyn Fn(&mut dyn Game) -> Result<()> + Send + Sync>;

/// Either a reference into the [`ActionRegistry`] or an inline closure.
///
/// Scripts loaded from files can only name actions; closures are built in code.
#[derive(Clone)]
pub enum Action {
    Named(String),
    Direct(ActionFn),
}

impl Action {
    /// Refer to a registered action by name.
    pub fn named(name: impl Into<String>) -> Self {
        Action::Named(name.into())
    }

    /// Wrap a closure as an action.
    pub fn direct<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Game) -> Result<()> + Send + Sync + 'static,
    {
        Action::Direct(Arc::new(f))
    }

    /// Plain navigation to `site` with the normal travel cost.
    pub fn go_to(site: impl Into<String>) -> Self {
        let site = site.into();
        Action::direct(move |game| game.go_to_site(&site, false))
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Action::Direct(_) => f.write_str("Direct(..)"),
        }
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Action::Named(name) => serializer.serialize_str(name),
            Action::Direct(_) => Err(serde::ser::Error::custom(
                crate::error::GameError::UnserializableAction,
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(Action::Named)
    }
}

/// Name to action table supplied alongside a script.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: HashMap<String, ActionFn>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `f` under `name`, replacing any earlier entry.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&mut dyn Game) -> Result<()> + Send + Sync + 'static,
    {
        self.actions.insert(name.into(), Arc::new(f));
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut dyn Game) -> Result<()> + Send + Sync + 'static,
    {
        self.register(name, f);
        self
    }

    /// Look up an action body by name.
    pub fn get(&self, name: &str) -> Option<ActionFn> {
        self.actions.get(name).cloned()
    }

    /// Check whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.actions.keys().collect();
        names.sort();
        f.debug_struct("ActionRegistry").field("actions", &names).finish()
    }
}
