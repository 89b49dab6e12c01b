//! The game contract - everything an action may ask of the running session.

use std::str::FromStr;

use crate::error::Result;
use crate::script::{Event, GameOption};
use crate::state::{State, StatusKey};

/// Styling hint attached to a log line. Unknown names are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextType {
    Normal,
    Event,
    Good,
    Bad,
    ValueMutation,
    Other(String),
}

impl TextType {
    /// The name presentation layers key their styles on.
    pub fn as_str(&self) -> &str {
        match self {
            TextType::Normal => "normal",
            TextType::Event => "event",
            TextType::Good => "good",
            TextType::Bad => "bad",
            TextType::ValueMutation => "value-mutation",
            TextType::Other(name) => name,
        }
    }
}

impl FromStr for TextType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "normal" => TextType::Normal,
            "event" => TextType::Event,
            "good" => TextType::Good,
            "bad" => TextType::Bad,
            "value-mutation" => TextType::ValueMutation,
            other => TextType::Other(other.to_string()),
        })
    }
}

impl std::fmt::Display for TextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event to trigger, either by top-level id or by value.
#[derive(Debug, Clone, Copy)]
pub enum EventRef<'a> {
    Id(&'a str),
    Event(&'a Event),
}

impl<'a> From<&'a str> for EventRef<'a> {
    fn from(id: &'a str) -> Self {
        EventRef::Id(id)
    }
}

impl<'a> From<&'a Event> for EventRef<'a> {
    fn from(event: &'a Event) -> Self {
        EventRef::Event(event)
    }
}

/// Operations a running session exposes to actions and hosts.
///
/// Kept object safe so actions can be written against `&mut dyn Game`.
pub trait Game {
    /// Live read-only view of the protagonist.
    fn state(&self) -> &State;

    /// Substitute `$site`, `$ports`, `$days`, `$hp`, `$money` and `$honor` in `raw`.
    fn fill_text(&self, raw: &str) -> String;

    /// Append a line to the dialogue log.
    fn add_text(&mut self, text: &str, types: &[TextType]);

    /// Replace the whole option panel.
    fn set_options(&mut self, options: Vec<GameOption>);

    /// Add `delta` to a status counter and log a `value-mutation` line.
    fn mutate(&mut self, key: StatusKey, delta: i64, reason: Option<&str>);

    /// [`mutate`](Game::mutate) with a key given by name.
    fn mutate_by_name(&mut self, key: &str, delta: i64, reason: Option<&str>) -> Result<()> {
        let key: StatusKey = key.parse()?;
        self.mutate(key, delta, reason);
        Ok(())
    }

    /// Travel to `site`. Unless `instantly`, the travel cost is paid first.
    fn go_to_site(&mut self, site: &str, instantly: bool) -> Result<()>;

    /// Fire an event by id or by value.
    fn trigger_event(&mut self, event: EventRef<'_>) -> Result<()>;

    /// Re-render the state summary and/or the current site's port options.
    fn show_state(&mut self, state: bool, options: bool);
}
