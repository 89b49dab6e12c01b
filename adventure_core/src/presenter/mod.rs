//! Presentation adapter - forwards log lines, option panels and state renders to a sink.
//!
//! The sink decides how anything is displayed. The adapter only remembers the
//! current option panel so that a selection index can be mapped back to its action.

mod transcript;

pub use transcript::*;

use adventure_rules::{GameOption, State, TextType};

/// External consumer of runtime output (terminal, GUI, test recorder, ...).
pub trait PresentationSink {
    /// Append one line to the dialogue log.
    fn add_text(&mut self, text: &str, types: &[TextType]);

    /// Replace the whole visible option set.
    fn set_options(&mut self, options: &[GameOption]);

    /// Render the protagonist's status summary.
    fn show_state(&mut self, state: &State);
}

/// Thin adapter in front of a [`PresentationSink`].
#[derive(Debug)]
pub struct Presenter<S> {
    sink: S,
    options: Vec<GameOption>,
    /// Bumped on every panel replacement.
    generation: u64,
}

impl<S: PresentationSink> Presenter<S> {
    /// Wrap `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            options: Vec::new(),
            generation: 0,
        }
    }

    pub fn add_text(&mut self, text: &str, types: &[TextType]) {
        tracing::trace!(text, types = types.len(), "log line");
        self.sink.add_text(text, types);
    }

    pub fn set_options(&mut self, options: Vec<GameOption>) {
        self.sink.set_options(&options);
        self.options = options;
        self.generation += 1;
    }

    pub fn show_state(&mut self, state: &State) {
        self.sink.show_state(state);
    }

    /// Options currently on the panel.
    pub fn options(&self) -> &[GameOption] {
        &self.options
    }

    /// Changes whenever the panel is replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
