//! In-memory sink that records everything it is sent.

use adventure_rules::{GameOption, State, TextType};

use super::PresentationSink;

/// A recorded log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub text: String,
    pub types: Vec<TextType>,
}

impl LogLine {
    /// Check whether the line was tagged with `text_type`.
    pub fn has_type(&self, text_type: &TextType) -> bool {
        self.types.contains(text_type)
    }
}

/// Records the dialogue log, the latest option panel, and every state render.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<LogLine>,
    options: Vec<String>,
    states: Vec<State>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line logged so far.
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Lines tagged with `text_type`, in order.
    pub fn lines_of(&self, text_type: &TextType) -> Vec<&LogLine> {
        self.lines.iter().filter(|l| l.has_type(text_type)).collect()
    }

    /// The most recent line.
    pub fn last_line(&self) -> Option<&LogLine> {
        self.lines.last()
    }

    /// Texts of the options currently shown.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Every state render, oldest first.
    pub fn states(&self) -> &[State] {
        &self.states
    }
}

impl PresentationSink for Transcript {
    fn add_text(&mut self, text: &str, types: &[TextType]) {
        self.lines.push(LogLine {
            text: text.to_string(),
            types: types.to_vec(),
        });
    }

    fn set_options(&mut self, options: &[GameOption]) {
        self.options = options.iter().map(|o| o.text.clone()).collect();
    }

    fn show_state(&mut self, state: &State) {
        self.states.push(state.clone());
    }
}
