//! Text templating - fills `$placeholders` from the player state and current site.

use adventure_rules::{Data, State, StatusKey};

/// Placeholder resolver for dialogue and option text.
///
/// Recognized tokens are `$site`, `$ports`, `$days`, `$hp`, `$money` and `$honor`.
/// A token is the longest run of ASCII alphanumerics or `_` after the `$`, so
/// `$hpx` is a different (unknown) token and is copied verbatim.
#[derive(Debug, Clone)]
pub struct TextTemplater {
    delimiter: String,
}

impl Default for TextTemplater {
    fn default() -> Self {
        Self::new(", ")
    }
}

impl TextTemplater {
    /// Create a templater that joins port names with `delimiter`.
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Substitute every recognized token in `raw`.
    pub fn fill(&self, raw: &str, data: &Data, state: &State) -> String {
        if !raw.contains('$') {
            return raw.to_string();
        }

        let mut out = String::with_capacity(raw.len());
        let mut rest = raw;

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let word_len = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            let word = &after[..word_len];

            match self.resolve(word, data, state) {
                Some(value) => out.push_str(&value),
                None => {
                    out.push('$');
                    out.push_str(word);
                }
            }
            rest = &after[word_len..];
        }
        out.push_str(rest);
        out
    }

    fn resolve(&self, word: &str, data: &Data, state: &State) -> Option<String> {
        let site = data.site(&state.site);
        match word {
            "site" => Some(site.map_or_else(|| state.site.clone(), |s| s.name.clone())),
            "ports" => Some(
                site.map(|s| {
                    s.ports
                        .iter()
                        .map(|port| {
                            let target = data.site(&port.target).map_or(port.target.as_str(), |t| t.name.as_str());
                            port.label(target)
                        })
                        .collect::<Vec<_>>()
                        .join(&self.delimiter)
                })
                .unwrap_or_default(),
            ),
            "days" => Some(state.days.to_string()),
            other => other
                .parse::<StatusKey>()
                .ok()
                .map(|key| state.get(key).to_string()),
        }
    }
}
