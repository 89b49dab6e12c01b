//! Error types shared by the script model and the runtime.
//!
//! Every variant describes a data-integrity problem in the authored script or
//! in the caller's input. None of them is transient, so nothing here is retried.

/// Errors raised while loading a script or running a session.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A status mutation named a key outside `hp`, `money`, `honor`.
    #[error("invalid status key: {0}")]
    InvalidKey(String),

    /// Navigation targeted a site id that the script does not define.
    #[error("unknown site: {0}")]
    UnknownSite(String),

    /// An event was triggered by an id that no top-level event carries.
    #[error("unknown event: {0}")]
    UnknownEvent(String),

    /// A named action is missing from the action registry.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// The script's entry descriptor points at a site that does not exist.
    #[error("entry site does not exist: {0}")]
    MissingEntrySite(String),

    /// A port leads to a site that does not exist.
    #[error("port of site {site} targets unknown site {target}")]
    DanglingPort { site: String, target: String },

    /// Two sites, or two top-level events, share an id.
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// The player picked an option index that is not on the panel.
    #[error("no option at index {index} ({available} available)")]
    InvalidChoice { index: usize, available: usize },

    /// Closure actions only exist in code and cannot be written out.
    #[error("direct actions cannot be serialized")]
    UnserializableAction,

    /// A TOML script or config failed to parse.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON script failed to parse.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, GameError>;
