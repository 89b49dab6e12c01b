//! # Adventure Rules
//!
//! The "Script Bible" crate - the shape of the game's data and the contract a runtime must expose.
//! This crate owns the player state and the script model and does not contain any interpreter logic.

pub mod error;
pub mod game;
pub mod mechanics;
pub mod script;
pub mod state;

pub use error::*;
pub use game::*;
pub use mechanics::*;
pub use script::*;
pub use state::*;
