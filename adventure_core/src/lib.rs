//! # Adventure Core
//!
//! The interpreter for adventure scripts. This crate holds a session's mutable
//! state, fills text templates, draws and fires events, runs actions, and moves
//! the protagonist between sites.
//!
//! ## Core Components
//!
//! - **templater**: `$placeholder` substitution against the state and current site
//! - **presenter**: forwards log lines and option panels to a presentation sink
//! - **dispatcher**: resolves named or inline actions and runs them
//! - **selector**: weighted arrival draws and event firing
//! - **navigator**: travel costs and site changes
//! - **runtime**: the [`GameRuntime`] that implements the `Game` contract
//!
//! ## Design Philosophy
//!
//! - **Turn-Based**: each choice runs to completion, including chained actions and events
//! - **Shared Scripts**: `Data` is read-only and can back many sessions at once
//! - **Fail Fast**: script integrity errors surface to the caller immediately

pub mod config;
pub mod dispatcher;
pub mod navigator;
pub mod presenter;
pub mod runtime;
pub mod selector;
pub mod templater;

pub use config::*;
pub use dispatcher::*;
pub use navigator::*;
pub use presenter::*;
pub use runtime::*;
pub use selector::*;
pub use templater::*;
