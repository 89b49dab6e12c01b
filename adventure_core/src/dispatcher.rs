//! Action dispatch - resolves named actions and runs them against the game.

use std::sync::Arc;

use adventure_rules::{Action, ActionFn, ActionRegistry, Game, GameError, Result};

/// Resolves [`Action`] values to callables. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct ActionDispatcher {
    registry: Arc<ActionRegistry>,
}

impl ActionDispatcher {
    /// Dispatch against `registry`.
    pub fn new(registry: Arc<ActionRegistry>) -> Self {
        Self { registry }
    }

    /// Turn an action into the callable it stands for.
    pub fn resolve(&self, action: &Action) -> Result<ActionFn> {
        match action {
            Action::Direct(f) => Ok(Arc::clone(f)),
            Action::Named(name) => self
                .registry
                .get(name)
                .ok_or_else(|| GameError::UnknownAction(name.clone())),
        }
    }

    /// Resolve `action` and run it to completion.
    pub fn dispatch(&self, action: &Action, game: &mut dyn Game) -> Result<()> {
        let body = self.resolve(action)?;
        if let Action::Named(name) = action {
            tracing::debug!(action = %name, "dispatching named action");
        }
        body(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_direct() {
        let dispatcher = ActionDispatcher::default();
        assert!(dispatcher.resolve(&Action::direct(|_| Ok(()))).is_ok());
    }

    #[test]
    fn test_resolve_named() {
        let registry = ActionRegistry::new().with("rest", |_| Ok(()));
        let dispatcher = ActionDispatcher::new(Arc::new(registry));

        assert!(dispatcher.resolve(&Action::named("rest")).is_ok());
        assert!(matches!(
            dispatcher.resolve(&Action::named("fly")),
            Err(GameError::UnknownAction(name)) if name == "fly"
        ));
    }
}
