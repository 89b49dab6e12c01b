//! Navigation - prices journeys and moves the protagonist between sites.

use adventure_rules::{
    Data, GameError, Mutation, Result, StateStore, StatusKey, TravelCost, TravelExpense,
};

use crate::config::SelfArrival;

/// Result of moving the protagonist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    pub from: String,
    pub to: String,
    /// `None` for instant moves.
    pub expense: Option<TravelExpense>,
    /// Money change applied to pay for the journey, if any.
    pub payment: Option<Mutation>,
    /// Whether the new site's arrival events should be drawn.
    pub draw_events: bool,
}

/// Computes travel costs and applies moves to the state store.
pub struct Navigator {
    cost: Box<dyn TravelCost>,
    self_arrival: SelfArrival,
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("self_arrival", &self.self_arrival)
            .finish_non_exhaustive()
    }
}

impl Navigator {
    /// Create a navigator with the given pricing and self-arrival policy.
    pub fn new(cost: Box<dyn TravelCost>, self_arrival: SelfArrival) -> Self {
        Self { cost, self_arrival }
    }

    /// Swap the pricing rule.
    pub fn set_cost(&mut self, cost: Box<dyn TravelCost>) {
        self.cost = cost;
    }

    /// What travelling from the current site to `target` would cost.
    pub fn quote(&self, data: &Data, store: &StateStore, target: &str) -> Result<TravelExpense> {
        let to = data
            .site(target)
            .ok_or_else(|| GameError::UnknownSite(target.to_string()))?;
        let from = data
            .site(&store.read().site)
            .ok_or_else(|| GameError::UnknownSite(store.read().site.clone()))?;
        Ok(self.cost.expense(from, to))
    }

    /// Move to `target`, paying the travel cost unless `instantly`.
    ///
    /// Nothing is changed when `target` does not exist.
    pub fn go_to_site(
        &self,
        data: &Data,
        store: &mut StateStore,
        target: &str,
        instantly: bool,
    ) -> Result<Arrival> {
        let expense = if instantly {
            if data.site(target).is_none() {
                return Err(GameError::UnknownSite(target.to_string()));
            }
            None
        } else {
            Some(self.quote(data, store, target)?)
        };

        let from = store.read().site.clone();
        let mut payment = None;
        if let Some(expense) = expense {
            store.advance_days(expense.days);
            if expense.money != 0 {
                payment = Some(store.mutate(
                    StatusKey::Money,
                    expense.money.saturating_neg(),
                    Some("travel"),
                ));
            }
        }
        store.set_site(target);

        let draw_events = from != target || self.self_arrival == SelfArrival::Trigger;
        tracing::debug!(
            from = %from,
            to = %target,
            instantly,
            days = store.read().days,
            "protagonist moved"
        );

        Ok(Arrival {
            from,
            to: target.to_string(),
            expense,
            payment,
            draw_events,
        })
    }
}
