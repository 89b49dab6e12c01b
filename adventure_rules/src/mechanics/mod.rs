//! Game mechanics: travel cost policies.

use serde::{Deserialize, Serialize};

use crate::script::Site;

/// What a single journey costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TravelExpense {
    pub days: u32,
    pub money: i64,
}

/// Pluggable rule for pricing a journey between two sites.
pub trait TravelCost: Send + Sync {
    fn expense(&self, from: &Site, to: &Site) -> TravelExpense;
}

/// Built-in travel cost policies, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum TravelPolicy {
    /// Every journey costs the same.
    Flat { days: u32, money: i64 },
    /// Cost scales with the `distance` of the port taken; 1 unit when no port links the sites.
    Distance {
        days_per_unit: u32,
        money_per_unit: i64,
    },
}

impl Default for TravelPolicy {
    fn default() -> Self {
        TravelPolicy::Flat {
            days: 1,
            money: 10,
        }
    }
}

impl TravelCost for TravelPolicy {
    fn expense(&self, from: &Site, to: &Site) -> TravelExpense {
        match *self {
            TravelPolicy::Flat { days, money } => TravelExpense { days, money },
            TravelPolicy::Distance {
                days_per_unit,
                money_per_unit,
            } => {
                let units = from.port_to(&to.id).map(|p| p.distance).unwrap_or(1);
                TravelExpense {
                    days: days_per_unit.saturating_mul(units),
                    money: money_per_unit.saturating_mul(i64::from(units)),
                }
            }
        }
    }
}
