//! Event selection - weighted arrival draws and event firing.
//!
//! Arrival selection works as follows:
//! 1. **Empty**: a site with no candidates fires nothing
//! 2. **Sole**: a single candidate always fires, whatever its weight
//! 3. **Weighted**: otherwise one draw picks among candidates with positive weight,
//!    candidate *i* winning with probability `weight_i / sum(weights)`
//! 4. **Unweighted**: several candidates and no positive weight fire nothing

use adventure_rules::{Data, Event, EventKind, Game, GameError, Result, TextType};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dispatcher::ActionDispatcher;

/// Random source for arrival draws.
#[derive(Debug, Clone)]
pub struct EventSelector {
    rng: StdRng,
}

impl EventSelector {
    /// Seeded selector; the same seed replays the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Selector seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Build from an optional seed.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os, Self::seeded)
    }

    /// Pick the arrival event among `candidates`, if any fires.
    pub fn pick_arrival<'a>(&mut self, candidates: &'a [Event]) -> Option<&'a Event> {
        if let [only] = candidates {
            return Some(only);
        }

        let eligible: Vec<&Event> = candidates.iter().filter(|e| e.is_weighted()).collect();
        if eligible.is_empty() {
            return None;
        }

        // Positive i32 weights always fit in u64, and so does their sum.
        let weights = eligible.iter().map(|e| u64::from(e.weight.unsigned_abs()));
        match WeightedIndex::new(weights) {
            Ok(index) => eligible.get(index.sample(&mut self.rng)).copied(),
            Err(err) => {
                tracing::warn!(%err, candidates = eligible.len(), "arrival weights rejected");
                None
            }
        }
    }
}

/// Look up a top-level event by id.
pub fn resolve_event<'a>(data: &'a Data, id: &str) -> Result<&'a Event> {
    data.event(id)
        .ok_or_else(|| GameError::UnknownEvent(id.to_string()))
}

/// Fire an already-resolved event through the game contract.
///
/// Narrative events log their templated text as `event` and, when they carry
/// options, replace the panel with templated copies. Scripted events only run
/// their action.
pub fn fire_event(event: &Event, game: &mut dyn Game, dispatcher: &ActionDispatcher) -> Result<()> {
    tracing::debug!(event = %event.id, "event fired");

    match &event.kind {
        EventKind::Narrative { text, options } => {
            let text = game.fill_text(text);
            game.add_text(&text, &[TextType::Event]);

            if !options.is_empty() {
                let options = options
                    .iter()
                    .map(|option| {
                        let mut option = option.clone();
                        option.text = game.fill_text(&option.text);
                        option
                    })
                    .collect();
                game.set_options(options);
            }
            Ok(())
        }
        EventKind::Scripted { action } => dispatcher.dispatch(action, game),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(weights: &[i32]) -> Vec<Event> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| Event::narrative(format!("e{}", i), "text").with_weight(*w))
            .collect()
    }

    #[test]
    fn test_empty_fires_nothing() {
        let mut selector = EventSelector::seeded(1);
        assert!(selector.pick_arrival(&[]).is_none());
    }

    #[test]
    fn test_sole_candidate_always_fires() {
        let mut selector = EventSelector::seeded(1);
        for weight in [-3, 0, 1, 50] {
            let candidates = events(&[weight]);
            for _ in 0..20 {
                assert_eq!(selector.pick_arrival(&candidates).map(|e| e.id.as_str()), Some("e0"));
            }
        }
    }

    #[test]
    fn test_unweighted_candidates_never_fire() {
        let mut selector = EventSelector::seeded(2);
        let candidates = events(&[0, 0, -1]);
        for _ in 0..1000 {
            assert!(selector.pick_arrival(&candidates).is_none());
        }
    }

    #[test]
    fn test_zero_weight_never_wins_against_weighted() {
        let mut selector = EventSelector::seeded(3);
        let candidates = events(&[0, 5]);
        for _ in 0..500 {
            assert_eq!(selector.pick_arrival(&candidates).map(|e| e.id.as_str()), Some("e1"));
        }
    }

    #[test]
    fn test_draws_converge_to_weights() {
        let mut selector = EventSelector::seeded(42);
        let candidates = events(&[1, 3, 0, 6]);
        let draws = 20_000;
        let mut counts = [0usize; 4];

        for _ in 0..draws {
            let picked = selector.pick_arrival(&candidates).unwrap();
            let index = candidates.iter().position(|e| e.id == picked.id).unwrap();
            counts[index] += 1;
        }

        let expected = [0.1, 0.3, 0.0, 0.6];
        for (count, expected) in counts.iter().zip(expected) {
            let observed = *count as f64 / draws as f64;
            assert!(
                (observed - expected).abs() < 0.02,
                "observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_large_weights_still_draw() {
        let mut selector = EventSelector::seeded(5);
        let candidates = events(&[i32::MAX, i32::MAX, i32::MAX]);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let picked = selector.pick_arrival(&candidates).unwrap();
            let index = candidates.iter().position(|e| e.id == picked.id).unwrap();
            seen[index] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let candidates = events(&[1, 1, 1, 1]);
        let mut a = EventSelector::seeded(9);
        let mut b = EventSelector::seeded(9);
        for _ in 0..50 {
            assert_eq!(
                a.pick_arrival(&candidates).map(|e| e.id.clone()),
                b.pick_arrival(&candidates).map(|e| e.id.clone())
            );
        }
    }

    #[test]
    fn test_resolve_event() {
        use adventure_rules::{Entry, Site};

        let data = Data::new(Entry::new("v", ""))
            .with_site(Site::new("v", "V"))
            .with_event(Event::narrative("storm", "Rain."));

        assert_eq!(resolve_event(&data, "storm").unwrap().id, "storm");
        assert!(matches!(
            resolve_event(&data, "nonexistent"),
            Err(GameError::UnknownEvent(id)) if id == "nonexistent"
        ));
    }
}
