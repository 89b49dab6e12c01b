//! Game runtime - composes the state store, templater, presenter, dispatcher,
//! selector and navigator behind the [`Game`] contract.
//!
//! One runtime is one play session. The script is shared through an `Arc` and
//! never written; the state store belongs to the session alone.

mod session;

pub use session::*;

use std::sync::Arc;

use adventure_rules::{
    Action, ActionRegistry, Data, EventRef, Game, GameError, GameOption, Result, State,
    StateStore, StatusKey, TextType, TravelCost,
};

use crate::config::EngineConfig;
use crate::dispatcher::ActionDispatcher;
use crate::navigator::Navigator;
use crate::presenter::{PresentationSink, Presenter};
use crate::selector::{self, EventSelector};
use crate::templater::TextTemplater;

/// A running play session.
pub struct GameRuntime<S> {
    session: SessionId,
    data: Arc<Data>,
    store: StateStore,
    templater: TextTemplater,
    presenter: Presenter<S>,
    dispatcher: ActionDispatcher,
    selector: EventSelector,
    navigator: Navigator,
}

impl<S: PresentationSink> GameRuntime<S> {
    /// Create a session over `data`, reporting to `sink`.
    ///
    /// Fails with [`GameError::MissingEntrySite`] (or another integrity error)
    /// when the script is malformed.
    pub fn new(
        data: Arc<Data>,
        registry: Arc<ActionRegistry>,
        config: &EngineConfig,
        sink: S,
    ) -> Result<Self> {
        data.validate()?;

        let state = State::new(data.entry.site.clone(), data.entry.status);
        Ok(Self {
            session: SessionId::new(),
            store: StateStore::new(state),
            templater: TextTemplater::new(config.ports_delimiter.clone()),
            presenter: Presenter::new(sink),
            dispatcher: ActionDispatcher::new(registry),
            selector: EventSelector::new(config.rng_seed),
            navigator: Navigator::new(Box::new(config.travel), config.self_arrival),
            data,
        })
    }

    /// Replace the configured travel policy with a custom one.
    pub fn with_travel_cost(mut self, cost: Box<dyn TravelCost>) -> Self {
        self.navigator.set_cost(cost);
        self
    }

    /// Show the entry story and the opening site.
    ///
    /// Arrival events of the entry site are not drawn.
    pub fn start(&mut self) {
        tracing::info!(
            session = %self.session,
            site = %self.store.read().site,
            "session started"
        );

        let story = self.fill_text(&self.data.entry.story);
        if !story.is_empty() {
            self.add_text(&story, &[TextType::Normal]);
        }
        self.show_state(true, true);
    }

    /// Run the action of the option at `index` on the current panel.
    pub fn choose(&mut self, index: usize) -> Result<()> {
        let option = self
            .presenter
            .options()
            .get(index)
            .cloned()
            .ok_or_else(|| GameError::InvalidChoice {
                index,
                available: self.presenter.options().len(),
            })?;

        tracing::debug!(session = %self.session, index, text = %option.text, "option chosen");
        let dispatcher = self.dispatcher.clone();
        dispatcher.dispatch(&option.action, self)
    }

    /// Options currently on the panel.
    pub fn options(&self) -> &[GameOption] {
        self.presenter.options()
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn data(&self) -> &Arc<Data> {
        &self.data
    }

    pub fn sink(&self) -> &S {
        self.presenter.sink()
    }

    /// Options derived from the current site's ports.
    fn port_options(&self) -> Vec<GameOption> {
        let Some(site) = self.data.site(&self.store.read().site) else {
            return Vec::new();
        };

        site.ports
            .iter()
            .map(|port| {
                let target_name = self
                    .data
                    .site(&port.target)
                    .map_or(port.target.as_str(), |s| s.name.as_str());
                let action = port
                    .action
                    .clone()
                    .unwrap_or_else(|| Action::go_to(port.target.clone()));
                GameOption::new(self.fill_text(&port.label(target_name)), action)
            })
            .collect()
    }
}

impl<S: PresentationSink> Game for GameRuntime<S> {
    fn state(&self) -> &State {
        self.store.read()
    }

    fn fill_text(&self, raw: &str) -> String {
        self.templater.fill(raw, &self.data, self.store.read())
    }

    fn add_text(&mut self, text: &str, types: &[TextType]) {
        self.presenter.add_text(text, types);
    }

    fn set_options(&mut self, options: Vec<GameOption>) {
        self.presenter.set_options(options);
    }

    fn mutate(&mut self, key: StatusKey, delta: i64, reason: Option<&str>) {
        let mutation = self.store.mutate(key, delta, reason);
        self.presenter
            .add_text(&mutation.describe(), &[TextType::ValueMutation]);
    }

    fn go_to_site(&mut self, site: &str, instantly: bool) -> Result<()> {
        let data = Arc::clone(&self.data);
        let arrival = self
            .navigator
            .go_to_site(&data, &mut self.store, site, instantly)?;

        if let Some(payment) = &arrival.payment {
            self.presenter
                .add_text(&payment.describe(), &[TextType::ValueMutation]);
        }

        let panel = self.presenter.generation();
        let mut fired = Ok(());
        if arrival.draw_events {
            let candidates = data.site(&arrival.to).map_or(&[][..], |s| s.events.as_slice());
            if let Some(event) = self.selector.pick_arrival(candidates) {
                let dispatcher = self.dispatcher.clone();
                fired = selector::fire_event(event, self, &dispatcher);
            }
        }

        // The panel follows the move even if the arrival event failed.
        // An arrival event that put up its own panel keeps it.
        let panel_untouched = self.presenter.generation() == panel;
        self.show_state(true, panel_untouched);
        if let Err(err) = &fired {
            tracing::warn!(site = %arrival.to, %err, "arrival event failed");
        }
        fired
    }

    fn trigger_event(&mut self, event: EventRef<'_>) -> Result<()> {
        let data = Arc::clone(&self.data);
        let event = match event {
            EventRef::Id(id) => selector::resolve_event(&data, id)?,
            EventRef::Event(event) => event,
        };

        let dispatcher = self.dispatcher.clone();
        selector::fire_event(event, self, &dispatcher)
    }

    fn show_state(&mut self, state: bool, options: bool) {
        if state {
            self.presenter.show_state(self.store.read());
        }
        if options {
            let options = self.port_options();
            self.presenter.set_options(options);
        }
    }
}
