//! Turn state machine.
//!
//! `Game` owns the situation, the event sink and the randomness source and
//! is the only thing that mutates any of them. Hosts call [`Game::setup`]
//! once, then feed player input through [`Game::act`].
//!
//! ## Action legality
//!
//! An action is applied only when the sub-state it requires is active and
//! the caller is that sub-state's acting player. Terminal sub-states are
//! required by no action, so once the game is lost every call is rejected
//! without any dedicated check.

use serde::{Deserialize, Serialize};

use super::session::Session;
use crate::core::{
    Action, ActionOutcome, EngineError, GameDefinition, PlayerId, Randomness, Rejection, Settings,
    Situation, TurnState,
};
use crate::decks::{restack_infection_discard, DrawEnd};
use crate::events::{EventSink, GameEvent};

/// Why a game was lost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefeatReason {
    /// The outbreak track passed its limit.
    TooManyOutbreaks,
    /// A disease needed a cube and its supply was empty.
    TooManyInfections(String),
    /// A player had to draw from an empty player deck.
    PlayerCardsExhausted,
}

impl DefeatReason {
    /// Defeat described by a sub-state, if it is terminal.
    #[must_use]
    pub fn from_state(state: &TurnState) -> Option<Self> {
        match state {
            TurnState::DefeatTooManyOutbreaks => Some(DefeatReason::TooManyOutbreaks),
            TurnState::DefeatTooManyInfections { disease } => {
                Some(DefeatReason::TooManyInfections(disease.clone()))
            }
            TurnState::DefeatPlayerCardsExhausted => Some(DefeatReason::PlayerCardsExhausted),
            _ => None,
        }
    }
}

/// The rules engine for one game.
///
/// ## Example
///
/// ```
/// use outbreak_engine::core::{Action, GameRng, PlayerId, Settings};
/// use outbreak_engine::events::GameEvent;
/// use outbreak_engine::games::sample;
/// use outbreak_engine::rules::Game;
///
/// let players = vec![PlayerId::new(1), PlayerId::new(2)];
/// let mut game = Game::new(
///     sample::small_world(),
///     Settings::with_epidemics(4),
///     players,
///     Vec::<GameEvent>::new(),
///     GameRng::new(42),
/// );
///
/// assert!(game.setup().unwrap());
/// let outcome = game.act(PlayerId::new(1), Action::ActionPass).unwrap();
/// assert!(outcome.is_accepted());
///
/// // Not player 2's turn
/// let outcome = game.act(PlayerId::new(2), Action::ActionPass).unwrap();
/// assert!(!outcome.is_accepted());
/// ```
#[derive(Debug)]
pub struct Game<S, R> {
    definition: GameDefinition,
    settings: Settings,
    players: Vec<PlayerId>,
    sink: S,
    rng: R,
    situation: Option<Situation>,
    faulted: bool,
}

impl<S: EventSink, R: Randomness> Game<S, R> {
    /// Create an engine. Nothing happens until [`Game::setup`].
    ///
    /// `players` is the turn order.
    pub fn new(
        definition: GameDefinition,
        settings: Settings,
        players: Vec<PlayerId>,
        sink: S,
        rng: R,
    ) -> Self {
        Self {
            definition,
            settings,
            players,
            sink,
            rng,
            situation: None,
            faulted: false,
        }
    }

    /// Build the starting board and hand the first turn to the first player.
    ///
    /// Emits `initial_situation` with the freshly built board, then the
    /// initial infections, the initial deal and the first `state_change`.
    /// Returns `Ok(false)` if the initial infections already lost the game.
    /// Runs once; a second call fails with [`EngineError::AlreadySetUp`].
    pub fn setup(&mut self) -> Result<bool, EngineError> {
        if self.faulted {
            return Err(EngineError::Faulted);
        }
        if self.situation.is_some() {
            return Err(EngineError::AlreadySetUp);
        }
        let result = super::setup::run(self.parts_mut());
        self.guard(result)
    }

    /// Apply one player action.
    ///
    /// Returns `Ok(Rejected)` without touching anything when the action
    /// doesn't fit the current sub-state or player. Losing the game is an
    /// accepted action that leaves a terminal sub-state behind.
    ///
    /// An epidemic whose saved parent isn't `draw_player_cards` means the
    /// situation is corrupt: the call fails and the engine refuses all
    /// further calls.
    pub fn act(&mut self, player: PlayerId, action: Action) -> Result<ActionOutcome, EngineError> {
        if let Err(rejection) = self.check(player, action)? {
            tracing::debug!(%player, %action, %rejection, "action rejected");
            return Ok(ActionOutcome::Rejected(rejection));
        }
        tracing::debug!(%player, %action, "action accepted");

        let result = match self.session() {
            Some(mut session) => session.apply(player, action),
            None => Err(EngineError::NotSetUp),
        };
        self.guard(result)?;
        Ok(ActionOutcome::Accepted)
    }

    /// Check an action against the current sub-state without applying it.
    ///
    /// The outer `Result` reports engine misuse; the inner one says whether
    /// `act` would accept the action.
    pub fn check(
        &self,
        player: PlayerId,
        action: Action,
    ) -> Result<Result<(), Rejection>, EngineError> {
        if self.faulted {
            return Err(EngineError::Faulted);
        }
        let state = &self.situation.as_ref().ok_or(EngineError::NotSetUp)?.state;

        let wrong_state = Rejection::WrongState {
            required: action.required_state(),
            actual: state.name(),
        };
        if state.name() != action.required_state() {
            return Ok(Err(wrong_state));
        }
        match state.acting_player() {
            Some(expected) if expected == player => Ok(Ok(())),
            Some(expected) => Ok(Err(Rejection::WrongPlayer {
                expected,
                actual: player,
            })),
            None => Ok(Err(wrong_state)),
        }
    }

    /// Actions `player` may take right now.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|&action| matches!(self.check(player, action), Ok(Ok(()))))
            .collect()
    }

    // === Queries ===

    /// The live situation, once setup has run.
    #[must_use]
    pub fn situation(&self) -> Option<&Situation> {
        self.situation.as_ref()
    }

    /// The active sub-state, once setup has run.
    #[must_use]
    pub fn state(&self) -> Option<&TurnState> {
        self.situation.as_ref().map(|s| &s.state)
    }

    /// Why the game was lost, if it was.
    #[must_use]
    pub fn defeat(&self) -> Option<DefeatReason> {
        self.state().and_then(DefeatReason::from_state)
    }

    /// Check if the game reached a terminal sub-state.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state().is_some_and(TurnState::is_terminal)
    }

    /// Check if a consistency fault stopped the engine.
    #[must_use]
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// The definition as supplied (settings not applied).
    #[must_use]
    pub fn definition(&self) -> &GameDefinition {
        &self.definition
    }

    /// The session settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The event sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The event sink, mutably (e.g. to drain a log between actions).
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tear down the engine, keeping the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    // === Internals ===

    pub(crate) fn session(&mut self) -> Option<Session<'_, S, R>> {
        let situation = self.situation.as_mut()?;
        Some(Session {
            situation,
            sink: &mut self.sink,
            rng: &mut self.rng,
        })
    }

    /// Stop the engine on errors that leave the situation untrustworthy.
    pub(crate) fn guard<T>(&mut self, result: Result<T, EngineError>) -> Result<T, EngineError> {
        if let Err(err) = &result {
            if err.is_fatal() {
                tracing::warn!(error = %err, "engine faulted");
                self.faulted = true;
            }
        }
        result
    }

    pub(crate) fn parts_mut(&mut self) -> SetupParts<'_, S, R> {
        SetupParts {
            definition: &self.definition,
            settings: &self.settings,
            players: &self.players,
            sink: &mut self.sink,
            rng: &mut self.rng,
            situation: &mut self.situation,
        }
    }
}

/// Split borrow of a `Game` used by setup.
pub(crate) struct SetupParts<'a, S, R> {
    pub(crate) definition: &'a GameDefinition,
    pub(crate) settings: &'a Settings,
    pub(crate) players: &'a [PlayerId],
    pub(crate) sink: &'a mut S,
    pub(crate) rng: &'a mut R,
    pub(crate) situation: &'a mut Option<Situation>,
}

impl<S: EventSink, R: Randomness> Session<'_, S, R> {
    /// Apply an action that already passed [`Game::check`].
    fn apply(&mut self, player: PlayerId, action: Action) -> Result<(), EngineError> {
        match action {
            Action::ActionPass => {
                self.pass(player);
                Ok(())
            }
            Action::DrawPlayerCard => self.draw_for_turn(player),
            Action::IncreaseInfectionIntensity => self.resolve_epidemic(player),
            Action::DrawInfectionCard => self.infect_for_turn(player),
        }
    }

    fn pass(&mut self, player: PlayerId) {
        if let TurnState::PlayerActions {
            actions_remaining, ..
        } = &mut self.situation.state
        {
            *actions_remaining = actions_remaining.saturating_sub(1);
            if *actions_remaining == 0 {
                self.set_state(TurnState::draw_player_cards(player));
                return;
            }
        }
        self.emit_state_change();
    }

    fn draw_for_turn(&mut self, player: PlayerId) -> Result<(), EngineError> {
        if !self.draw_player_card(player)? {
            return Ok(());
        }
        match self.situation.state {
            TurnState::DrawPlayerCards {
                draws_remaining: 0, ..
            } => self.start_infection_phase(player),
            TurnState::DrawPlayerCards { .. } => {
                self.emit_state_change();
                Ok(())
            }
            // Epidemic interrupt already announced
            _ => Ok(()),
        }
    }

    fn resolve_epidemic(&mut self, player: PlayerId) -> Result<(), EngineError> {
        let parent = match &self.situation.state {
            TurnState::Epidemic { parent } => (**parent).clone(),
            other => {
                return Err(EngineError::CorruptEpidemicParent {
                    parent: other.name(),
                })
            }
        };
        if !matches!(parent, TurnState::DrawPlayerCards { .. }) {
            return Err(EngineError::CorruptEpidemicParent {
                parent: parent.name(),
            });
        }

        let situation = &mut *self.situation;
        let cards = restack_infection_discard(
            &mut situation.infection_cards_draw,
            &mut situation.infection_cards_discard,
            &mut *self.rng,
        );
        self.emit(GameEvent::InfectionCardsRestack { cards });

        match parent {
            TurnState::DrawPlayerCards {
                draws_remaining, ..
            } if draws_remaining > 0 => {
                self.set_state(parent);
                Ok(())
            }
            _ => self.start_infection_phase(player),
        }
    }

    fn infect_for_turn(&mut self, player: PlayerId) -> Result<(), EngineError> {
        if !self.draw_infection(1, DrawEnd::Front)? {
            return Ok(());
        }
        if let TurnState::DrawInfectionCards {
            draws_remaining, ..
        } = &mut self.situation.state
        {
            *draws_remaining = draws_remaining.saturating_sub(1);
            if *draws_remaining == 0 {
                return self.advance_turn(player);
            }
        }
        self.emit_state_change();
        Ok(())
    }
}
