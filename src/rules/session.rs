//! Borrowed view of the engine's mutable parts.
//!
//! `Session` bundles the situation, sink and randomness for the duration of
//! one `setup` or `act` call so the infection engine and the turn state
//! machine can share helpers without fighting over `&mut Game`.

use crate::cards::PlayerCard;
use crate::core::{EngineError, PlayerId, Randomness, Situation, TurnState};
use crate::events::{EventSink, GameEvent};

pub(crate) struct Session<'a, S, R> {
    pub(crate) situation: &'a mut Situation,
    pub(crate) sink: &'a mut S,
    pub(crate) rng: &'a mut R,
}

impl<S: EventSink, R: Randomness> Session<'_, S, R> {
    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.sink.emit(event);
    }

    /// Announce the current sub-state.
    pub(crate) fn emit_state_change(&mut self) {
        let event = GameEvent::state_change(&self.situation.state);
        self.emit(event);
    }

    /// Replace the sub-state and announce it.
    pub(crate) fn set_state(&mut self, state: TurnState) {
        tracing::debug!(from = self.situation.state.name(), to = %state, "state change");
        if state.is_terminal() {
            tracing::info!(state = state.name(), outbreaks = self.situation.outbreak_count, "game lost");
        }
        self.situation.state = state;
        self.emit_state_change();
    }

    /// Enter the infection phase for `player` at the current rate.
    pub(crate) fn start_infection_phase(&mut self, player: PlayerId) -> Result<(), EngineError> {
        let rate = self.situation.infection_rate();
        if rate == 0 {
            return self.advance_turn(player);
        }
        self.set_state(TurnState::DrawInfectionCards {
            player,
            draws_remaining: rate,
        });
        Ok(())
    }

    /// Hand the turn to whoever follows `player`.
    pub(crate) fn advance_turn(&mut self, player: PlayerId) -> Result<(), EngineError> {
        let next = self
            .situation
            .next_player(player)
            .ok_or(EngineError::UnknownPlayer(player))?;
        self.set_state(TurnState::player_actions(next));
        Ok(())
    }

    /// Draw the top player card for `player`.
    ///
    /// Counts the draw against an active `draw_player_cards` state before
    /// resolving the card, so an epidemic saves the already-decremented
    /// state as its parent. Returns `Ok(false)` when the draw lost the game.
    pub(crate) fn draw_player_card(&mut self, player: PlayerId) -> Result<bool, EngineError> {
        let Some(card) = self.situation.player_cards_draw.pop_front() else {
            self.set_state(TurnState::DefeatPlayerCardsExhausted);
            return Ok(false);
        };

        self.emit(GameEvent::DrawPlayerCard {
            player,
            card: card.clone(),
        });

        if let TurnState::DrawPlayerCards { draws_remaining, .. } = &mut self.situation.state {
            *draws_remaining = draws_remaining.saturating_sub(1);
        }

        match card {
            PlayerCard::Epidemic => {
                self.situation.player_cards_discard.push_front(card);
                self.handle_epidemic()
            }
            card => {
                self.situation
                    .player_mut(player)
                    .ok_or(EngineError::UnknownPlayer(player))?
                    .hand
                    .push(card);
                Ok(true)
            }
        }
    }
}
