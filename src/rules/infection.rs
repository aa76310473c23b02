//! Infection engine: cube placement, outbreak chains, epidemics.
//!
//! Outbreaks resolve breadth-first through an explicit FIFO queue. A
//! location that outbreaks is marked for the rest of the call, so chains
//! through cycles of neighbours terminate and no location outbreaks twice
//! per infection.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::session::Session;
use crate::core::{EngineError, Randomness, TurnState};
use crate::decks::{draw_infection_card, DrawEnd};
use crate::events::{EventSink, GameEvent};

/// Cubes an epidemic places from the bottom infection card.
pub const EPIDEMIC_CUBES: u32 = 3;

impl<S: EventSink, R: Randomness> Session<'_, S, R> {
    /// Place `count` cubes of `disease` on `location`, resolving outbreaks.
    ///
    /// Returns `Ok(false)` if the infection lost the game; the terminal
    /// state is already set and announced by then.
    pub(crate) fn infect(
        &mut self,
        location: &str,
        disease: &str,
        count: u32,
    ) -> Result<bool, EngineError> {
        let mut queue: VecDeque<String> = (0..count).map(|_| location.to_string()).collect();
        let mut outbroke: FxHashSet<String> = FxHashSet::default();

        while let Some(name) = queue.pop_front() {
            if outbroke.contains(&name) {
                continue;
            }

            let target = self
                .situation
                .location(&name)
                .ok_or_else(|| EngineError::UnknownLocation(name.clone()))?;

            if target.is_saturated(disease) {
                let neighbours = target.adjacent.clone();
                self.emit(GameEvent::Outbreak {
                    location: name.clone(),
                    disease: disease.to_string(),
                });
                self.situation.outbreak_count += 1;
                tracing::debug!(
                    location = %name,
                    disease,
                    outbreaks = self.situation.outbreak_count,
                    "outbreak"
                );

                if self.situation.outbreak_count > self.situation.max_outbreaks {
                    self.set_state(TurnState::DefeatTooManyOutbreaks);
                    return Ok(false);
                }

                queue.extend(neighbours);
                outbroke.insert(name);
                continue;
            }

            let supply = self
                .situation
                .disease_mut(disease)
                .ok_or_else(|| EngineError::UnknownDisease(disease.to_string()))?;
            if !supply.take_cube() {
                self.set_state(TurnState::DefeatTooManyInfections {
                    disease: disease.to_string(),
                });
                return Ok(false);
            }

            if let Some(target) = self.situation.location_mut(&name) {
                target.add_cube(disease);
            }
            tracing::trace!(location = %name, disease, "infect");
            self.emit(GameEvent::Infect {
                location: name,
                disease: disease.to_string(),
            });
        }

        Ok(true)
    }

    /// Draw one infection card from `end`, discard it, and place `cubes`
    /// cubes of its location's disease there.
    ///
    /// Turn play passes 1, epidemics 3, setup the ring's cube count.
    pub(crate) fn draw_infection(&mut self, cubes: u32, end: DrawEnd) -> Result<bool, EngineError> {
        let situation = &mut *self.situation;
        let card = draw_infection_card(
            &mut situation.infection_cards_draw,
            &mut situation.infection_cards_discard,
            end,
        )
        .ok_or(EngineError::InfectionDeckExhausted)?;

        self.emit(GameEvent::DrawAndDiscardInfectionCard { card: card.clone() });

        let disease = self
            .situation
            .location(&card.location)
            .ok_or_else(|| EngineError::UnknownLocation(card.location.clone()))?
            .disease
            .clone();

        self.infect(&card.location, &disease, cubes)
    }

    /// Resolve an epidemic card.
    ///
    /// Moves the infection-rate marker, infects the bottom infection card
    /// with three cubes and, unless that lost the game, interrupts the
    /// current sub-state with `epidemic`.
    pub(crate) fn handle_epidemic(&mut self) -> Result<bool, EngineError> {
        let situation = &mut *self.situation;
        if situation.infection_rate_index + 1 < situation.infection_rate_levels.len() {
            situation.infection_rate_index += 1;
        }
        let event = GameEvent::InfectionRateIncreased {
            infection_rate_index: situation.infection_rate_index,
            rate: situation.infection_rate(),
        };
        self.emit(event);

        if !self.draw_infection(EPIDEMIC_CUBES, DrawEnd::Back)? {
            return Ok(false);
        }

        let parent = std::mem::replace(&mut self.situation.state, TurnState::Setup);
        self.set_state(TurnState::Epidemic {
            parent: Box::new(parent),
        });
        Ok(true)
    }
}
