//! One-shot construction of the starting board.

use super::engine::SetupParts;
use super::session::Session;
use crate::board::ResearchCenter;
use crate::cards::InfectionCard;
use crate::core::{
    DefinitionError, EngineError, Player, Randomness, Situation, TurnState,
};
use crate::decks::{build_player_deck, DrawEnd};
use crate::events::{EventSink, GameEvent};

/// Build the board, announce it, infect, deal, and start the first turn.
pub(crate) fn run<S: EventSink, R: Randomness>(
    parts: SetupParts<'_, S, R>,
) -> Result<bool, EngineError> {
    let SetupParts {
        definition,
        settings,
        players,
        sink,
        rng,
        situation: slot,
    } = parts;

    let definition = definition.merged(settings);
    definition.validate(players)?;
    let hand_size = definition
        .hand_size(players.len())
        .ok_or(DefinitionError::MissingHandSize(players.len()))?;

    let mut situation = Situation::from_definition(&definition);

    let role_names: Vec<String> = definition.roles.iter().map(|r| r.name.clone()).collect();
    let roles = rng.sample(&role_names, players.len());
    situation.players = players
        .iter()
        .enumerate()
        .map(|(i, &id)| Player::new(id, roles.get(i).cloned(), &definition.starting_location))
        .collect();

    if !situation.has_research_center(&definition.starting_location) {
        situation.research_centers.push(ResearchCenter {
            location: definition.starting_location.clone(),
        });
        situation.research_centers_available = situation.research_centers_available.saturating_sub(1);
    }

    let mut infection_cards: Vec<InfectionCard> = definition.infection_cards_draw.clone();
    rng.shuffle(&mut infection_cards);
    situation.infection_cards_draw = infection_cards.into_iter().collect();

    let (player_cards, _) = build_player_deck(
        &definition.player_cards_draw,
        hand_size * players.len(),
        settings.number_of_epidemics,
        &mut *rng,
    );
    situation.player_cards_draw = player_cards;
    situation.state = TurnState::Setup;

    sink.emit(GameEvent::InitialSituation {
        situation: Box::new(situation.clone()),
    });

    let mut session = Session {
        situation: slot.insert(situation),
        sink,
        rng,
    };

    for &cubes in &definition.initial_infections {
        if !session.draw_infection(cubes, DrawEnd::Front)? {
            return Ok(false);
        }
    }

    for _ in 0..hand_size {
        for &player in players {
            if !session.draw_player_card(player)? {
                return Ok(false);
            }
        }
    }

    let first = players[0];
    session.set_state(TurnState::player_actions(first));
    tracing::info!(
        players = players.len(),
        epidemics = settings.number_of_epidemics,
        first = %first,
        "setup complete"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::core::{GameRng, IdentityRng, PlayerId, Settings, TurnState};
    use crate::core::EngineError;
    use crate::events::GameEvent;
    use crate::games::sample;
    use crate::rules::Game;

    fn players(n: u32) -> Vec<PlayerId> {
        (1..=n).map(PlayerId::new).collect()
    }

    #[test]
    fn test_setup_runs_once() {
        let mut game = Game::new(
            sample::small_world(),
            Settings::with_epidemics(4),
            players(2),
            Vec::<GameEvent>::new(),
            GameRng::new(1),
        );
        assert!(game.setup().unwrap());
        assert!(matches!(game.setup(), Err(EngineError::AlreadySetUp)));
    }

    #[test]
    fn test_first_player_starts() {
        let mut game = Game::new(
            sample::small_world(),
            Settings::with_epidemics(4),
            vec![PlayerId::new(7), PlayerId::new(3)],
            Vec::<GameEvent>::new(),
            IdentityRng,
        );
        game.setup().unwrap();
        assert_eq!(
            game.state(),
            Some(&TurnState::player_actions(PlayerId::new(7)))
        );
    }

    #[test]
    fn test_invalid_definition_is_reported() {
        let mut game = Game::new(
            sample::small_world(),
            Settings::with_epidemics(4),
            players(6),
            Vec::<GameEvent>::new(),
            IdentityRng,
        );
        assert!(matches!(game.setup(), Err(EngineError::Definition(_))));
        assert!(game.situation().is_none());
        assert!(game.sink().is_empty());
    }
}
