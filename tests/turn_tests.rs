//! Turn state machine tests.
//!
//! Every game here runs on the sample board with `IdentityRng`, so the
//! deck order and every infection are known in advance.

mod common;

use common::*;
use outbreak_engine::cards::{InfectionCard, PlayerCard};
use outbreak_engine::core::{Action, ActionOutcome, IdentityRng, PlayerId, Rejection, TurnState};
use outbreak_engine::events::GameEvent;
use outbreak_engine::games::{sample, BoardBuilder};
use outbreak_engine::rules::{DefeatReason, Game};

fn state_change(state: TurnState) -> GameEvent {
    GameEvent::StateChange { state }
}

/// Each pass announces the new action count.
#[test]
fn test_pass_emits_one_state_change() {
    let mut game = identity_game(2);
    game.setup().unwrap();
    drain(&mut game);

    act(&mut game, P1, Action::ActionPass);
    assert_eq!(
        drain(&mut game),
        vec![state_change(TurnState::PlayerActions {
            player: P1,
            actions_remaining: 3
        })]
    );
}

/// The fourth pass moves on to drawing player cards.
#[test]
fn test_fourth_pass_moves_to_player_draws() {
    let mut game = identity_game(2);
    game.setup().unwrap();
    pass_actions(&mut game, P1);

    assert_eq!(
        game.state(),
        Some(&TurnState::DrawPlayerCards {
            player: P1,
            draws_remaining: 2
        })
    );
    assert_eq!(game.legal_actions(P1), vec![Action::DrawPlayerCard]);
}

/// Rejected actions change nothing and emit nothing.
#[test]
fn test_rejection_leaves_no_trace() {
    let mut game = identity_game(2);
    game.setup().unwrap();
    drain(&mut game);
    let before = game.situation().cloned();

    let outcome = game.act(P2, Action::ActionPass).unwrap();
    assert_eq!(
        outcome,
        ActionOutcome::Rejected(Rejection::WrongPlayer {
            expected: P1,
            actual: P2
        })
    );

    let outcome = game.act(P1, Action::DrawPlayerCard).unwrap();
    assert_eq!(
        outcome,
        ActionOutcome::Rejected(Rejection::WrongState {
            required: "draw_player_cards",
            actual: "player_actions"
        })
    );

    assert_eq!(game.situation().cloned(), before);
    assert!(game.sink().is_empty());
}

/// Ids outside the game are rejected.
#[test]
fn test_stranger_is_rejected() {
    let mut game = identity_game(2);
    game.setup().unwrap();
    let outcome = game.act(PlayerId::new(99), Action::ActionPass).unwrap();
    assert!(!outcome.is_accepted());
}

/// An epidemic mid-draw interrupts and then resumes the draw.
#[test]
fn test_epidemic_interrupts_and_resumes_draw() {
    let mut game = identity_game(2);
    game.setup().unwrap();
    pass_actions(&mut game, P1);
    drain(&mut game);

    // First card after the deal is an epidemic
    act(&mut game, P1, Action::DrawPlayerCard);
    let parent = TurnState::DrawPlayerCards {
        player: P1,
        draws_remaining: 1,
    };
    assert_eq!(
        drain(&mut game),
        vec![
            GameEvent::DrawPlayerCard {
                player: P1,
                card: PlayerCard::Epidemic
            },
            GameEvent::InfectionRateIncreased {
                infection_rate_index: 1,
                rate: 2
            },
            GameEvent::DrawAndDiscardInfectionCard {
                card: InfectionCard::new("Sao Paulo")
            },
            infect("Sao Paulo", "yellow"),
            infect("Sao Paulo", "yellow"),
            infect("Sao Paulo", "yellow"),
            state_change(TurnState::Epidemic {
                parent: Box::new(parent.clone())
            }),
        ]
    );
    assert_eq!(game.legal_actions(P1), vec![Action::IncreaseInfectionIntensity]);
    assert!(!game.act(P2, Action::IncreaseInfectionIntensity).unwrap().is_accepted());

    let situation = game.situation().unwrap();
    assert_eq!(situation.player_cards_discard[0], PlayerCard::Epidemic);
    assert_eq!(situation.cubes("Sao Paulo", "yellow"), 3);

    act(&mut game, P1, Action::IncreaseInfectionIntensity);
    let restacked: Vec<InfectionCard> = ["Sao Paulo", "Montreal", "Chicago", "Atlanta"]
        .into_iter()
        .map(InfectionCard::new)
        .collect();
    assert_eq!(
        drain(&mut game),
        vec![
            GameEvent::InfectionCardsRestack {
                cards: restacked.clone()
            },
            state_change(parent),
        ]
    );

    let situation = game.situation().unwrap();
    assert!(situation.infection_cards_discard.is_empty());
    assert_eq!(situation.infection_cards_draw.len(), 12);
    assert_eq!(
        situation.infection_cards_draw.iter().take(4).cloned().collect::<Vec<_>>(),
        restacked
    );

    act(&mut game, P1, Action::DrawPlayerCard);
    assert_eq!(
        drain(&mut game),
        vec![
            GameEvent::DrawPlayerCard {
                player: P1,
                card: PlayerCard::location_card("Lima")
            },
            state_change(TurnState::DrawInfectionCards {
                player: P1,
                draws_remaining: 2
            }),
        ]
    );
}

/// An epidemic on the last draw resumes straight into the infection phase.
#[test]
fn test_epidemic_on_last_draw_enters_infection_phase() {
    // One epidemic, cut one card in: Lima, then the epidemic
    let mut game = game_with(sample::small_world(), vec![P1, P2], 1, LateCutRng);
    game.setup().unwrap();
    pass_actions(&mut game, P1);

    act(&mut game, P1, Action::DrawPlayerCard);
    act(&mut game, P1, Action::DrawPlayerCard);
    assert_eq!(
        game.state(),
        Some(&TurnState::Epidemic {
            parent: Box::new(TurnState::DrawPlayerCards {
                player: P1,
                draws_remaining: 0
            })
        })
    );
    drain(&mut game);

    act(&mut game, P1, Action::IncreaseInfectionIntensity);
    let events = drain(&mut game);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type(), "infection_cards_restack");
    assert_eq!(
        events[1],
        state_change(TurnState::DrawInfectionCards {
            player: P1,
            draws_remaining: 2
        })
    );
    assert_eq!(game.legal_actions(P1), vec![Action::DrawInfectionCard]);
}

/// With an infection rate of zero the turn passes without infecting.
#[test]
fn test_zero_infection_rate_skips_infection_phase() {
    let definition = BoardBuilder::new()
        .disease("red", 24)
        .city("A", "red")
        .city("B", "red")
        .city("C", "red")
        .city("D", "red")
        .connect("A", "B")
        .connect("C", "D")
        .initial_infections(vec![1])
        .hand_size(2, 1)
        .infection_rates(&[0])
        .build()
        .unwrap();
    let mut game = game_with(definition, vec![P1, P2], 0, IdentityRng);
    game.setup().unwrap();
    pass_actions(&mut game, P1);
    act(&mut game, P1, Action::DrawPlayerCard);
    drain(&mut game);

    act(&mut game, P1, Action::DrawPlayerCard);
    assert_eq!(
        drain(&mut game),
        vec![
            GameEvent::DrawPlayerCard {
                player: P1,
                card: PlayerCard::location_card("D")
            },
            state_change(TurnState::PlayerActions {
                player: P2,
                actions_remaining: 4
            }),
        ]
    );
    assert_eq!(game.situation().unwrap().infection_cards_discard.len(), 1);
}

/// Plays player one's first turn up to the infection phase.
fn to_first_infection_phase() -> Game<Vec<GameEvent>, IdentityRng> {
    let mut game = identity_game(2);
    game.setup().unwrap();
    pass_actions(&mut game, P1);
    act(&mut game, P1, Action::DrawPlayerCard);
    act(&mut game, P1, Action::IncreaseInfectionIntensity);
    act(&mut game, P1, Action::DrawPlayerCard);
    drain(&mut game);
    game
}

/// The last infection draw hands the turn to the next player.
#[test]
fn test_infection_phase_hands_turn_on() {
    let mut game = to_first_infection_phase();

    act(&mut game, P1, Action::DrawInfectionCard);
    assert_eq!(
        drain(&mut game),
        vec![
            GameEvent::DrawAndDiscardInfectionCard {
                card: InfectionCard::new("Sao Paulo")
            },
            outbreak("Sao Paulo", "yellow"),
            infect("Madrid", "yellow"),
            infect("Bogota", "yellow"),
            state_change(TurnState::DrawInfectionCards {
                player: P1,
                draws_remaining: 1
            }),
        ]
    );

    act(&mut game, P1, Action::DrawInfectionCard);
    assert_eq!(
        drain(&mut game),
        vec![
            GameEvent::DrawAndDiscardInfectionCard {
                card: InfectionCard::new("Montreal")
            },
            infect("Montreal", "blue"),
            state_change(TurnState::player_actions(P2)),
        ]
    );

    let situation = game.situation().unwrap();
    assert_eq!(situation.outbreak_count, 1);
    assert_eq!(situation.cubes("Montreal", "blue"), 2);
    assert_eq!(situation.disease("yellow").unwrap().cubes, 19);
}

/// A draw that leaves draws remaining still announces the state.
#[test]
fn test_partial_player_draw_announces_state() {
    let mut game = to_first_infection_phase();
    act(&mut game, P1, Action::DrawInfectionCard);
    act(&mut game, P1, Action::DrawInfectionCard);
    pass_actions(&mut game, P2);
    drain(&mut game);

    act(&mut game, P2, Action::DrawPlayerCard);
    assert_eq!(
        drain(&mut game),
        vec![
            GameEvent::DrawPlayerCard {
                player: P2,
                card: PlayerCard::location_card("Mexico City")
            },
            state_change(TurnState::DrawPlayerCards {
                player: P2,
                draws_remaining: 1
            }),
        ]
    );
}

/// Turn order wraps back to the first player.
#[test]
fn test_turn_order_wraps() {
    let mut game = to_first_infection_phase();
    act(&mut game, P1, Action::DrawInfectionCard);
    act(&mut game, P1, Action::DrawInfectionCard);

    pass_actions(&mut game, P2);
    act(&mut game, P2, Action::DrawPlayerCard);
    act(&mut game, P2, Action::DrawPlayerCard);
    // Chicago tips to three, then Atlanta sets off Chicago
    act(&mut game, P2, Action::DrawInfectionCard);
    act(&mut game, P2, Action::DrawInfectionCard);

    assert_eq!(game.state(), Some(&TurnState::player_actions(P1)));
    let situation = game.situation().unwrap();
    assert_eq!(situation.outbreak_count, 3);
    assert_eq!(situation.cubes("Montreal", "blue"), 3);
    assert_eq!(situation.player(P2).unwrap().hand.len(), 6);
}

/// A finished game ends on its terminal state and then rejects everything.
#[test]
fn test_game_ends_in_terminal_state() {
    let mut game = identity_game(2);
    game.setup().unwrap();
    play_out(&mut game, 500);

    assert!(game.is_over());
    assert!(game.defeat().is_some());
    let last = game.sink().last().and_then(GameEvent::as_state_change);
    assert_eq!(last, game.state());

    drain(&mut game);
    for player in [P1, P2] {
        assert!(game.legal_actions(player).is_empty());
        for action in Action::ALL {
            assert!(!game.act(player, action).unwrap().is_accepted());
        }
    }
    assert!(game.sink().is_empty());
}

/// Drawing from an empty player deck loses.
#[test]
fn test_player_deck_exhaustion_is_a_defeat() {
    // Without epidemics and with a huge outbreak limit only the deck can end it
    let mut definition = sample::small_world();
    definition.max_outbreaks = 1000;
    definition.diseases.iter_mut().for_each(|d| d.cubes = 1000);
    let mut game = game_with(definition, vec![P1, P2], 0, IdentityRng);
    game.setup().unwrap();
    play_out(&mut game, 500);

    assert_eq!(game.defeat(), Some(DefeatReason::PlayerCardsExhausted));
    let situation = game.situation().unwrap();
    assert!(situation.player_cards_draw.is_empty());
    let dealt: usize = situation.players.iter().map(|p| p.hand.len()).sum();
    assert_eq!(dealt, 14);
}
