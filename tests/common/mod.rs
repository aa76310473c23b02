//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use outbreak_engine::core::{
    Action, GameDefinition, IdentityRng, PlayerId, Randomness, Settings, TurnState,
};
use outbreak_engine::events::GameEvent;
use outbreak_engine::games::sample;
use outbreak_engine::rules::Game;

pub const P1: PlayerId = PlayerId::new(10);
pub const P2: PlayerId = PlayerId::new(20);

/// Two-player sample game with no shuffling.
///
/// With two epidemics the player deck comes out as the eight dealt cards,
/// then `E, Lima, Mexico City, Los Angeles, E, Sao Paulo, Airlift, Forecast`.
pub fn identity_game(epidemics: usize) -> Game<Vec<GameEvent>, IdentityRng> {
    Game::new(
        sample::small_world(),
        Settings::with_epidemics(epidemics),
        vec![P1, P2],
        Vec::new(),
        IdentityRng,
    )
}

/// `IdentityRng` except that each epidemic lands one card into its chunk
/// instead of at the front.
#[derive(Clone, Copy, Debug, Default)]
pub struct LateCutRng;

impl Randomness for LateCutRng {
    fn sample<T: Clone>(&mut self, population: &[T], k: usize) -> Vec<T> {
        IdentityRng.sample(population, k)
    }

    fn shuffle<T>(&mut self, _items: &mut [T]) {}

    fn rand_int(&mut self, low: usize, high: usize) -> usize {
        if low + 1 < high {
            low + 1
        } else {
            low
        }
    }
}

pub fn game_with<R: Randomness>(
    definition: GameDefinition,
    players: Vec<PlayerId>,
    epidemics: usize,
    rng: R,
) -> Game<Vec<GameEvent>, R> {
    Game::new(
        definition,
        Settings::with_epidemics(epidemics),
        players,
        Vec::new(),
        rng,
    )
}

/// Take and return everything emitted so far.
pub fn drain<R: Randomness>(game: &mut Game<Vec<GameEvent>, R>) -> Vec<GameEvent> {
    std::mem::take(game.sink_mut())
}

pub fn act<R: Randomness>(game: &mut Game<Vec<GameEvent>, R>, player: PlayerId, action: Action) {
    let outcome = game.act(player, action).unwrap();
    assert!(outcome.is_accepted(), "{action} by {player} was rejected: {outcome:?}");
}

/// Spend all four actions.
pub fn pass_actions<R: Randomness>(game: &mut Game<Vec<GameEvent>, R>, player: PlayerId) {
    for _ in 0..4 {
        act(game, player, Action::ActionPass);
    }
}

/// Take the one legal action for whoever is due. Returns false once the
/// game is over.
pub fn step<R: Randomness>(game: &mut Game<Vec<GameEvent>, R>) -> bool {
    let Some(player) = game.state().and_then(TurnState::acting_player) else {
        return false;
    };
    let action = game.legal_actions(player)[0];
    act(game, player, action);
    true
}

/// Play until the game is lost or `max_steps` actions have been taken.
pub fn play_out<R: Randomness>(game: &mut Game<Vec<GameEvent>, R>, max_steps: usize) -> usize {
    let mut steps = 0;
    while steps < max_steps && step(game) {
        steps += 1;
    }
    steps
}

pub fn infect(location: &str, disease: &str) -> GameEvent {
    GameEvent::Infect {
        location: location.into(),
        disease: disease.into(),
    }
}

pub fn outbreak(location: &str, disease: &str) -> GameEvent {
    GameEvent::Outbreak {
        location: location.into(),
        disease: disease.into(),
    }
}
