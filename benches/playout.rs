//! Benchmarks for setting up and playing out complete games.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use outbreak_engine::core::{GameRng, PlayerId, Settings, TurnState};
use outbreak_engine::events::{EventSink, GameEvent};
use outbreak_engine::games::sample;
use outbreak_engine::rules::Game;

/// Sink that only counts.
struct Counter(usize);

impl EventSink for Counter {
    fn emit(&mut self, _event: GameEvent) {
        self.0 += 1;
    }
}

fn new_game(seed: u64, players: u32) -> Game<Counter, GameRng> {
    Game::new(
        sample::small_world(),
        Settings::with_epidemics(4),
        (1..=players).map(PlayerId::new).collect(),
        Counter(0),
        GameRng::new(seed),
    )
}

/// Take the one legal action until the game is lost.
fn play_out(game: &mut Game<Counter, GameRng>) -> usize {
    let mut steps = 0;
    while let Some(player) = game.state().and_then(TurnState::acting_player) {
        let Some(&action) = game.legal_actions(player).first() else {
            break;
        };
        if game.act(player, action).is_err() {
            break;
        }
        steps += 1;
    }
    steps
}

fn bench_setup(c: &mut Criterion) {
    c.bench_function("setup_2p", |b| {
        b.iter_batched(
            || new_game(42, 2),
            |mut game| black_box(game.setup()),
            BatchSize::SmallInput,
        );
    });
}

fn bench_playout(c: &mut Criterion) {
    for players in [2, 4] {
        c.bench_function(&format!("playout_{players}p"), |b| {
            b.iter_batched(
                || {
                    let mut game = new_game(42, players);
                    let _ = game.setup();
                    game
                },
                |mut game| black_box(play_out(&mut game)),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_playout_batch(c: &mut Criterion) {
    c.bench_function("100_games_sequential", |b| {
        b.iter(|| {
            let mut events = 0;
            for seed in 0..100u64 {
                let mut game = new_game(seed, 3);
                let _ = game.setup();
                play_out(&mut game);
                events += game.into_sink().0;
            }
            black_box(events)
        });
    });
}

criterion_group!(benches, bench_setup, bench_playout, bench_playout_batch);
criterion_main!(benches);
