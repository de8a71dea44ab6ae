use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memory::core::{deal, DealRng, GameConfig, NullPresenter, RoundController, Session};
use tui_memory::types::{CardId, GameAction, TICK_MS};

fn bench_deal(c: &mut Criterion) {
    let pool = GameConfig::default().symbols.symbols();
    let mut rng = DealRng::new(12345);

    c.bench_function("deal_8_pairs", |b| {
        b.iter(|| deal(black_box(&pool), black_box(8), &mut rng))
    });
}

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("solve_hard_round", |b| {
        b.iter(|| {
            let config = GameConfig {
                settle_delay_ms: 0,
                ..GameConfig::default()
            };
            let mut round = RoundController::new(config, DealRng::new(7)).unwrap();
            round.apply_action(GameAction::CycleDifficulty);
            round.apply_action(GameAction::CycleDifficulty);
            let mut session = Session::new(round);
            session.apply(GameAction::Start);

            // Naive player: flip left to right, every mismatch settles instantly.
            let len = session.controller().cards().len();
            for i in 0..len {
                for j in (i + 1)..len {
                    session.apply(GameAction::Flip(CardId(i)));
                    session.apply(GameAction::Flip(CardId(j)));
                }
                session.advance(TICK_MS);
            }
            session.pump(&mut NullPresenter);
            black_box(session.controller().score())
        })
    });
}

criterion_group!(benches, bench_deal, bench_full_round);
criterion_main!(benches);
