use std::time::Duration;

use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use gridsnake::{Direction, GameSettings, GameState, RuleSet, SessionRng};

fn run_ticks(rule_set: RuleSet, ticks: u64) {
    let settings = GameSettings {
        rule_set,
        ..GameSettings::default()
    };
    let mut rng = SessionRng::new(7);
    let mut state = GameState::new(settings, &mut rng);

    // Circle in place so the run never ends on a wall of body segments.
    let directions = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    for i in 0..ticks {
        if state.is_game_over() {
            state.restart(&mut rng);
        }
        state.set_direction(directions[(i % 4) as usize]);
        state.tick(&mut rng);
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("arcade_1000_ticks", |b| {
        b.iter(|| run_ticks(RuleSet::Arcade, 1000))
    });

    group.bench_function("classic_1000_ticks", |b| {
        b.iter(|| run_ticks(RuleSet::Classic, 1000))
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
