use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dungeon::DungeonGenerator;
use dungeon::constants::TILE_SIZE;
use soul_guardian::{FrameInput, GameConfig, GameRng, MenuCommand, Simulation};

fn bench_dungeon_generation(c: &mut Criterion) {
    let generator = DungeonGenerator::default();
    let mut rng = GameRng::new(42);

    c.bench_function("generate_dungeon", |b| {
        b.iter(|| black_box(generator.generate(&mut rng)))
    });

    c.bench_function("build_walls", |b| {
        let dungeon = generator.generate(&mut GameRng::new(7));
        b.iter(|| black_box(dungeon.build_walls(TILE_SIZE)))
    });
}

fn bench_frame(c: &mut Criterion) {
    let mut simulation = Simulation::new(GameConfig::default(), GameRng::new(42));
    simulation.step(FrameInput {
        command: Some(MenuCommand::Start),
        ..Default::default()
    });

    c.bench_function("simulate_frame", |b| {
        b.iter(|| {
            simulation.step(black_box(FrameInput::default()));
            if simulation.state() != soul_guardian::GameState::Playing {
                simulation.step(FrameInput {
                    command: Some(MenuCommand::Restart),
                    ..Default::default()
                });
            }
        })
    });
}

criterion_group!(benches, bench_dungeon_generation, bench_frame);
criterion_main!(benches);
