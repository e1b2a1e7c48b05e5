use fireworks_parallel::physic_engine::physic_engine_fireworks::PhysicEngineTestHelpers;
use fireworks_parallel::physic_engine::{DrawCommand, PhysicConfigBuilder, RocketState};
use fireworks_parallel::{PhysicEngine, PhysicEngineFireworks, Schedule};

mod helpers;
use helpers::{chunk, seeded_config};

/// Déroule `ticks` ticks et capture le rendu toutes les 25 frames.
fn run_and_render(engine: &mut PhysicEngineFireworks, ticks: usize) -> Vec<Vec<DrawCommand>> {
    let mut frames = Vec::new();
    for t in 1..=ticks {
        engine.tick();
        if t % 25 == 0 {
            let mut frame: Vec<DrawCommand> = Vec::new();
            engine.render(&mut frame);
            frames.push(frame);
        }
    }
    frames
}

#[test]
fn test_same_seed_same_frames_whatever_workers_and_schedule() -> anyhow::Result<()> {
    let mut reference = PhysicEngineFireworks::new(&seeded_config(1, Schedule::Static, 1))?;
    let expected = run_and_render(&mut reference, 600);
    assert!(
        expected.iter().any(|f| !f.is_empty()),
        "nothing drawn in 600 ticks"
    );

    for (workers, schedule, chunk_size) in [
        (4, Schedule::Static, 3),
        (3, Schedule::Dynamic, 1),
        (8, Schedule::Guided, 16),
    ] {
        let mut engine = PhysicEngineFireworks::new(&seeded_config(workers, schedule, chunk_size))?;
        let frames = run_and_render(&mut engine, 600);
        assert_eq!(frames, expected, "{workers} workers, {schedule}({chunk_size})");
    }
    Ok(())
}

#[test]
fn test_done_rockets_are_pruned_after_update() -> anyhow::Result<()> {
    let config = PhysicConfigBuilder::default()
        .rocket_spawn_probability(0.0)
        .particles_per_explosion(10)
        .particle_lifetime(5)
        .seed(Some(3))
        .workers(Some(2))
        .build()?;
    let mut engine = PhysicEngineFireworks::new(&config)?;
    engine.force_launch();
    assert_eq!(engine.rockets_count(), 1);

    let mut explosions = 0;
    let mut pruned = 0;
    for _ in 0..1000 {
        let result = engine.tick();
        explosions += result.triggered_explosions;
        pruned += result.pruned_rockets;
        if let Some(rocket) = engine.rockets().first() {
            // une fusée encore présente après le nettoyage n'est jamais terminée
            assert_ne!(rocket.state(), RocketState::Depleted);
        }
        if engine.rockets_count() == 0 {
            break;
        }
    }

    assert_eq!(explosions, 1);
    assert_eq!(pruned, 1);
    assert_eq!(engine.rockets_count(), 0);
    assert_eq!(engine.particles_count(), 0);
    Ok(())
}

#[test]
fn test_counts_follow_rocket_lifecycle() -> anyhow::Result<()> {
    let config = PhysicConfigBuilder::default()
        .rocket_spawn_probability(0.0)
        .particles_per_explosion(25)
        .schedule(Schedule::Dynamic)
        .chunk_size(chunk(4))
        .seed(Some(8))
        .workers(Some(3))
        .build()?;
    let mut engine = PhysicEngineFireworks::new(&config)?;
    engine.force_launch();

    let mut frame: Vec<DrawCommand> = Vec::new();
    assert_eq!(engine.render(&mut frame), 1);
    assert_eq!(engine.particles_count(), 0);

    while engine.tick().triggered_explosions == 0 {}
    assert_eq!(engine.particles_count(), 25);

    frame.clear();
    assert_eq!(engine.render(&mut frame), 25);
    assert_eq!(frame.len(), 25);
    Ok(())
}

#[test]
fn test_close_drops_all_rockets() -> anyhow::Result<()> {
    let mut engine = PhysicEngineFireworks::new(&seeded_config(2, Schedule::Guided, 2))?;
    engine.force_launch();
    engine.force_launch();
    engine.close();
    assert_eq!(engine.rockets_count(), 0);
    Ok(())
}
