use fireworks_parallel::physic_engine::rocket::particle_seed;
use fireworks_parallel::physic_engine::{
    Color, DrawCommand, PhysicConfig, PhysicConfigBuilder, Rect, Rocket, RocketState, Vec2,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::panic::{catch_unwind, AssertUnwindSafe};

mod helpers;
use helpers::pool;

// ==================================
// 1. Création
// ==================================

#[test]
fn test_rocket_starts_at_bottom_and_ascending() {
    let config = PhysicConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let rocket = Rocket::new(100.0, &config, &mut rng);

    assert_eq!(rocket.pos, Vec2::new(100.0, config.screen_height));
    assert_eq!(rocket.state(), RocketState::Ascending);
    assert!(!rocket.exploded());
    assert!(rocket.particles().is_empty());
    assert!(!rocket.is_done());
}

#[test]
fn test_explosion_height_within_ratio_bounds() {
    let config = PhysicConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let (min, max) = (0.25 * 768.0, 0.75 * 768.0);

    for _ in 0..1000 {
        let rocket = Rocket::new(0.0, &config, &mut rng);
        let h = rocket.explosion_height();
        assert!((min..=max).contains(&h), "explosion height {h} out of range");
    }
}

#[test]
fn test_rocket_ids_are_unique() {
    let config = PhysicConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let a = Rocket::new(0.0, &config, &mut rng);
    let b = Rocket::new(0.0, &config, &mut rng);
    assert_ne!(a.id, b.id);
}

// ==================================
// 2. Montée + explosion
// ==================================

#[test]
fn test_rocket_ascends_then_explodes_below_its_height() {
    let config = PhysicConfigBuilder::default()
        .particles_per_explosion(16)
        .build()
        .unwrap();
    let pool = pool(2);
    let mut rng = StdRng::seed_from_u64(11);
    let mut rocket = Rocket::new(500.0, &config, &mut rng);
    let start_y = rocket.pos.y;

    let mut ticks = 0;
    while !rocket.update(&pool, &config) {
        ticks += 1;
        assert_eq!(rocket.state(), RocketState::Ascending);
        assert_eq!(rocket.pos.y, start_y - 2.0 * ticks as f32);
        assert!(ticks < 1000, "rocket never exploded");
    }

    assert!(rocket.pos.y < rocket.explosion_height());
    assert!(rocket.pos.y + 2.0 >= rocket.explosion_height());
    assert_eq!(rocket.state(), RocketState::Exploding);
    assert_eq!(rocket.particles().len(), 16);
    assert!(rocket.particles().iter().all(|p| p.pos == rocket.pos));
}

#[test]
fn test_explode_twice_does_not_double_particles() {
    let config = PhysicConfigBuilder::default()
        .particles_per_explosion(50)
        .build()
        .unwrap();
    let pool = pool(3);
    let mut rng = StdRng::seed_from_u64(5);
    let mut rocket = Rocket::new(200.0, &config, &mut rng);

    assert!(rocket.explode(&pool, &config));
    assert!(!rocket.explode(&pool, &config));
    assert_eq!(rocket.particles().len(), 50);
}

#[test]
fn test_explosion_200_particles_all_dead_after_30_ticks() {
    let config = PhysicConfigBuilder::default()
        .particles_per_explosion(200)
        .particle_lifetime(30)
        .build()
        .unwrap();
    let pool = pool(4);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut rocket = Rocket::new(512.0, &config, &mut rng);
    // au centre : vitesse max 3 sur 30 ticks, aucun bord atteint
    rocket.pos = Vec2::new(512.0, 384.0);

    assert!(rocket.explode(&pool, &config));
    assert_eq!(rocket.particles().len(), 200);

    for _ in 0..29 {
        rocket.update(&pool, &config);
        assert_eq!(rocket.particles().len(), 200);
    }
    rocket.update(&pool, &config);

    assert!(rocket.particles().is_empty());
    assert!(rocket.is_done());
    assert_eq!(rocket.state(), RocketState::Depleted);
}

#[test]
fn test_failed_explosion_installs_no_particles() {
    // plage de vitesse vide : chaque tirage de particule panique dans le pool
    let config = PhysicConfig {
        particles_per_explosion: 64,
        particle_min_speed: 5,
        particle_max_speed: 1,
        ..Default::default()
    };
    let pool = pool(4);
    let mut rng = StdRng::seed_from_u64(13);
    let mut rocket = Rocket::new(300.0, &config, &mut rng);

    let outcome = catch_unwind(AssertUnwindSafe(|| rocket.explode(&pool, &config)));

    assert!(outcome.is_err());
    assert!(!rocket.exploded());
    assert!(rocket.particles().is_empty());
    assert_eq!(rocket.state(), RocketState::Ascending);

    // le pool reste utilisable après la panique
    let config = PhysicConfig {
        particles_per_explosion: 64,
        ..Default::default()
    };
    assert!(rocket.explode(&pool, &config));
    assert_eq!(rocket.particles().len(), 64);
}

#[test]
fn test_zero_particle_explosion_is_immediately_done() {
    let config = PhysicConfigBuilder::default()
        .particles_per_explosion(0)
        .build()
        .unwrap();
    let pool = pool(2);
    let mut rng = StdRng::seed_from_u64(9);
    let mut rocket = Rocket::new(10.0, &config, &mut rng);

    assert!(rocket.explode(&pool, &config));
    assert!(rocket.exploded());
    assert!(rocket.is_done());
}

// ==================================
// 3. Rendu
// ==================================

#[test]
fn test_render_ascending_rocket_draws_white_body() {
    let config = PhysicConfig::default();
    let mut rng = StdRng::seed_from_u64(4);
    let rocket = Rocket::new(512.0, &config, &mut rng);

    let mut frame: Vec<DrawCommand> = Vec::new();
    assert_eq!(rocket.render(&mut frame, &config), 1);
    assert_eq!(
        frame,
        vec![DrawCommand {
            rect: Rect::new(511, 768, 3, 6),
            color: Color::WHITE
        }]
    );
}

#[test]
fn test_render_exploded_rocket_draws_one_rect_per_particle() {
    let config = PhysicConfigBuilder::default()
        .particles_per_explosion(40)
        .build()
        .unwrap();
    let pool = pool(2);
    let mut rng = StdRng::seed_from_u64(4);
    let mut rocket = Rocket::new(512.0, &config, &mut rng);
    rocket.explode(&pool, &config);

    let mut frame: Vec<DrawCommand> = Vec::new();
    assert_eq!(rocket.render(&mut frame, &config), 40);
    let expected: Vec<Rect> = rocket.particles().iter().map(|p| p.rect()).collect();
    let drawn: Vec<Rect> = frame.iter().map(|c| c.rect).collect();
    assert_eq!(drawn, expected);
}

#[test]
fn test_particle_seed_depends_on_index() {
    assert_eq!(particle_seed(42, 3), particle_seed(42, 3));
    assert_ne!(particle_seed(42, 3), particle_seed(42, 4));
    assert_ne!(particle_seed(42, 3), particle_seed(43, 3));
}
