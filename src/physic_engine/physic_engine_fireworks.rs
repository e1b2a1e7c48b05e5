use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::FireworksError;
use crate::parallel::WorkerPool;
use crate::physic_engine::{
    config::PhysicConfig, rocket::Rocket, types::UpdateResult, PhysicEngine, Vec2,
};
use crate::renderer_engine::DrawTarget;

/// Simulation complète : fusées, lancements aléatoires, pool de workers.
///
/// Un seul générateur pseudo-aléatoire, possédé par la simulation, sert aux
/// lancements et aux tirages de chaque fusée. Avec une graine fixée, l'état est
/// donc identique quel que soit le nombre de workers ou la politique de découpage.
#[derive(Debug)]
pub struct PhysicEngineFireworks {
    rockets: Vec<Rocket>,
    config: PhysicConfig,
    rng: StdRng,
    pool: WorkerPool,
    frames: u64,
}

impl PhysicEngineFireworks {
    /// Valide la configuration puis démarre le pool de workers.
    pub fn new(config: &PhysicConfig) -> Result<Self, FireworksError> {
        config.validate()?;

        let pool = WorkerPool::new(config.worker_count())?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(
            "🎆 Physic engine ready: {} particles/explosion, lifetime {} ticks, schedule({}, {}), {} workers",
            config.particles_per_explosion,
            config.particle_lifetime,
            config.schedule,
            config.chunk_size,
            pool.workers()
        );

        Ok(Self {
            rockets: Vec::new(),
            config: config.clone(),
            rng,
            pool,
            frames: 0,
        })
    }

    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    fn spawn_rocket(&mut self) -> Vec2 {
        let x = self.rng.random_range(0.0..self.config.screen_width);
        let rocket = Rocket::new(x, &self.config, &mut self.rng);
        let pos = rocket.pos;
        debug!(
            "🚀 Rocket {} spawned at ({:.1}, {:.1}), explodes below y={:.1}",
            rocket.id,
            pos.x,
            pos.y,
            rocket.explosion_height()
        );
        self.rockets.push(rocket);
        pos
    }
}

impl PhysicEngine for PhysicEngineFireworks {
    fn tick(&mut self) -> UpdateResult {
        self.frames += 1;

        let new_rocket = self
            .rng
            .random_bool(self.config.rocket_spawn_probability)
            .then(|| self.spawn_rocket());

        // === Mise à jour des fusées (fork-join) ===
        let explosions = AtomicUsize::new(0);
        let pool = &self.pool;
        let config = &self.config;
        pool.distribute_mut(
            &mut self.rockets,
            config.chunk_size,
            config.schedule,
            |_, rocket| {
                if rocket.update(pool, config) {
                    explosions.fetch_add(1, Ordering::Relaxed);
                }
            },
        );

        // === Nettoyage, une fois toutes les mises à jour terminées ===
        let before = self.rockets.len();
        self.rockets.retain(|r| !r.is_done());
        let pruned_rockets = before - self.rockets.len();
        if pruned_rockets > 0 {
            debug!("🧹 {} rocket(s) done and removed", pruned_rockets);
        }

        UpdateResult {
            new_rocket,
            triggered_explosions: explosions.into_inner(),
            pruned_rockets,
        }
    }

    fn render(&self, target: &mut dyn DrawTarget) -> usize {
        self.rockets
            .iter()
            .map(|rocket| rocket.render(target, &self.config))
            .sum()
    }

    fn rockets_count(&self) -> usize {
        self.rockets.len()
    }

    fn particles_count(&self) -> usize {
        self.rockets.iter().map(|r| r.particles().len()).sum()
    }

    fn frames(&self) -> u64 {
        self.frames
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn close(&mut self) {
        self.rockets.clear();
        debug!("PhysicEngineFireworks closed and reset.");
    }
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait PhysicEngineTestHelpers {
    /// Lance immédiatement une fusée, hors tirage aléatoire.
    fn force_launch(&mut self) -> Vec2;
    fn rockets_mut(&mut self) -> &mut Vec<Rocket>;
}

#[cfg(any(test, feature = "test_helpers"))]
impl PhysicEngineTestHelpers for PhysicEngineFireworks {
    fn force_launch(&mut self) -> Vec2 {
        self.spawn_rocket()
    }

    fn rockets_mut(&mut self) -> &mut Vec<Rocket> {
        &mut self.rockets
    }
}
