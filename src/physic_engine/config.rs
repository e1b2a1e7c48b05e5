use derive_builder::Builder;
use serde::Deserialize;
use std::num::NonZeroUsize;

use crate::error::ConfigError;
use crate::parallel::Schedule;

#[derive(Debug, Clone, Deserialize, Builder, PartialEq)]
#[serde(default)]
#[builder(default, pattern = "owned", build_fn(error = "anyhow::Error"))]
pub struct PhysicConfig {
    pub screen_width: f32,
    pub screen_height: f32,

    pub particles_per_explosion: usize,
    /// Durée de vie des particules, en ticks
    pub particle_lifetime: i32,

    pub schedule: Schedule,
    pub chunk_size: NonZeroUsize,
    /// Nombre de lanes du pool (None = concurrence matérielle)
    pub workers: Option<usize>,
    /// Graine du générateur (None = entropie système)
    pub seed: Option<u64>,

    pub rocket_spawn_probability: f64,
    pub rocket_ascent_speed: f32,
    pub rocket_size: i32,
    pub explosion_height_min_ratio: f32,
    pub explosion_height_max_ratio: f32,

    pub particle_min_speed: u32,
    pub particle_max_speed: u32,
    pub particle_max_size: i32,
    pub bounce_damping: f32,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            screen_width: 1024.0,
            screen_height: 768.0,
            particles_per_explosion: 200,
            particle_lifetime: 30,
            schedule: Schedule::Static,
            chunk_size: NonZeroUsize::MIN,
            workers: None,
            seed: None,
            rocket_spawn_probability: 0.02,
            rocket_ascent_speed: 2.0,
            rocket_size: 3,
            explosion_height_min_ratio: 0.25,
            explosion_height_max_ratio: 0.75,
            particle_min_speed: 1,
            particle_max_speed: 3,
            particle_max_size: 4,
            bounce_damping: 0.2,
        }
    }
}

impl PhysicConfig {
    /// Vérifie la cohérence de la configuration, avant toute allocation de ressource.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(invalid(
                "screen size",
                format!("{} x {}", self.screen_width, self.screen_height),
            ));
        }
        if self.particle_lifetime <= 0 {
            return Err(ConfigError::NonPositiveLifetime(
                self.particle_lifetime as i64,
            ));
        }
        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(ConfigError::InvalidWorkerCount(workers));
            }
        }
        if !(0.0..=1.0).contains(&self.rocket_spawn_probability) {
            return Err(invalid(
                "rocket_spawn_probability",
                format!("{} not in [0, 1]", self.rocket_spawn_probability),
            ));
        }
        if !(self.rocket_ascent_speed > 0.0) {
            return Err(invalid(
                "rocket_ascent_speed",
                format!("{} must be > 0", self.rocket_ascent_speed),
            ));
        }
        let (min, max) = (
            self.explosion_height_min_ratio,
            self.explosion_height_max_ratio,
        );
        if !(0.0 <= min && min <= max && max <= 1.0) {
            return Err(invalid(
                "explosion height ratios",
                format!("expected 0 <= {min} <= {max} <= 1"),
            ));
        }
        if self.particle_min_speed > self.particle_max_speed {
            return Err(invalid(
                "particle speed range",
                format!("{} > {}", self.particle_min_speed, self.particle_max_speed),
            ));
        }
        if self.rocket_size < 1 {
            return Err(invalid(
                "rocket_size",
                format!("{} must be >= 1", self.rocket_size),
            ));
        }
        if self.particle_max_size < 1 {
            return Err(invalid(
                "particle_max_size",
                format!("{} must be >= 1", self.particle_max_size),
            ));
        }
        if !(0.0..=1.0).contains(&self.bounce_damping) {
            return Err(invalid(
                "bounce_damping",
                format!("{} not in [0, 1]", self.bounce_damping),
            ));
        }
        Ok(())
    }

    /// Nombre de lanes du pool de workers.
    pub fn worker_count(&self) -> NonZeroUsize {
        self.workers
            .and_then(NonZeroUsize::new)
            .unwrap_or_else(|| {
                std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
            })
    }

    /// Dimensions du monde : les particules rebondissent sur ces bords.
    pub fn bounds(&self) -> glam::Vec2 {
        glam::Vec2::new(self.screen_width, self.screen_height)
    }

    /// Surcharges `FIREWORKS_WORKERS` / `FIREWORKS_SEED`.
    pub fn apply_overrides(
        &mut self,
        workers: Option<&str>,
        seed: Option<&str>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = workers {
            let workers = value
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidInteger {
                    name: "FIREWORKS_WORKERS",
                    value: value.to_string(),
                })?;
            if workers == 0 {
                return Err(ConfigError::InvalidWorkerCount(workers));
            }
            self.workers = Some(workers);
        }
        if let Some(value) = seed {
            self.seed = Some(value.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidInteger {
                    name: "FIREWORKS_SEED",
                    value: value.to_string(),
                }
            })?);
        }
        Ok(())
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let workers = std::env::var("FIREWORKS_WORKERS").ok();
        let seed = std::env::var("FIREWORKS_SEED").ok();
        self.apply_overrides(workers.as_deref(), seed.as_deref())
    }
}

fn invalid(name: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidValue { name, reason }
}
