#[cfg(debug_assertions)]
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::parallel::WorkerPool;
use crate::physic_engine::{
    config::PhysicConfig,
    particle::Particle,
    types::{Color, Rect, Vec2},
};
use crate::renderer_engine::DrawTarget;

/// Compteur global pour générer des ID uniques pour les rockets
pub static ROCKET_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Étapes du cycle de vie d'une fusée
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RocketState {
    /// Monte vers sa hauteur d'explosion
    Ascending,
    /// A explosé, des particules sont encore en vie
    Exploding,
    /// Toutes les particules sont mortes : la fusée peut être retirée
    Depleted,
}

/// Représentation d’une fusée
#[derive(Debug, Clone)]
pub struct Rocket {
    /// ID unique de la rocket
    pub id: u64,

    /// Position : x est fixé au lancement, y décroît pendant la montée
    pub pos: Vec2,

    exploded: bool,
    explosion_height: f32,
    /// Graine des particules de l'explosion (une sous-graine par particule)
    explosion_seed: u64,

    particles: Vec<Particle>,
    particles_per_explosion: usize,
    particle_lifetime: i32,
}

impl Rocket {
    /// Crée une fusée au bas de l'écran, à l'abscisse `x`.
    ///
    /// La hauteur d'explosion et la graine de l'explosion sont tirées ici, une fois
    /// pour toutes.
    pub fn new(x: f32, config: &PhysicConfig, rng: &mut impl Rng) -> Self {
        let h = config.screen_height;
        let explosion_height = rng.random_range(
            (h * config.explosion_height_min_ratio)..=(h * config.explosion_height_max_ratio),
        );

        Self {
            id: ROCKET_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            pos: Vec2::new(x, h),
            exploded: false,
            explosion_height,
            explosion_seed: rng.random(),
            particles: Vec::new(),
            particles_per_explosion: config.particles_per_explosion,
            particle_lifetime: config.particle_lifetime,
        }
    }

    pub fn state(&self) -> RocketState {
        match (self.exploded, self.particles.is_empty()) {
            (false, _) => RocketState::Ascending,
            (true, false) => RocketState::Exploding,
            (true, true) => RocketState::Depleted,
        }
    }

    pub fn exploded(&self) -> bool {
        self.exploded
    }

    pub fn explosion_height(&self) -> f32 {
        self.explosion_height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// La fusée a explosé et toutes ses particules sont mortes.
    pub fn is_done(&self) -> bool {
        self.state() == RocketState::Depleted
    }

    /// Fait avancer la fusée d'un tick. Retourne `true` si elle vient d'exploser.
    pub fn update(&mut self, pool: &WorkerPool, config: &PhysicConfig) -> bool {
        match self.state() {
            RocketState::Ascending => {
                self.pos.y -= config.rocket_ascent_speed;
                if self.pos.y < self.explosion_height {
                    return self.explode(pool, config);
                }
                false
            }
            RocketState::Exploding => {
                self.advance_particles(pool, config);
                false
            }
            RocketState::Depleted => false,
        }
    }

    /// Génère les particules de l'explosion, en parallèle, à la position courante.
    ///
    /// Sans effet (et retourne `false`) si la fusée a déjà explosé. Les particules
    /// sont calculées dans un tableau pré-dimensionné, chaque lane écrivant dans ses
    /// propres cases ; le tableau n'est installé qu'une fois la région terminée.
    pub fn explode(&mut self, pool: &WorkerPool, config: &PhysicConfig) -> bool {
        if self.exploded {
            return false;
        }

        let origin = self.pos;
        let lifetime = self.particle_lifetime;
        let seed = self.explosion_seed;

        let mut particles = vec![Particle::default(); self.particles_per_explosion];
        pool.distribute_mut(
            &mut particles,
            config.chunk_size,
            config.schedule,
            |i, slot| {
                let mut rng = SmallRng::seed_from_u64(particle_seed(seed, i));
                *slot = Particle::new(origin, lifetime, &mut rng, config);
            },
        );

        self.particles = particles;
        self.exploded = true;

        #[cfg(debug_assertions)]
        debug!(
            "💥 Rocket {} exploded at ({:.1}, {:.1}) into {} particles",
            self.id,
            origin.x,
            origin.y,
            self.particles.len()
        );
        true
    }

    /// Avance toutes les particules puis retire les mortes (après le join).
    fn advance_particles(&mut self, pool: &WorkerPool, config: &PhysicConfig) {
        let bounds = config.bounds();
        let damping = config.bounce_damping;

        pool.distribute_mut(
            &mut self.particles,
            config.chunk_size,
            config.schedule,
            |_, p| p.advance(bounds, damping),
        );
        self.particles.retain(Particle::is_alive);

        #[cfg(debug_assertions)]
        if self.particles.is_empty() {
            debug!("Rocket {} depleted: all particles dead", self.id);
        }
    }

    /// Dessine le corps de la fusée, ou ses particules vivantes après l'explosion.
    ///
    /// Retourne le nombre de rectangles émis.
    pub fn render(&self, target: &mut dyn DrawTarget, config: &PhysicConfig) -> usize {
        if !self.exploded {
            let size = config.rocket_size;
            let rect = Rect::new(
                (self.pos.x - (size / 2) as f32) as i32,
                self.pos.y as i32,
                size,
                size * 2,
            );
            target.draw_filled_rect(rect, Color::WHITE);
            return 1;
        }

        for p in &self.particles {
            target.draw_filled_rect(p.rect(), p.color());
        }
        self.particles.len()
    }
}

/// Sous-graine de la particule `index` (mélange splitmix64).
///
/// Le résultat ne dépend que de `(seed, index)` : peu importe quel worker
/// construit quelle particule.
#[inline]
pub fn particle_seed(seed: u64, index: usize) -> u64 {
    let mut z = seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
