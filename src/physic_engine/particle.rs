use rand::Rng;
use std::f32::consts::TAU;

use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::types::{Color, Rect, Vec2};

/// Particule d'explosion : un point cinématique à durée de vie limitée.
///
/// La couleur et la taille sont fixées à la création. La durée de vie (en ticks)
/// ne fait que décroître : une particule morte ne revit jamais.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    life: i32,
    color: Color,
    size: i32,
}

impl Particle {
    /// Particule lancée depuis `origin` dans une direction et à une vitesse aléatoires.
    pub fn new(origin: Vec2, lifetime: i32, rng: &mut impl Rng, config: &PhysicConfig) -> Self {
        let angle = rng.random_range(0.0..TAU);
        let speed =
            rng.random_range(config.particle_min_speed..=config.particle_max_speed) as f32;

        Self {
            pos: origin,
            vel: Vec2::from_angle(angle) * speed,
            life: lifetime,
            color: Color::new(rng.random(), rng.random(), rng.random()),
            size: rng.random_range(1..=config.particle_max_size),
        }
    }

    /// Particule entièrement déterminée (tests, scénarios).
    pub fn with_velocity(origin: Vec2, vel: Vec2, lifetime: i32, color: Color, size: i32) -> Self {
        Self {
            pos: origin,
            vel,
            life: lifetime,
            color,
            size,
        }
    }

    /// Avance d'un pas (Euler explicite) et consomme un tick de vie.
    ///
    /// Hors de `[0, bounds]` sur un axe, la vitesse de cet axe est inversée et
    /// amortie par `damping`. Le test a lieu à chaque tick passé hors limites, pas
    /// seulement au franchissement : une particule collée au bord voit sa vitesse
    /// amortie plusieurs fois de suite.
    #[inline(always)]
    pub fn advance(&mut self, bounds: Vec2, damping: f32) {
        self.pos += self.vel;

        if self.pos.x <= 0.0 || self.pos.x >= bounds.x {
            self.vel.x = -self.vel.x * damping;
        }
        if self.pos.y <= 0.0 || self.pos.y >= bounds.y {
            self.vel.y = -self.vel.y * damping;
        }

        self.life -= 1;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn life(&self) -> i32 {
        self.life
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Rectangle dessiné pour cette particule.
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x as i32, self.pos.y as i32, self.size, self.size)
    }
}
