pub mod r#trait;
pub use r#trait::PhysicEngine;

pub mod types;
pub use self::types::{Color, DrawCommand, Rect, UpdateResult, Vec2};

pub mod rocket;
pub use self::rocket::{Rocket, RocketState};

pub mod particle;
pub use self::particle::Particle;

pub mod config;
pub use self::config::{PhysicConfig, PhysicConfigBuilder};

pub mod physic_engine_fireworks;
pub use self::physic_engine_fireworks::PhysicEngineFireworks;
