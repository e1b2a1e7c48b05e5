pub mod simulator;
pub use simulator::{Simulator, SimulatorSettings};
// Window engine
pub mod window_engine;
pub use window_engine::{GlfwWindowEngine, HeadlessWindowEngine, WindowEngine};
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::DrawTarget;
// Physic engine
pub mod physic_engine;
pub use physic_engine::{PhysicEngine, PhysicEngineFireworks};
// Pool de workers + politiques de découpage
pub mod parallel;
pub use parallel::{Schedule, WorkerPool};

pub mod cli;
pub mod config;
pub mod error;
pub use error::{ConfigError, FireworksError};

// Profiler
pub mod profiler;
// Utilities
pub mod utils;
