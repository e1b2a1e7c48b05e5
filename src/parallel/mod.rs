//! Stratégie d'exécution parallèle des boucles de la simulation.
//!
//! - [`Schedule`] : politique de découpage (static / dynamic / guided)
//! - [`SchedulePlan`] : blocs d'indices déterministes pour une boucle donnée
//! - [`WorkerPool`] : pool borné, fork-join, partagé par toutes les régions
pub mod schedule;
pub use self::schedule::{Schedule, SchedulePlan};

pub mod worker_pool;
pub use self::worker_pool::WorkerPool;
