use serde::Deserialize;
use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;
use std::str::FromStr;

use crate::error::ConfigError;

/// Politique de découpage d'une boucle parallèle (façon `schedule(...)` d'OpenMP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    /// Blocs de `chunk_size` distribués en round-robin avant l'exécution.
    #[default]
    Static,
    /// Blocs de `chunk_size` distribués à la demande.
    Dynamic,
    /// Blocs distribués à la demande, de taille décroissante jusqu'à `chunk_size`.
    Guided,
}

impl Schedule {
    pub const ALL: [Schedule; 3] = [Schedule::Static, Schedule::Dynamic, Schedule::Guided];

    pub fn as_str(&self) -> &'static str {
        match self {
            Schedule::Static => "static",
            Schedule::Dynamic => "dynamic",
            Schedule::Guided => "guided",
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Schedule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Schedule::Static),
            "dynamic" => Ok(Schedule::Dynamic),
            "guided" => Ok(Schedule::Guided),
            other => Err(ConfigError::UnknownSchedule(other.to_string())),
        }
    }
}

/// Découpage déterministe de `[0, count)` en blocs contigus.
///
/// Les bornes des blocs ne dépendent que de `(schedule, count, chunk_size, lanes)`.
/// Seule l'attribution des blocs aux threads varie d'une exécution à l'autre
/// (sauf en `Static`, où chaque lane connaît ses blocs à l'avance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulePlan {
    schedule: Schedule,
    blocks: Vec<Range<usize>>,
    lanes: usize,
}

impl SchedulePlan {
    pub fn new(schedule: Schedule, count: usize, chunk_size: NonZeroUsize, lanes: usize) -> Self {
        let chunk = chunk_size.get();
        let team = lanes.max(1);

        let mut blocks = Vec::with_capacity(count.div_ceil(chunk));
        let mut start = 0;
        while start < count {
            let remaining = count - start;
            let len = match schedule {
                Schedule::Static | Schedule::Dynamic => chunk,
                // même règle que libgomp : ceil(reste / threads), jamais sous chunk_size
                Schedule::Guided => remaining.div_ceil(team).max(chunk),
            }
            .min(remaining);
            blocks.push(start..start + len);
            start += len;
        }

        // inutile d'occuper plus de lanes qu'il n'y a de blocs
        let lanes = team.min(blocks.len());

        Self {
            schedule,
            blocks,
            lanes,
        }
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    pub fn blocks(&self) -> &[Range<usize>] {
        &self.blocks
    }

    /// Nombre de lanes effectivement occupées (0 si aucun travail).
    pub fn lanes(&self) -> usize {
        self.lanes
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocs attribués à `lane` en `Static` (round-robin : lane, lane + lanes, ...).
    pub fn static_assignment(&self, lane: usize) -> impl Iterator<Item = usize> + '_ {
        (lane..self.blocks.len()).step_by(self.lanes.max(1))
    }
}
