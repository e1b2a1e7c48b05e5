use log::warn;
use std::num::NonZeroUsize;

use crate::error::ConfigError;
use crate::parallel::Schedule;
use crate::physic_engine::PhysicConfig;

/// Arguments positionnels de la ligne de commande :
/// `<particles_per_explosion> <particle_lifetime> [<schedule> <chunk_size>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub particles_per_explosion: usize,
    pub particle_lifetime: i32,
    /// `None` quand la paire optionnelle est absente
    pub schedule: Option<(Schedule, NonZeroUsize)>,
}

impl CliArgs {
    /// Analyse `args` (le premier élément est le nom du programme).
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        let program = args
            .first()
            .map(|s| s.as_ref().to_string())
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        let args: Vec<&str> = args.iter().skip(1).map(|s| s.as_ref()).collect();

        // Un type de schedule sans sa taille de bloc est un argument manquant
        if args.len() < 2 || args.len() == 3 {
            return Err(ConfigError::MissingArguments { program });
        }
        if args.len() > 4 {
            warn!("Ignoring extra arguments: {:?}", &args[4..]);
        }

        let particles = parse_int("particles_per_explosion", args[0])?;
        if particles < 0 {
            return Err(ConfigError::NegativeWorkItemCount(particles));
        }
        let particles_per_explosion =
            usize::try_from(particles).map_err(|_| ConfigError::InvalidValue {
                name: "particles_per_explosion",
                reason: format!("{particles} is too large"),
            })?;

        let lifetime = parse_int("particle_lifetime", args[1])?;
        if lifetime <= 0 {
            return Err(ConfigError::NonPositiveLifetime(lifetime));
        }
        let particle_lifetime = i32::try_from(lifetime).map_err(|_| ConfigError::InvalidValue {
            name: "particle_lifetime",
            reason: format!("{lifetime} is too large"),
        })?;

        let schedule = match args.get(2..4) {
            Some(&[schedule, chunk]) => {
                let schedule: Schedule = schedule.parse()?;
                let chunk = parse_int("chunk_size", chunk)?;
                let chunk_size = usize::try_from(chunk)
                    .ok()
                    .and_then(NonZeroUsize::new)
                    .ok_or(ConfigError::NonPositiveChunkSize(chunk))?;
                Some((schedule, chunk_size))
            }
            _ => None,
        };

        Ok(Self {
            particles_per_explosion,
            particle_lifetime,
            schedule,
        })
    }

    /// Reporte les arguments sur la configuration (priorité la plus haute).
    pub fn apply_to(&self, config: &mut PhysicConfig) {
        config.particles_per_explosion = self.particles_per_explosion;
        config.particle_lifetime = self.particle_lifetime;
        if let Some((schedule, chunk_size)) = self.schedule {
            config.schedule = schedule;
            config.chunk_size = chunk_size;
        }
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <particles_per_explosion> <particle_lifetime> [<static|dynamic|guided> <chunk_size>]"
    )
}

fn parse_int(name: &'static str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidInteger {
            name,
            value: value.to_string(),
        })
}
