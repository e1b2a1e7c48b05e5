use thiserror::Error;

/// Erreurs de configuration : arguments CLI, fichier de config, variables d'environnement.
///
/// Toutes sont fatales et détectées avant l'ouverture de la fenêtre.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing arguments (usage: {program} <particles_per_explosion> <particle_lifetime> [<static|dynamic|guided> <chunk_size>])")]
    MissingArguments { program: String },

    #[error("invalid integer for {name}: '{value}'")]
    InvalidInteger { name: &'static str, value: String },

    #[error("unknown schedule type '{0}' (expected static, dynamic or guided)")]
    UnknownSchedule(String),

    #[error("chunk size must be strictly positive (got {0})")]
    NonPositiveChunkSize(i64),

    #[error("work item count must not be negative (got {0})")]
    NegativeWorkItemCount(i64),

    #[error("particle lifetime must be strictly positive (got {0})")]
    NonPositiveLifetime(i64),

    #[error("worker count must be at least 1 (got {0})")]
    InvalidWorkerCount(usize),

    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("invalid config file {path}: {reason}")]
    ConfigFile { path: String, reason: String },
}

/// Erreur de haut niveau de l'application.
#[derive(Error, Debug)]
pub enum FireworksError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("resource initialization error: {0}")]
    ResourceInit(String),
}

impl FireworksError {
    /// Code de sortie du processus associé à l'erreur.
    pub fn exit_code(&self) -> u8 {
        match self {
            FireworksError::Config(ConfigError::MissingArguments { .. }) => 1,
            FireworksError::Config(_) => 2,
            FireworksError::ResourceInit(_) => 3,
        }
    }
}
