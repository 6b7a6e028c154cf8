use thiserror::Error;

use crate::core::types::Coords;

#[derive(Error, Debug)]
pub enum RoverError {
    /// The engine must always report the agent to itself; without the own
    /// occupant descriptor the current facing cannot be known.
    #[error("Observation at {0:?} is missing the agent's own occupant descriptor")]
    MissingOwnOccupant(Coords),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoverError>;
