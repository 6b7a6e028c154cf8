pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, ControllerConfig};
pub use error::{Result, RoverError};
pub use types::{Action, Coords, Facing, Tick};
