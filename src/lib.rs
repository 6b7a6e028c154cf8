//! Arena Rover - autonomous agent controller for tile-based arena games

pub mod arena;
pub mod controller;
pub mod core;
pub mod knowledge;
pub mod nav;
