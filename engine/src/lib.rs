pub mod config;
pub mod logger;
pub mod world;

/// Players are identified by display name throughout the engine.
pub type PlayerName = String;

pub use world::{PlayerAction, Universe, WorldRng, WorldSettings};
