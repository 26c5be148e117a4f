mod action;
mod collision;
mod dead_link;
mod effect;
mod item;
mod rng;
mod settings;
mod snake;
mod streams;
mod universe;

pub use action::PlayerAction;
pub use collision::collides;
pub use dead_link::DeadLink;
pub use effect::{Effect, EffectKind};
pub use item::Item;
pub use rng::WorldRng;
pub use settings::{EffectDurations, ItemWeights, Rgba, WorldSettings};
pub use snake::Snake;
pub use streams::{ColorStream, ItemStream, SpawnStream};
pub use universe::Universe;
