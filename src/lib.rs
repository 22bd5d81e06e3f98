pub mod action_log;
pub mod actor;
pub mod config;
pub mod enclosure;
pub mod enemy;
pub mod furnace;
pub mod grid;
pub mod save_state;
pub mod settings;

pub use actor::Actor;
pub use enclosure::{EnclosureDetector, EnclosureResult};
pub use enemy::Enemy;
pub use furnace::{FurnaceEngine, FurnaceEvent};
pub use grid::Grid;
