//! Visibility engine for a tile world seen by a single viewer.

mod config;
pub use config::FovConfig;

mod error;
pub use error::FovError;

mod fov;
pub use crate::fov::FieldOfView;

mod map;
pub use map::{TileMap, SPAWN_CHAR};

mod player;
pub use player::Player;

pub mod prelude;

mod store;
pub use store::{Cell, CellStore};

mod tile;
pub use tile::MapTile;

mod viewport;
pub use viewport::{tiles_across, Viewport};

mod world;
pub use world::{Viewer, WorldMap};
