pub use crate::{
    FieldOfView, FovConfig, FovError, MapTile, Player, TileMap, Viewer,
    WorldMap,
};
pub use glam::{ivec2, IVec2};
pub use util::DIR_4;
