use std::str::FromStr;

use anyhow::bail;
use glam::{ivec2, IVec2};
use util::HashMap;

use crate::{MapTile, WorldMap};

/// Glyph for the viewer's start position in map text. The cell under it
/// is floor.
pub const SPAWN_CHAR: char = '@';

/// Finite terrain map parsed from ASCII text.
///
/// Every position outside the parsed cells is solid wall.
#[derive(Clone, Default, Debug)]
pub struct TileMap {
    tiles: HashMap<IVec2, MapTile>,
    spawn: Option<IVec2>,
}

impl TileMap {
    pub fn tile(&self, p: IVec2) -> MapTile {
        self.tiles.get(&p).copied().unwrap_or_default()
    }

    pub fn set_tile(&mut self, p: IVec2, tile: MapTile) {
        if tile == MapTile::default() {
            self.tiles.remove(&p);
        } else {
            self.tiles.insert(p, tile);
        }
    }

    /// Position marked with the spawn glyph, if the map had one.
    pub fn spawn(&self) -> Option<IVec2> {
        self.spawn
    }
}

/// Map text is a block of glyph rows.
///
/// Leading blank lines and the indentation shared by all rows are ignored,
/// so maps can be written inline in indented code. The first row is y = 0
/// and the first column after the shared indentation is x = 0. Blanks
/// inside the block leave the cell as wall.
impl FromStr for TileMap {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .skip_while(|line| line.trim().is_empty())
            .collect();
        let indent = rows
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.len() - line.trim_start().len())
            .min()
            .unwrap_or(0);

        let mut ret = TileMap::default();
        for (y, row) in rows.iter().enumerate() {
            let row = row.get(indent..).unwrap_or("");
            for (x, c) in row.chars().enumerate() {
                if c.is_whitespace() {
                    continue;
                }
                let p = ivec2(x as i32, y as i32);

                if c == SPAWN_CHAR {
                    if let Some(prev) = ret.spawn {
                        bail!(
                            "second viewer '{c}' at {p}, first was at {prev}"
                        );
                    }
                    ret.spawn = Some(p);
                    ret.set_tile(p, MapTile::Floor);
                } else if let Some(tile) = MapTile::from_glyph(c) {
                    ret.set_tile(p, tile);
                } else {
                    bail!("unknown map glyph {c:?} at {p}");
                }
            }
        }

        Ok(ret)
    }
}

impl WorldMap for TileMap {
    fn is_opaque(&self, p: IVec2) -> bool {
        self.tile(p).is_opaque()
    }

    fn is_walkable(&self, p: IVec2) -> bool {
        self.tile(p).is_walkable()
    }
}
