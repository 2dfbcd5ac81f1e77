/// Terrain of one map cell, as far as light and movement care.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub enum MapTile {
    /// Solid rock, also what lies outside the map.
    #[default]
    Wall,
    Floor,
    /// Walkable but stops sight.
    Door,
    /// Lets light through but can't be walked into.
    Water,
}

impl MapTile {
    /// Tile for a map text glyph. The viewer glyph is not a tile.
    pub fn from_glyph(c: char) -> Option<Self> {
        Some(match c {
            '#' => MapTile::Wall,
            '.' => MapTile::Floor,
            '+' => MapTile::Door,
            '~' => MapTile::Water,
            _ => return None,
        })
    }

    pub fn glyph(self) -> char {
        match self {
            MapTile::Wall => '#',
            MapTile::Floor => '.',
            MapTile::Door => '+',
            MapTile::Water => '~',
        }
    }

    pub fn is_opaque(self) -> bool {
        matches!(self, MapTile::Wall | MapTile::Door)
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, MapTile::Floor | MapTile::Door)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn glyphs() {
        for c in "#.+~".chars() {
            assert_eq!(MapTile::from_glyph(c).map(MapTile::glyph), Some(c));
        }
        assert_eq!(MapTile::from_glyph('@'), None);
        assert_eq!(MapTile::from_glyph(' '), None);
    }

    #[test]
    fn light_and_movement() {
        assert!(MapTile::Wall.is_opaque() && !MapTile::Wall.is_walkable());
        assert!(!MapTile::Floor.is_opaque() && MapTile::Floor.is_walkable());
        assert!(MapTile::Door.is_opaque() && MapTile::Door.is_walkable());
        assert!(!MapTile::Water.is_opaque() && !MapTile::Water.is_walkable());
    }
}
