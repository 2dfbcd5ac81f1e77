use glam::IVec2;
use util::VecExt;

use crate::{Viewer, WorldMap};

/// Viewer that walks the map in single cardinal steps.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct Player {
    location: IVec2,
}

impl Player {
    pub fn new(location: impl Into<IVec2>) -> Self {
        Player {
            location: location.into(),
        }
    }

    /// Try to take one step, return whether the player moved.
    ///
    /// Only the four cardinal unit vectors are valid steps.
    pub fn step(&mut self, map: &impl WorldMap, dir: IVec2) -> bool {
        if !dir.is_adjacent() {
            log::warn!("Player::step: invalid direction {dir}");
            return false;
        }

        let dest = self.location + dir;
        if map.is_walkable(dest) {
            self.location = dest;
            true
        } else {
            false
        }
    }
}

impl Viewer for Player {
    fn location(&self) -> IVec2 {
        self.location
    }
}
