use glam::IVec2;

/// Terrain queries the visibility engine needs from the game world.
pub trait WorldMap {
    /// Whether the position stops light.
    fn is_opaque(&self, p: IVec2) -> bool;

    /// Whether a viewer can step into the position.
    fn is_walkable(&self, p: IVec2) -> bool {
        !self.is_opaque(p)
    }
}

/// The single entity the visible set is computed for.
pub trait Viewer {
    /// Where the viewer stands, light is cast from here.
    fn location(&self) -> IVec2;

    /// Point the visibility grid is centered on.
    ///
    /// Usually the same as the location, a smoothly scrolling camera can
    /// lag behind it.
    fn focus(&self) -> IVec2 {
        self.location()
    }
}

impl<T: WorldMap + ?Sized> WorldMap for &T {
    fn is_opaque(&self, p: IVec2) -> bool {
        (**self).is_opaque(p)
    }

    fn is_walkable(&self, p: IVec2) -> bool {
        (**self).is_walkable(p)
    }
}
