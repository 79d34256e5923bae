use glam::Vec2;
use particle_core::Pointer;

/// Last known pointer position in canvas-local pixels, `None` once it leaves.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerTracker {
    position: Option<Vec2>,
}

impl PointerTracker {
    /// Record a move given client coordinates and the canvas' on-screen origin.
    #[inline]
    pub fn move_to(&mut self, client: Vec2, canvas_origin: Vec2) {
        self.position = Some(canvas_local(client, canvas_origin));
    }

    #[inline]
    pub fn leave(&mut self) {
        self.position = None;
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// The pointer as the field sees it, carrying the given influence radius.
    #[inline]
    pub fn pointer(&self, radius: f32) -> Option<Pointer> {
        self.position.map(|p| Pointer::new(p, radius))
    }
}

// Canvas pixels match CSS pixels here, so only the offset is removed.
#[inline]
pub fn canvas_local(client: Vec2, canvas_origin: Vec2) -> Vec2 {
    client - canvas_origin
}
