use glam::Vec2;

/// A present pointer in canvas-local pixels. An absent pointer is `None`
/// wherever one is accepted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub position: Vec2,
    pub radius: f32,
}

impl Pointer {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }

    /// Strictly inside the influence radius.
    #[inline]
    pub fn reaches(&self, point: Vec2) -> bool {
        self.position.distance(point) < self.radius
    }
}
