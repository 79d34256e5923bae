use glam::Vec2;

use crate::pointer::Pointer;

/// Drawing surface size in pixels. Negative or NaN dimensions collapse to 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// A single moving point. Positions and velocities are in pixels and pixels per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32) -> Self {
        Self {
            position,
            velocity,
            size,
        }
    }

    /// Run one tick: move, bounce, repel, clamp. The order matters.
    pub fn step(
        &mut self,
        viewport: Viewport,
        pointer: Option<&Pointer>,
        push: f32,
        max_speed: f32,
    ) {
        self.advance();
        self.reflect(viewport);
        if let Some(p) = pointer {
            self.repel(p, push);
        }
        self.clamp_speed(max_speed);
    }

    #[inline]
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Mirror the velocity component on each axis where the particle is
    /// outside the viewport. Position is left alone, so it may overshoot by a step.
    pub fn reflect(&mut self, viewport: Viewport) {
        let Vec2 { x, y } = self.position;
        if x < 0.0 || x > viewport.width {
            self.velocity.x = -self.velocity.x;
        }
        if y < 0.0 || y > viewport.height {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Push away from the pointer with linear falloff. No-op when the
    /// particle sits exactly on the pointer.
    pub fn repel(&mut self, pointer: &Pointer, push: f32) {
        let away = self.position - pointer.position;
        let d = away.length();
        if d > 0.0 && d < pointer.radius {
            let force = (pointer.radius - d) / pointer.radius;
            self.velocity += away / d * (force * push);
        }
    }

    pub fn clamp_speed(&mut self, max_speed: f32) {
        let speed = self.velocity.length();
        if speed > max_speed {
            self.velocity *= max_speed / speed;
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
