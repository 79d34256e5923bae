//! Renderer-agnostic draw commands.
//!
//! A field describes a frame as an ordered list of [`DrawCommand`]s. Hosts
//! implement [`Surface`] for whatever they paint onto and hand it to [`paint`],
//! which clears once and replays the list in order.

use glam::Vec2;

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Rgba,
        width: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Rgba,
    },
}

impl DrawCommand {
    #[inline]
    pub fn is_line(&self) -> bool {
        matches!(self, DrawCommand::Line { .. })
    }

    #[inline]
    pub fn is_circle(&self) -> bool {
        matches!(self, DrawCommand::Circle { .. })
    }

    /// Stroke or fill color, whichever the command carries.
    pub fn color(&self) -> Rgba {
        match *self {
            DrawCommand::Line { stroke, .. } => stroke,
            DrawCommand::Circle { fill, .. } => fill,
        }
    }
}

/// Something a frame can be painted onto.
pub trait Surface {
    /// Wipe the previous frame.
    fn clear(&mut self);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Rgba, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Rgba);
}

/// Clear `surface` exactly once, then apply `commands` in order.
pub fn paint<S: Surface + ?Sized>(surface: &mut S, commands: &[DrawCommand]) {
    surface.clear();
    for cmd in commands {
        match *cmd {
            DrawCommand::Line {
                from,
                to,
                stroke,
                width,
            } => surface.stroke_line(from, to, stroke, width),
            DrawCommand::Circle {
                center,
                radius,
                fill,
            } => surface.fill_circle(center, radius, fill),
        }
    }
}
