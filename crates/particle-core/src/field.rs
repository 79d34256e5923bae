//! The particle field: seeding, per-tick simulation and frame description.
//!
//! A `ParticleField` only exists once it has been seeded, so `update` and
//! `render` can never run on an empty, unconfigured field. Hosts that have not
//! built one yet hold `Option<ParticleField>` (or nothing at all).

use glam::Vec2;
use rand::Rng;

use crate::config::{ConfigError, FieldConfig};
use crate::constants::{HOVER_LINE_ALPHA_SCALE, LINE_ALPHA_SCALE, LINE_WIDTH};
use crate::draw::DrawCommand;
use crate::particle::{Particle, Viewport};
use crate::pointer::Pointer;

#[derive(Clone, Debug)]
pub struct ParticleField {
    config: FieldConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Validate `config` and seed `config.particle_count` particles inside `viewport`.
    pub fn new<R: Rng + ?Sized>(
        config: FieldConfig,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut field = Self {
            config,
            viewport,
            particles: Vec::new(),
        };
        field.reseed(viewport, rng);
        Ok(field)
    }

    /// Build a field from explicit particles, e.g. a saved or hand-placed layout.
    pub fn with_particles(
        config: FieldConfig,
        viewport: Viewport,
        particles: Vec<Particle>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if particles.len() != config.particle_count {
            return Err(ConfigError::ParticleCountMismatch {
                expected: config.particle_count,
                actual: particles.len(),
            });
        }
        Ok(Self {
            config,
            viewport,
            particles,
        })
    }

    /// Replace every particle with a fresh random batch for `viewport`.
    pub fn reseed<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.viewport = viewport;
        let half = self.config.speed / 2.0;
        let size = self.config.particle_size;
        self.particles = (0..self.config.particle_count)
            .map(|_| {
                let position = Vec2::new(
                    sample_below(rng, viewport.width),
                    sample_below(rng, viewport.height),
                );
                let velocity = Vec2::new(rng.gen_range(-half..=half), rng.gen_range(-half..=half));
                Particle::new(position, velocity, rng.gen_range(size.min..=size.max))
            })
            .collect();
        log::debug!(
            "[field] seeded {} particles in {:.0}x{:.0}",
            self.particles.len(),
            viewport.width,
            viewport.height
        );
    }

    /// Advance every particle by one tick.
    pub fn update(&mut self, pointer: Option<&Pointer>) {
        let viewport = self.viewport;
        let push = self.config.pointer.push_strength;
        let max_speed = self.config.max_speed;
        for p in &mut self.particles {
            p.step(viewport, pointer, push, max_speed);
        }
    }

    /// Describe the current frame. See [`ParticleField::render_into`].
    pub fn render(&self, pointer: Option<&Pointer>) -> Vec<DrawCommand> {
        let mut out = Vec::new();
        self.render_into(pointer, &mut out);
        out
    }

    /// Replace the contents of `out` with this frame's commands: all links
    /// first (pair order `i < j`), then one circle per particle.
    pub fn render_into(&self, pointer: Option<&Pointer>, out: &mut Vec<DrawCommand>) {
        out.clear();
        let threshold = self.config.line_distance;
        let colors = &self.config.colors;

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d = a.position.distance(b.position);
                if d >= threshold {
                    continue;
                }
                let opacity = 1.0 - d / threshold;
                let mid = (a.position + b.position) * 0.5;
                let stroke = if pointer.is_some_and(|p| p.reaches(mid)) {
                    colors.line_hover.with_alpha(opacity * HOVER_LINE_ALPHA_SCALE)
                } else {
                    colors.line.with_alpha(opacity * LINE_ALPHA_SCALE)
                };
                out.push(DrawCommand::Line {
                    from: a.position,
                    to: b.position,
                    stroke,
                    width: LINE_WIDTH,
                });
            }
        }

        out.extend(self.particles.iter().map(|p| DrawCommand::Circle {
            center: p.position,
            radius: p.size,
            fill: colors.particle,
        }));
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// A pointer at `position` using the configured influence radius.
    pub fn pointer_at(&self, position: Vec2) -> Pointer {
        Pointer::new(position, self.config.pointer.radius)
    }
}

// Uniform in [0, max); a zero-sized axis pins everything to 0.
fn sample_below<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}
