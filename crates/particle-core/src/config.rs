//! Field configuration and its validation.
//!
//! A [`FieldConfig`] is fixed for the lifetime of a field. It is checked once
//! when the field is built; every later operation assumes it is valid.

use thiserror::Error;

use crate::color::Rgba;
use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeRange {
    pub min: f32,
    pub max: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerConfig {
    /// Distance within which the pointer repels particles and highlights lines.
    pub radius: f32,
    /// Velocity added per tick at the pointer centre, falling off linearly to 0 at `radius`.
    pub push_strength: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub particle: Rgba,
    pub line: Rgba,
    pub line_hover: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub particle_size: SizeRange,
    /// Pairs closer than this are joined by a line.
    pub line_distance: f32,
    /// Initial velocity components are drawn from `[-speed / 2, speed / 2]`.
    pub speed: f32,
    pub max_speed: f32,
    pub pointer: PointerConfig,
    pub colors: Palette,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            particle_size: SizeRange {
                min: PARTICLE_SIZE_MIN,
                max: PARTICLE_SIZE_MAX,
            },
            line_distance: LINE_DISTANCE,
            speed: BASE_SPEED,
            max_speed: MAX_SPEED,
            pointer: PointerConfig {
                radius: POINTER_RADIUS,
                push_strength: POINTER_PUSH_STRENGTH,
            },
            colors: Palette {
                particle: Rgba::from_rgb(PARTICLE_RGB, PARTICLE_ALPHA),
                line: Rgba::from_rgb(LINE_RGB, LINE_ALPHA),
                line_hover: Rgba::from_rgb(LINE_HOVER_RGB, LINE_HOVER_ALPHA),
            },
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    ZeroParticles,
    #[error("particle count {count} exceeds the maximum of {max}")]
    TooManyParticles { count: usize, max: usize },
    #[error("particle size range is invalid: min {min}, max {max}")]
    InvalidSizeRange { min: f32, max: f32 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} alpha must be within [0, 1], got {value}")]
    AlphaOutOfRange { field: &'static str, value: f32 },
    #[error("expected {expected} particles, got {actual}")]
    ParticleCountMismatch { expected: usize, actual: usize },
}

impl FieldConfig {
    /// Reject configurations the simulation cannot honour.
    ///
    /// NaN fails every check since all comparisons are written to be false for it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::ZeroParticles);
        }
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::TooManyParticles {
                count: self.particle_count,
                max: MAX_PARTICLE_COUNT,
            });
        }

        let SizeRange { min, max } = self.particle_size;
        if !(min > 0.0 && max.is_finite() && min <= max) {
            return Err(ConfigError::InvalidSizeRange { min, max });
        }

        positive("line_distance", self.line_distance)?;
        non_negative("speed", self.speed)?;
        positive("max_speed", self.max_speed)?;
        positive("pointer.radius", self.pointer.radius)?;
        non_negative("pointer.push_strength", self.pointer.push_strength)?;

        alpha("colors.particle", self.colors.particle)?;
        alpha("colors.line", self.colors.line)?;
        alpha("colors.line_hover", self.colors.line_hover)?;

        if self.speed / 2.0 > self.max_speed {
            log::warn!(
                "speed {} exceeds twice max_speed {}; initial velocities will be clamped",
                self.speed,
                self.max_speed
            );
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn alpha(field: &'static str, color: Rgba) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&color.alpha) {
        Ok(())
    } else {
        Err(ConfigError::AlphaOutOfRange {
            field,
            value: color.alpha,
        })
    }
}
