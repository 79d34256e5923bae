//! Platform-independent core of the particle network background.
//!
//! Nothing here touches the DOM: hosts feed in a viewport, an optional
//! pointer and a tick, and get back [`DrawCommand`]s to paint.

pub mod color;
pub mod config;
pub mod constants;
pub mod draw;
pub mod field;
pub mod particle;
pub mod pointer;

pub use color::*;
pub use config::*;
pub use draw::*;
pub use field::*;
pub use particle::*;
pub use pointer::*;
