//! Animated network background.
//!
//! Drifting particles are linked when they come near each other, scan pulses
//! ripple out from random spots and packets travel along the links. The
//! [`AnimationLoop`] owns every entity and renders onto any
//! [`Surface`](netpulse_core::Surface); [`BackgroundState`] binds it to a
//! ratatui frame.

mod animation;
mod canvas;
mod color;
pub mod network;
mod state;

pub use animation::{AnimationLoop, Phase};
pub use canvas::NetworkCanvas;
pub use color::{solid_color, terminal_color};
pub use state::{BackgroundState, DEFAULT_CELL_SIZE};
