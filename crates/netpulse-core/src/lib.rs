//! Core types shared by the netpulse crates.
//!
//! The animation engine never talks to a terminal or a window directly. It
//! draws onto a [`Surface`], asks a [`FrameScheduler`] for the next frame and
//! takes its randomness from a [`RandomSource`]. This crate defines those
//! seams together with the geometry, colour and tuning constants they use.

pub mod constants;
mod geometry;
mod random;
mod rgba;
mod schedule;
mod surface;

pub use geometry::{Point, Viewport};
pub use random::{EntropyRandom, RandomSource, ScriptedRandom};
pub use rgba::Rgba;
pub use schedule::{CountingScheduler, FrameScheduler};
pub use surface::{DisplayList, DrawCommand, Surface};
