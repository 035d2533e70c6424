//! Fixed tuning constants and palette of the network background.
//!
//! Distances and speeds are in surface units per frame.

use crate::Rgba;

/// Number of particles seeded for every viewport.
pub const PARTICLE_COUNT: usize = 60;

/// Particles closer than this are linked.
pub const LINK_DISTANCE: f64 = 150.0;

/// Velocity components are drawn from `(-SPEED/2, SPEED/2)`.
pub const PARTICLE_SPEED: f64 = 0.5;

/// Particle radius is uniform in `[MIN, MIN + SPREAD)`.
pub const PARTICLE_RADIUS_MIN: f64 = 1.0;
pub const PARTICLE_RADIUS_SPREAD: f64 = 2.0;

/// Growth of a scan pulse ring per frame.
pub const PULSE_SPEED: f64 = 4.0;

/// Life lost by a scan pulse per frame.
pub const PULSE_DECAY: f64 = 0.005;

/// A pulse spawns when a unit random draw exceeds this (p ~ 0.004).
pub const PULSE_SPAWN_THRESHOLD: f64 = 0.996;

/// A packet spawns on a link when a unit random draw exceeds this (p ~ 0.001).
pub const PACKET_SPAWN_THRESHOLD: f64 = 0.999;

/// Maximum number of live packets.
pub const PACKET_CAP: usize = 10;

/// Packet progress per frame is uniform in `[MIN, MIN + SPREAD)`.
pub const PACKET_SPEED_MIN: f64 = 0.02;
pub const PACKET_SPEED_SPREAD: f64 = 0.03;

pub const PACKET_RADIUS: f64 = 2.0;

pub const LINK_LINE_WIDTH: f64 = 0.5;
pub const PULSE_LINE_WIDTH: f64 = 1.0;

/// Opacity of a link between coincident particles.
pub const LINK_BASE_ALPHA: f64 = 0.2;

/// Opacity of a pulse at full life.
pub const PULSE_BASE_ALPHA: f64 = 0.2;

pub const BACKGROUND_COLOR: Rgba = Rgba::hex(0x020617);
pub const NODE_COLOR: Rgba = Rgba::hex(0x0ea5e9);
pub const LINK_COLOR: Rgba = Rgba::rgb(14, 165, 233);
pub const PACKET_COLOR: Rgba = Rgba::hex(0xd946ef);
pub const PULSE_COLOR: Rgba = Rgba::rgb(34, 197, 94);
