//! Entities of the network animation.

pub mod links;
mod packet;
mod particle;
mod pulse;

pub use links::Link;
pub use packet::Packet;
pub use particle::Particle;
pub use pulse::ScanPulse;
