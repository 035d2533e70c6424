//! Traffic dots travelling along links.

use netpulse_core::{
    Point, RandomSource, Surface,
    constants::{PACKET_COLOR, PACKET_RADIUS, PACKET_SPEED_MIN, PACKET_SPEED_SPREAD},
};

use super::Particle;

/// A dot moving from one particle towards another.
///
/// Endpoints are indices into the particle collection. The packet reads the
/// particles' current positions every time it is drawn, so its path follows
/// its endpoints as they drift.
#[derive(Debug, Clone, PartialEq)]
pub struct Packet {
    /// Index of the particle the packet leaves from.
    pub from: usize,
    /// Index of the particle the packet travels to.
    pub to: usize,
    /// Fraction of the way travelled.
    pub progress: f64,
    /// Progress gained per frame.
    pub speed: f64,
}

impl Packet {
    pub fn new(from: usize, to: usize, speed: f64) -> Self {
        Self {
            from,
            to,
            progress: 0.0,
            speed,
        }
    }

    /// A packet with speed uniform in `[0.02, 0.05)`.
    pub fn random(from: usize, to: usize, rng: &mut impl RandomSource) -> Self {
        let speed = PACKET_SPEED_MIN + rng.next_unit() * PACKET_SPEED_SPREAD;
        Self::new(from, to, speed)
    }

    /// Advance one frame and report whether the packet is still travelling.
    pub fn update(&mut self) -> bool {
        self.progress += self.speed;
        self.progress < 1.0
    }

    /// Interpolated position between the endpoints' current positions, or
    /// `None` when either index no longer resolves.
    pub fn position(&self, particles: &[Particle]) -> Option<Point> {
        let from = particles.get(self.from)?.position;
        let to = particles.get(self.to)?.position;
        Some(from.lerp(to, self.progress))
    }

    pub fn draw(&self, surface: &mut impl Surface, particles: &[Particle]) {
        if let Some(position) = self.position(particles) {
            surface.fill_circle(position, PACKET_RADIUS, PACKET_COLOR);
        }
    }
}
