//! Expanding scan rings.

use netpulse_core::{
    Point, Surface,
    constants::{PULSE_BASE_ALPHA, PULSE_COLOR, PULSE_DECAY, PULSE_LINE_WIDTH, PULSE_SPEED},
};

/// A ring that grows from a fixed origin while fading out.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanPulse {
    /// Ring center.
    pub origin: Point,
    /// Current ring radius.
    pub radius: f64,
    /// Remaining intensity, starts at 1.0 and only decreases.
    pub life: f64,
}

impl ScanPulse {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            radius: 0.0,
            life: 1.0,
        }
    }

    pub fn update(&mut self) {
        self.radius += PULSE_SPEED;
        self.life -= PULSE_DECAY;
    }

    /// Whether the owner should discard this pulse.
    pub fn is_exhausted(&self) -> bool {
        self.life <= 0.0
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        let color = PULSE_COLOR.with_alpha(self.life * PULSE_BASE_ALPHA);
        surface.stroke_circle(self.origin, self.radius, color, PULSE_LINE_WIDTH);
    }
}
