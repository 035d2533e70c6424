//! Drifting network nodes.

use netpulse_core::{
    Point, RandomSource, Surface, Viewport,
    constants::{NODE_COLOR, PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_SPREAD, PARTICLE_SPEED},
};

/// A node drifting at constant velocity and bouncing off the viewport edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position.
    pub position: Point,
    /// Horizontal velocity per frame.
    pub vx: f64,
    /// Vertical velocity per frame.
    pub vy: f64,
    /// Dot radius, fixed for the particle's lifetime.
    pub radius: f64,
}

impl Particle {
    pub fn new(position: Point, vx: f64, vy: f64, radius: f64) -> Self {
        Self {
            position,
            vx,
            vy,
            radius,
        }
    }

    /// Place a particle uniformly inside the viewport with a small random
    /// velocity.
    pub fn random(viewport: Viewport, rng: &mut impl RandomSource) -> Self {
        let x = rng.next_unit() * viewport.width;
        let y = rng.next_unit() * viewport.height;
        let vx = (rng.next_unit() - 0.5) * PARTICLE_SPEED;
        let vy = (rng.next_unit() - 0.5) * PARTICLE_SPEED;
        let radius = rng.next_unit() * PARTICLE_RADIUS_SPREAD + PARTICLE_RADIUS_MIN;
        Self::new(Point::new(x, y), vx, vy, radius)
    }

    /// Advance one frame.
    ///
    /// An axis that ends up outside the viewport has its velocity negated.
    /// The coordinate itself is left alone, so the particle may sit outside
    /// for one frame before heading back.
    pub fn update(&mut self, viewport: Viewport) {
        self.position.x += self.vx;
        self.position.y += self.vy;

        if self.position.x < 0.0 || self.position.x > viewport.width {
            self.vx = -self.vx;
        }
        if self.position.y < 0.0 || self.position.y > viewport.height {
            self.vy = -self.vy;
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.position, self.radius, NODE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netpulse_core::{DisplayList, EntropyRandom, ScriptedRandom};

    #[test]
    fn test_random_placement() {
        let viewport = Viewport::new(200.0, 100.0);
        let mut rng = ScriptedRandom::new([0.5, 0.25, 1.0 - f64::EPSILON, 0.0, 0.5], 0.0);
        let particle = Particle::random(viewport, &mut rng);

        assert_eq!(particle.position, Point::new(100.0, 25.0));
        assert!(particle.vx > 0.0 && particle.vx < PARTICLE_SPEED / 2.0);
        assert_eq!(particle.vy, -PARTICLE_SPEED / 2.0);
        assert_eq!(particle.radius, 2.0);
    }

    #[test]
    fn test_update_moves_by_velocity() {
        let mut particle = Particle::new(Point::new(10.0, 10.0), 0.25, -0.125, 1.0);
        particle.update(Viewport::new(100.0, 100.0));
        assert_eq!(particle.position, Point::new(10.25, 9.875));
        assert_eq!((particle.vx, particle.vy), (0.25, -0.125));
    }

    #[test]
    fn test_bounce_flips_only_crossing_axis() {
        let mut particle = Particle::new(Point::new(99.9, 50.0), 0.25, 0.25, 1.0);
        particle.update(Viewport::new(100.0, 100.0));

        // Overshoot is kept for this frame, velocity points back inside.
        assert!(particle.position.x > 100.0);
        assert_eq!(particle.vx, -0.25);
        assert_eq!(particle.vy, 0.25);

        particle.update(Viewport::new(100.0, 100.0));
        assert!(particle.position.x <= 100.0);
        assert_eq!(particle.vx, -0.25);
    }

    #[test]
    fn test_bounce_at_origin() {
        let mut particle = Particle::new(Point::new(0.1, 0.1), -0.2, -0.2, 1.0);
        particle.update(Viewport::new(10.0, 10.0));
        assert_eq!((particle.vx, particle.vy), (0.2, 0.2));
    }

    #[test]
    fn test_stays_in_bounds_over_time() {
        let viewport = Viewport::new(120.0, 80.0);
        let mut rng = EntropyRandom::seeded(3);
        let mut particles: Vec<Particle> =
            (0..50).map(|_| Particle::random(viewport, &mut rng)).collect();

        for _ in 0..5_000 {
            for particle in &mut particles {
                particle.update(viewport);
                // At most one frame of overshoot.
                let slack = PARTICLE_SPEED / 2.0;
                assert!(particle.position.x >= -slack);
                assert!(particle.position.x <= viewport.width + slack);
                assert!(particle.position.y >= -slack);
                assert!(particle.position.y <= viewport.height + slack);
            }
        }
    }

    #[test]
    fn test_draw() {
        let particle = Particle::new(Point::new(3.0, 4.0), 0.0, 0.0, 2.5);
        let mut surface = DisplayList::new(Viewport::new(10.0, 10.0));
        particle.draw(&mut surface);

        let dots: Vec<_> = surface.dots().collect();
        assert_eq!(dots, vec![(Point::new(3.0, 4.0), 2.5, NODE_COLOR)]);
    }
}
