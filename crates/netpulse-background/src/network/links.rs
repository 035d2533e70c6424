//! Link discovery between nearby particles.
//!
//! Every frame all unordered particle pairs are tested against
//! [`LINK_DISTANCE`]. The rejection test works on squared distances; the
//! square root is only taken for pairs that end up linked. The pass is
//! quadratic in the particle count, which stays cheap at
//! [`PARTICLE_COUNT`](netpulse_core::constants::PARTICLE_COUNT) particles. A
//! uniform grid keyed by `LINK_DISTANCE` would be the way to scale it up.

use netpulse_core::{
    RandomSource, Surface,
    constants::{
        LINK_BASE_ALPHA, LINK_COLOR, LINK_DISTANCE, LINK_LINE_WIDTH, PACKET_CAP,
        PACKET_SPAWN_THRESHOLD,
    },
};

use super::{Packet, Particle};

/// A pair of particles close enough to be linked this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Lower particle index.
    pub a: usize,
    /// Higher particle index.
    pub b: usize,
    /// True distance between the two particles.
    pub distance: f64,
}

impl Link {
    /// Opacity factor in `(0, 1]`, 1 for coincident particles and 0 for a
    /// pair at or beyond the link threshold.
    pub fn opacity(&self) -> f64 {
        link_opacity(self.distance).unwrap_or(0.0)
    }
}

/// Linear opacity falloff for a link of the given length, `None` once the
/// length reaches the link threshold.
pub fn link_opacity(distance: f64) -> Option<f64> {
    (distance < LINK_DISTANCE).then(|| 1.0 - distance / LINK_DISTANCE)
}

/// All linked pairs in pass order (`a` ascending, then `b` ascending).
pub fn discover(particles: &[Particle]) -> Vec<Link> {
    let threshold_sq = LINK_DISTANCE * LINK_DISTANCE;
    let mut links = Vec::new();

    for (a, first) in particles.iter().enumerate() {
        for (offset, second) in particles[a + 1..].iter().enumerate() {
            let distance_sq = first.position.distance_sq(second.position);
            if distance_sq < threshold_sq {
                links.push(Link {
                    a,
                    b: a + 1 + offset,
                    distance: distance_sq.sqrt(),
                });
            }
        }
    }

    links
}

/// Draw every link and roll for new packets on each one.
///
/// One random draw is consumed per link, whether or not the packet cap has
/// been reached. Spawned packets are appended to `packets` and not drawn.
pub fn connect(
    particles: &[Particle],
    packets: &mut Vec<Packet>,
    surface: &mut impl Surface,
    rng: &mut impl RandomSource,
) {
    for link in discover(particles) {
        let from = particles[link.a].position;
        let to = particles[link.b].position;
        let color = LINK_COLOR.with_alpha(link.opacity() * LINK_BASE_ALPHA);
        surface.stroke_line(from, to, color, LINK_LINE_WIDTH);

        if rng.exceeds(PACKET_SPAWN_THRESHOLD) && packets.len() < PACKET_CAP {
            log::trace!("packet spawned on link {}-{}", link.a, link.b);
            packets.push(Packet::random(link.a, link.b, rng));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netpulse_core::{DisplayList, Point, ScriptedRandom, Viewport};

    fn at(x: f64, y: f64) -> Particle {
        Particle::new(Point::new(x, y), 0.0, 0.0, 1.0)
    }

    fn surface() -> DisplayList {
        DisplayList::new(Viewport::new(1000.0, 1000.0))
    }

    #[test]
    fn test_link_opacity() {
        assert_eq!(link_opacity(0.0), Some(1.0));
        let third = link_opacity(100.0).unwrap();
        assert!((third - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(link_opacity(150.0), None);
        assert_eq!(link_opacity(200.0), None);
    }

    #[test]
    fn test_link_opacity_matches_falloff() {
        let near = Link { a: 0, b: 1, distance: 100.0 };
        assert_eq!(Some(near.opacity()), link_opacity(100.0));
        let edge = Link { a: 0, b: 1, distance: LINK_DISTANCE };
        assert_eq!(edge.opacity(), 0.0);
        let far = Link { a: 0, b: 1, distance: 400.0 };
        assert_eq!(far.opacity(), 0.0);
    }

    #[test]
    fn test_opacity_decreases_with_distance() {
        let mut previous = f64::INFINITY;
        for step in 0..150 {
            let opacity = link_opacity(step as f64).unwrap();
            assert!(opacity < previous);
            assert!(opacity > 0.0);
            previous = opacity;
        }
    }

    #[test]
    fn test_discover_threshold() {
        let particles = vec![at(0.0, 0.0), at(100.0, 0.0), at(400.0, 0.0)];
        let links = discover(&particles);
        assert_eq!(
            links,
            vec![Link {
                a: 0,
                b: 1,
                distance: 100.0
            }]
        );
    }

    #[test]
    fn test_discover_just_inside_and_at_threshold() {
        let particles = vec![at(0.0, 0.0), at(149.999, 0.0), at(0.0, 150.0)];
        let links = discover(&particles);
        let pairs: Vec<_> = links.iter().map(|link| (link.a, link.b)).collect();
        // (0,2) sits exactly on the threshold and is not linked.
        assert_eq!(pairs, vec![(0, 1)]);
    }

    #[test]
    fn test_discover_all_pairs_in_order() {
        let particles = vec![at(0.0, 0.0), at(10.0, 0.0), at(0.0, 10.0), at(10.0, 10.0)];
        let pairs: Vec<_> = discover(&particles)
            .iter()
            .map(|link| (link.a, link.b))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_connect_draws_line_with_falloff_alpha() {
        let particles = vec![at(0.0, 0.0), at(100.0, 0.0)];
        let mut packets = Vec::new();
        let mut surface = surface();
        connect(&particles, &mut packets, &mut surface, &mut ScriptedRandom::constant(0.0));

        let lines: Vec<_> = surface.lines().collect();
        assert_eq!(lines.len(), 1);
        let (from, to, color) = lines[0];
        assert_eq!(from, Point::new(0.0, 0.0));
        assert_eq!(to, Point::new(100.0, 0.0));
        assert!((color.alpha - LINK_BASE_ALPHA / 3.0).abs() < 1e-12);
        assert!(packets.is_empty());
    }

    #[test]
    fn test_connect_far_pair_draws_nothing_and_never_spawns() {
        let particles = vec![at(0.0, 0.0), at(200.0, 0.0)];
        let mut packets = Vec::new();
        let mut surface = surface();
        let mut rng = ScriptedRandom::constant(0.9999);
        connect(&particles, &mut packets, &mut surface, &mut rng);

        assert!(surface.is_empty());
        assert!(packets.is_empty());
    }

    #[test]
    fn test_connect_spawns_packet_when_roll_passes() {
        let particles = vec![at(0.0, 0.0), at(50.0, 0.0)];
        let mut packets = Vec::new();
        let mut surface = surface();
        // Spawn roll, then packet speed.
        let mut rng = ScriptedRandom::new([0.9995, 0.5], 0.0);
        connect(&particles, &mut packets, &mut surface, &mut rng);

        assert_eq!(packets.len(), 1);
        assert_eq!((packets[0].from, packets[0].to), (0, 1));
        assert!((packets[0].speed - 0.035).abs() < 1e-12);
        // The new packet is not drawn in the pass that created it.
        assert_eq!(surface.dots().count(), 0);
    }

    #[test]
    fn test_connect_respects_packet_cap() {
        let particles: Vec<Particle> = (0..8).map(|i| at(i as f64, 0.0)).collect();
        let mut packets: Vec<Packet> = (0..PACKET_CAP - 1)
            .map(|_| Packet::new(0, 1, 0.02))
            .collect();
        let mut surface = surface();
        let mut rng = ScriptedRandom::constant(0.9999);
        connect(&particles, &mut packets, &mut surface, &mut rng);

        assert_eq!(packets.len(), PACKET_CAP);
        // 28 pairs, all linked.
        assert_eq!(surface.lines().count(), 28);
    }

    #[test]
    fn test_connect_consumes_roll_even_when_capped() {
        let particles = vec![at(0.0, 0.0), at(1.0, 0.0), at(2.0, 0.0)];
        let mut packets: Vec<Packet> = (0..PACKET_CAP)
            .map(|_| Packet::new(0, 1, 0.02))
            .collect();
        let mut rng = ScriptedRandom::new([0.9999, 0.9999, 0.9999], 0.0);
        connect(&particles, &mut packets, &mut surface(), &mut rng);

        assert_eq!(packets.len(), PACKET_CAP);
        assert_eq!(rng.remaining(), 0);
    }
}
