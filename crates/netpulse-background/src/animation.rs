//! The frame loop that owns and drives every entity.

use netpulse_core::{
    FrameScheduler, Point, RandomSource, Surface, Viewport,
    constants::{BACKGROUND_COLOR, PARTICLE_COUNT, PULSE_SPAWN_THRESHOLD},
};

use crate::network::{Packet, Particle, ScanPulse, links};

/// Externally visible lifecycle of an [`AnimationLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No size reported yet, nothing to animate.
    Uninitialized,
    /// Particles seeded for the current viewport.
    Running,
}

/// Owner of the particle, pulse and packet collections.
#[derive(Debug, Default)]
pub struct AnimationLoop {
    /// Size of the last reported viewport, `None` until the first report.
    viewport: Option<Viewport>,
    particles: Vec<Particle>,
    pulses: Vec<ScanPulse>,
    packets: Vec<Packet>,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match self.viewport {
            Some(_) => Phase::Running,
            None => Phase::Uninitialized,
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pulses(&self) -> &[ScanPulse] {
        &self.pulses
    }

    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    /// Handle a display size report.
    ///
    /// Always a full reset: particles are reseeded from scratch for the new
    /// size and every pulse and packet is dropped, including packets whose
    /// endpoint indices would now point at unrelated particles.
    pub fn resize(&mut self, viewport: Viewport, rng: &mut impl RandomSource) {
        log::debug!(
            "reseeding {} particles for {:.0}x{:.0}",
            PARTICLE_COUNT,
            viewport.width,
            viewport.height
        );

        self.viewport = Some(viewport);
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(viewport, rng))
            .collect();
        self.pulses.clear();
        self.packets.clear();
    }

    /// Produce one frame and ask `scheduler` for the next one.
    ///
    /// Draw order is back to front: background, pulses, packets, particles,
    /// links.
    pub fn frame(
        &mut self,
        surface: &mut impl Surface,
        rng: &mut impl RandomSource,
        scheduler: &mut impl FrameScheduler,
    ) {
        if let Some(viewport) = self.viewport {
            self.step(viewport, surface, rng);
        }
        scheduler.request_frame();
    }

    fn step(
        &mut self,
        viewport: Viewport,
        surface: &mut impl Surface,
        rng: &mut impl RandomSource,
    ) {
        surface.fill_rect(
            Point::default(),
            viewport.width,
            viewport.height,
            BACKGROUND_COLOR,
        );

        if rng.exceeds(PULSE_SPAWN_THRESHOLD) {
            let origin = Point::new(
                rng.next_unit() * viewport.width,
                rng.next_unit() * viewport.height,
            );
            log::trace!("scan pulse at ({:.0}, {:.0})", origin.x, origin.y);
            self.pulses.push(ScanPulse::new(origin));
        }

        self.pulses.retain_mut(|pulse| {
            pulse.update();
            pulse.draw(surface);
            !pulse.is_exhausted()
        });

        let particles = &self.particles;
        self.packets.retain_mut(|packet| {
            let alive = packet.update();
            if alive {
                packet.draw(surface, particles);
            }
            alive
        });

        for particle in &mut self.particles {
            particle.update(viewport);
            particle.draw(surface);
        }

        links::connect(&self.particles, &mut self.packets, surface, rng);
    }
}
