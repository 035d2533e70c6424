//! Binding of the animation to a terminal frame.

use netpulse_core::{DisplayList, EntropyRandom, FrameScheduler, Viewport};
use ratatui::{Frame, layout::Rect, symbols::Marker};

use crate::{animation::AnimationLoop, canvas::NetworkCanvas};

/// Pixel size assumed for a terminal cell when the terminal does not report
/// its pixel dimensions.
pub const DEFAULT_CELL_SIZE: (f64, f64) = (8.0, 16.0);

/// Background animation state.
#[derive(Debug)]
pub struct BackgroundState {
    /// The entity collections and frame pipeline.
    animation: AnimationLoop,
    /// Draw commands of the most recent frame.
    display: DisplayList,
    /// Randomness for seeding and spawns.
    rng: EntropyRandom,
    /// Pixel size of one terminal cell.
    cell_size: (f64, f64),
    /// Last known terminal width.
    last_width: u16,
    /// Last known terminal height.
    last_height: u16,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundState {
    /// Create a new background state seeded from system entropy.
    pub fn new() -> Self {
        Self::with_random(EntropyRandom::new())
    }

    pub fn with_random(rng: EntropyRandom) -> Self {
        Self {
            animation: AnimationLoop::new(),
            display: DisplayList::new(Viewport::new(0.0, 0.0)),
            rng,
            cell_size: DEFAULT_CELL_SIZE,
            last_width: 0,
            last_height: 0,
        }
    }

    pub fn animation(&self) -> &AnimationLoop {
        &self.animation
    }

    /// Set the pixel size of a terminal cell. Non-positive sizes fall back to
    /// [`DEFAULT_CELL_SIZE`]. A change forces a reseed on the next render.
    pub fn set_cell_size(&mut self, width: f64, height: f64) {
        let size = if width > 0.0 && height > 0.0 {
            (width, height)
        } else {
            DEFAULT_CELL_SIZE
        };
        if size != self.cell_size {
            self.cell_size = size;
            self.last_width = 0;
            self.last_height = 0;
        }
    }

    /// Surface size in pixels for a terminal area.
    pub fn viewport_for(&self, area: Rect) -> Viewport {
        Viewport::new(
            area.width as f64 * self.cell_size.0,
            area.height as f64 * self.cell_size.1,
        )
    }

    /// Run one animation frame and draw it over the whole frame area.
    ///
    /// A changed area is reported to the animation as a resize before the
    /// frame runs.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        marker: Marker,
        scheduler: &mut impl FrameScheduler,
    ) {
        let area = frame.area();
        let viewport = self.viewport_for(area);

        // Reinitialize if dimensions changed or never sized
        let dimensions_changed =
            area.width != self.last_width || area.height != self.last_height;
        if dimensions_changed {
            self.animation.resize(viewport, &mut self.rng);
            self.last_width = area.width;
            self.last_height = area.height;
        }

        self.display.reset(viewport);
        self.animation
            .frame(&mut self.display, &mut self.rng, scheduler);

        frame.render_widget(NetworkCanvas::new(&self.display, marker), area);
    }
}
