//! Frame scheduling seam.

/// Host primitive that runs the next frame "soon", typically on the next
/// display refresh.
///
/// The animation calls [`FrameScheduler::request_frame`] exactly once at the
/// end of every frame, so at most one request is ever outstanding.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Scheduler that only counts requests. Never drives anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingScheduler {
    pub requests: usize,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.requests += 1;
    }
}
