//! The 2D drawing surface the animation paints onto.

use crate::{Point, Rgba, Viewport};

/// Immediate-mode 2D drawing surface.
///
/// Drawing calls are assumed to always succeed.
pub trait Surface {
    /// Current drawable size.
    fn viewport(&self) -> Viewport;

    /// Fill an axis-aligned rectangle with a solid colour.
    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Rgba);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, line_width: f64);

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, line_width: f64);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        origin: Point,
        width: f64,
        height: f64,
        color: Rgba,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Rgba,
        line_width: f64,
    },
    StrokeLine {
        from: Point,
        to: Point,
        color: Rgba,
        line_width: f64,
    },
}

/// A [`Surface`] that records every call in order.
///
/// Hosts replay a finished list onto their real backend; tests inspect it.
#[derive(Debug, Clone)]
pub struct DisplayList {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    /// Drop recorded commands and adopt a new size, keeping the allocation.
    pub fn reset(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

/// Inspection helpers for asserting on a recorded frame.
#[cfg(any(test, feature = "test-support"))]
impl DisplayList {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded line strokes as `(from, to, color)`.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Rgba)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::StrokeLine { from, to, color, .. } => Some((*from, *to, *color)),
            _ => None,
        })
    }

    /// Recorded ring strokes as `(center, radius, color)`.
    pub fn rings(&self) -> impl Iterator<Item = (Point, f64, Rgba)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::StrokeCircle {
                center,
                radius,
                color,
                ..
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    /// Recorded filled circles as `(center, radius, color)`.
    pub fn dots(&self) -> impl Iterator<Item = (Point, f64, Rgba)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, line_width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, line_width: f64) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            color,
            line_width,
        });
    }
}
