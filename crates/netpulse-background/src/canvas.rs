//! Replaying a recorded frame onto a ratatui canvas.

use netpulse_core::{DisplayList, DrawCommand, Point, Surface, Viewport};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Context, Line, Points, Rectangle},
    },
};

use crate::color::{solid_color, terminal_color};

/// Filled circles at or below this radius are plotted as a single point.
const POINT_RADIUS: f64 = 4.0;

/// Widget drawing a [`DisplayList`] stretched over the render area.
#[derive(Debug)]
pub struct NetworkCanvas<'a> {
    list: &'a DisplayList,
    marker: Marker,
}

impl<'a> NetworkCanvas<'a> {
    pub fn new(list: &'a DisplayList, marker: Marker) -> Self {
        Self { list, marker }
    }
}

impl Widget for NetworkCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = self.list.viewport();
        let commands = self.list.commands();

        let mut canvas = Canvas::default()
            .marker(self.marker)
            .x_bounds([0.0, viewport.width])
            .y_bounds([0.0, viewport.height]);

        // Cells cannot be partially filled; a fill spanning the whole surface
        // becomes the canvas background.
        if let Some(DrawCommand::FillRect { color, .. }) = commands
            .iter()
            .rev()
            .find(|command| covers(command, viewport))
        {
            canvas = canvas.background_color(solid_color(*color));
        }

        canvas
            .paint(|ctx| {
                for command in commands {
                    draw_command(ctx, command, viewport);
                }
            })
            .render(area, buf);
    }
}

fn covers(command: &DrawCommand, viewport: Viewport) -> bool {
    match command {
        DrawCommand::FillRect {
            origin,
            width,
            height,
            ..
        } => {
            origin.x <= 0.0
                && origin.y <= 0.0
                && origin.x + width >= viewport.width
                && origin.y + height >= viewport.height
        }
        _ => false,
    }
}

/// Surface y grows downwards, canvas y grows upwards.
fn flip(point: Point, viewport: Viewport) -> (f64, f64) {
    (point.x, viewport.height - point.y)
}

fn draw_command(ctx: &mut Context, command: &DrawCommand, viewport: Viewport) {
    match command {
        DrawCommand::FillRect {
            origin,
            width,
            height,
            color,
        } => {
            if !covers(command, viewport) {
                let (x, top) = flip(*origin, viewport);
                ctx.draw(&Rectangle {
                    x,
                    y: top - height,
                    width: *width,
                    height: *height,
                    color: terminal_color(*color),
                });
            }
        }
        DrawCommand::FillCircle {
            center,
            radius,
            color,
        } => {
            let (x, y) = flip(*center, viewport);
            let color = terminal_color(*color);
            ctx.draw(&Points {
                coords: &[(x, y)],
                color,
            });
            if *radius > POINT_RADIUS {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: *radius,
                    color,
                });
            }
        }
        DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            ..
        } => {
            let (x, y) = flip(*center, viewport);
            ctx.draw(&Circle {
                x,
                y,
                radius: *radius,
                color: terminal_color(*color),
            });
        }
        DrawCommand::StrokeLine {
            from, to, color, ..
        } => {
            let (x1, y1) = flip(*from, viewport);
            let (x2, y2) = flip(*to, viewport);
            ctx.draw(&Line {
                x1,
                y1,
                x2,
                y2,
                color: terminal_color(*color),
            });
        }
    }
}
