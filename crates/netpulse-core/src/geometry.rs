//! Plane geometry in surface coordinates (origin top-left, y down).

/// Size of the drawing surface in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a point lies inside `[0, width] x [0, height]`.
    #[cfg(any(test, feature = "test-support"))]
    pub fn contains(&self, point: Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

/// A position on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance, cheap enough for threshold tests.
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(self, other: Point) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_sq(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_lerp() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(20.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 0.5), Point::new(15.0, 10.0));
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_viewport_contains() {
        let viewport = Viewport::new(100.0, 50.0);
        assert!(viewport.contains(Point::new(0.0, 0.0)));
        assert!(viewport.contains(Point::new(100.0, 50.0)));
        assert!(!viewport.contains(Point::new(-0.1, 10.0)));
        assert!(!viewport.contains(Point::new(10.0, 50.1)));
    }
}
