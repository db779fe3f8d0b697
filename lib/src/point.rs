use serde::{Deserialize, Serialize};
use std::fmt;
use voronator::delaunator;

/// Pixel position, origin at the top-left corner of the image.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Point { x, y }
    }

    /// Clamp a possibly out-of-range coordinate pair into `[0, width) x [0, height)`.
    pub fn clamped(x: i64, y: i64, width: u32, height: u32) -> Self {
        let max_x = width.saturating_sub(1) as i64;
        let max_y = height.saturating_sub(1) as i64;

        Point::new(x.clamp(0, max_x) as u32, y.clamp(0, max_y) as u32)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for delaunator::Point {
    fn from(p: Point) -> Self {
        delaunator::Point {
            x: p.x as f64,
            y: p.y as f64,
        }
    }
}

impl From<&Point> for delaunator::Point {
    fn from(p: &Point) -> Self {
        delaunator::Point::from(*p)
    }
}
