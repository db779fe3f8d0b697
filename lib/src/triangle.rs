use crate::color::Color;
use crate::point::Point;
use image::RgbImage;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Triangle {
            vertices: [a, b, c],
        }
    }

    /// Inclusive pixel bounds as `(min, max)` corners.
    pub fn bounding_box(&self) -> (Point, Point) {
        let [a, b, c] = self.vertices;

        (
            Point::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            Point::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        )
    }

    fn coordinates(&self) -> [(i64, i64); 3] {
        let [v0, v1, v2] = self.vertices;

        [
            (v0.x as i64, v0.y as i64),
            (v1.x as i64, v1.y as i64),
            (v2.x as i64, v2.y as i64),
        ]
    }

    /// Twice the signed area. Zero for degenerate triangles.
    pub fn double_area(&self) -> i64 {
        let [(x0, y0), (x1, y1), (x2, y2)] = self.coordinates();

        -y1 * x2 + y0 * (x2 - x1) + x0 * (y1 - y2) + x1 * y2
    }

    /// Barycentric inside test with strict bounds. Vertices and pixels on the edges touching
    /// the second vertex are outside, so neighbouring triangles leave a hairline of unsampled
    /// pixels between them. The open edge between the first and last vertex passes (`s == 0`).
    ///
    /// `s` and `t` share the denominator `double_area`, so the comparisons are carried out on
    /// the integer numerators with the sign of the area folded in.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let area = self.double_area();

        if area == 0 {
            return false;
        }

        let [(x0, y0), (x1, y1), (x2, y2)] = self.coordinates();
        let (x, y) = (x as i64, y as i64);
        let sign = area.signum();

        let s = sign * (x2 * y0 - x0 * y2 + (y2 - y0) * x + (x0 - x2) * y);

        if s < 0 {
            return false;
        }

        let t = sign * (x0 * y1 - x1 * y0 + (y0 - y1) * x + (x1 - x0) * y);

        t > 0 && area.abs() - s - t > 0
    }

    /// All pixels of the bounding box passing the inside test.
    pub fn pixels(&self) -> impl Iterator<Item = Point> + '_ {
        let (min, max) = self.bounding_box();

        (min.y..=max.y)
            .flat_map(move |y| (min.x..=max.x).map(move |x| Point::new(x, y)))
            .filter(move |p| self.contains(p.x, p.y))
    }

    /// Colors of `img` under every inside pixel. Coordinates past the image border are pulled
    /// back onto it. Triangles without inside pixels yield the color under the top-left corner
    /// of their bounding box, so the result is never empty.
    pub fn sample_colors(&self, img: &RgbImage) -> Vec<Color> {
        let (width, height) = img.dimensions();

        let sample = |p: Point| -> Color {
            let p = Point::clamped(p.x as i64, p.y as i64, width, height);
            *img.get_pixel(p.x, p.y)
        };

        let colors = self.pixels().map(sample).collect::<Vec<_>>();

        if colors.is_empty() {
            vec![sample(self.bounding_box().0)]
        } else {
            colors
        }
    }
}
