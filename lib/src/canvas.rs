use crate::color::Color;
use crate::point::Point;
use crate::triangle::Triangle;
use crate::Facet;
use image::{Rgb, RgbImage};

pub const WHITE: Color = Rgb([255, 255, 255]);

fn edge(a: (i64, i64), b: (i64, i64), p: (i64, i64)) -> i64 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

/// Paint every pixel inside or on the outline of `triangle`. Parts outside of the canvas are
/// skipped.
pub fn fill_triangle(canvas: &mut RgbImage, triangle: &Triangle, color: Color) {
    let (width, height) = canvas.dimensions();

    if width == 0 || height == 0 {
        return;
    }

    let (min, max) = triangle.bounding_box();

    if min.x >= width || min.y >= height {
        return;
    }

    let [a, b, c] = triangle.vertices.map(|v| (v.x as i64, v.y as i64));

    for y in min.y..=max.y.min(height - 1) {
        for x in min.x..=max.x.min(width - 1) {
            let p = (x as i64, y as i64);
            let w0 = edge(a, b, p);
            let w1 = edge(b, c, p);
            let w2 = edge(c, a, p);

            if (w0 >= 0 && w1 >= 0 && w2 >= 0) || (w0 <= 0 && w1 <= 0 && w2 <= 0) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill all facets onto a black canvas in order. Later facets win on shared pixels.
pub fn draw(facets: &[Facet], width: u32, height: u32) -> RgbImage {
    let mut canvas = RgbImage::new(width, height);

    for facet in facets {
        fill_triangle(&mut canvas, &facet.triangle, facet.color);
    }

    canvas
}

/// Mark single pixels, used to inspect where points were sampled.
pub fn draw_points(canvas: &mut RgbImage, points: &[Point], color: Color) {
    let (width, height) = canvas.dimensions();

    for p in points.iter().filter(|p| p.x < width && p.y < height) {
        canvas.put_pixel(p.x, p.y, color);
    }
}
