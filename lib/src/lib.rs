pub mod canvas;
pub mod color;
pub mod error;
pub mod filter;
pub mod point;
pub mod sample;
#[cfg(feature = "svg")]
pub mod svg;
pub mod triangle;
pub mod triangulate;

pub use crate::color::Color;
pub use crate::error::Error;
pub use crate::point::Point;
pub use crate::triangle::Triangle;

use anyhow::Result;
use image::RgbImage;
use log::info;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Tuning knobs of the point sampler.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Number of jittered lattice points.
    pub point_count: usize,

    /// Grayscale level an edge pixel must exceed to become a candidate.
    pub edge_threshold: f64,

    /// Probability of dropping an edge candidate.
    pub edge_ratio: f64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            point_count: 300,
            edge_threshold: 172.0,
            edge_ratio: 0.98,
        }
    }
}

/// A triangle together with the mean color of the pixels it covers.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub triangle: Triangle,
    #[serde(with = "crate::color::rgb_serde")]
    pub color: Color,
}

/// Everything computed for one image, before it is painted.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub points: Vec<Point>,
    pub facets: Vec<Facet>,
}

impl Scene {
    pub fn draw(&self) -> RgbImage {
        canvas::draw(&self.facets, self.width, self.height)
    }
}

/// Average the source colors under each triangle. Triangles are independent and processed in
/// parallel, the result keeps the input order.
pub fn colorize(img: &RgbImage, triangles: &[Triangle]) -> Vec<Facet> {
    triangles
        .par_iter()
        .map(|triangle| Facet {
            triangle: *triangle,
            color: color::average(&triangle.sample_colors(img)),
        })
        .collect()
}

pub fn build_scene<R: Rng + ?Sized>(
    img: &RgbImage,
    options: &Options,
    rng: &mut R,
) -> Result<Scene> {
    let (width, height) = img.dimensions();

    info!("Sample points");
    let points = sample::sample_points(img, options, rng);

    info!("Triangulate {} points", points.len());
    let triangles = triangulate::triangulate(&points)?;

    info!("Colorize {} triangles", triangles.len());
    let facets = colorize(img, &triangles);

    Ok(Scene {
        width,
        height,
        points,
        facets,
    })
}

/// Low-poly rendition of `img` with the same dimensions.
pub fn render<R: Rng + ?Sized>(
    img: &RgbImage,
    options: &Options,
    rng: &mut R,
) -> Result<RgbImage> {
    let scene = build_scene(img, options, rng)?;

    info!("Draw");
    Ok(scene.draw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn solid_image_renders_solid() {
        let color = Rgb([12, 200, 99]);
        let img = RgbImage::from_pixel(4, 4, color);

        let corners = [
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 3),
            Point::new(0, 3),
        ];
        let triangles = triangulate::triangulate(&corners).unwrap();
        let facets = colorize(&img, &triangles);
        let canvas = canvas::draw(&facets, 4, 4);

        assert!(facets.iter().all(|f| f.color == color));
        assert!(canvas.pixels().all(|p| *p == color));
    }

    #[test]
    fn colorize_keeps_order() {
        let img = RgbImage::from_fn(8, 8, |x, _| {
            if x < 4 {
                Rgb([0, 0, 0])
            } else {
                Rgb([200, 0, 0])
            }
        });
        let triangles = vec![
            Triangle::new(Point::new(5, 0), Point::new(7, 7), Point::new(5, 7)),
            Triangle::new(Point::new(0, 0), Point::new(3, 0), Point::new(0, 7)),
        ];

        let facets = colorize(&img, &triangles);

        assert_eq!(facets[0].triangle, triangles[0]);
        assert_eq!(facets[0].color, Rgb([200, 0, 0]));
        assert_eq!(facets[1].color, Rgb([0, 0, 0]));
    }

    #[test]
    fn render_is_reproducible() {
        let img = RgbImage::from_fn(48, 32, |x, y| Rgb([(x * 5) as u8, (y * 7) as u8, 128]));
        let options = Options {
            point_count: 60,
            ..Options::default()
        };

        let a = render(&img, &options, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = render(&img, &options, &mut StdRng::seed_from_u64(5)).unwrap();

        assert_eq!(a.dimensions(), (48, 32));
        assert_eq!(a, b);
    }

    #[test]
    fn too_few_points_is_fatal() {
        let img = RgbImage::from_pixel(8, 8, Rgb([1, 1, 1]));
        let options = Options {
            point_count: 2,
            ..Options::default()
        };

        let err = build_scene(&img, &options, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::InvalidPointSet { .. })));
    }

    #[test]
    fn single_pixel_image_is_fatal() {
        let img = RgbImage::from_pixel(1, 1, Rgb([50, 60, 70]));

        let err = render(&img, &Options::default(), &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InvalidPointSet { points: 300 })
        );
    }

    #[test]
    fn small_images_render() {
        for &(width, height) in &[(2, 2), (3, 3), (5, 4)] {
            let img = RgbImage::from_pixel(width, height, Rgb([50, 60, 70]));
            let out = render(&img, &Options::default(), &mut StdRng::seed_from_u64(1)).unwrap();

            assert_eq!(out.dimensions(), (width, height));
        }
    }

    #[test]
    fn options_from_json() {
        let options: Options = serde_json::from_str(r#"{ "point_count": 42 }"#).unwrap();

        assert_eq!(options.point_count, 42);
        assert_eq!(options.edge_threshold, 172.0);
        assert_eq!(options.edge_ratio, 0.98);
    }

    #[test]
    fn facet_json_shape() {
        let facet = Facet {
            triangle: Triangle::new(Point::new(0, 0), Point::new(2, 0), Point::new(0, 2)),
            color: Rgb([1, 2, 3]),
        };

        let json = serde_json::to_value(&facet).unwrap();
        assert_eq!(json["color"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["triangle"]["vertices"][1], serde_json::json!({ "x": 2, "y": 0 }));

        let back: Facet = serde_json::from_value(json).unwrap();
        assert_eq!(back, facet);
    }
}
