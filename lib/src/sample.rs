use crate::color::to_grayscale;
use crate::filter;
use crate::point::Point;
use crate::Options;
use image::RgbImage;
use log::debug;
use rand::Rng;

/// Spacing of the jitter lattice.
fn point_distance(width: u32, height: u32) -> f64 {
    width.min(height) as f64 / 16.0
}

/// How far the lattice reaches beyond the image, split evenly between both sides.
fn point_propagation(width: u32, height: u32) -> (f64, f64) {
    (width as f64 / 4.0, height as f64 / 4.0)
}

/// Number of lattice cells along one axis. Halves go to the even count.
fn cell_count(extent: u32, prop: f64, distance: f64) -> u64 {
    (((extent as f64 + prop) / distance).round_ties_even() as u64).max(1)
}

/// Pick `count` random lattice nodes covering the image plus a margin. Nodes falling outside
/// of the image are pulled onto its border.
pub fn generate_random<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    count: usize,
    rng: &mut R,
) -> Vec<Point> {
    let distance = point_distance(width, height);
    let (prop_x, prop_y) = point_propagation(width, height);

    let cells_x = cell_count(width, prop_x, distance);
    let cells_y = cell_count(height, prop_y, distance);

    (0..count)
        .map(|_| {
            let x = (rng.gen_range(0..cells_x) as f64 * distance - prop_x / 2.0) as i64;
            let y = (rng.gen_range(0..cells_y) as f64 * distance - prop_y / 2.0) as i64;
            Point::clamped(x, y, width, height)
        })
        .collect()
}

/// Collect pixels of the edge image brighter than `threshold`, keeping each one only if a
/// uniform draw exceeds `ratio`. The last row and column are never visited.
pub fn generate_edges<R: Rng + ?Sized>(
    edges: &RgbImage,
    threshold: f64,
    ratio: f64,
    rng: &mut R,
) -> Vec<Point> {
    let (width, height) = edges.dimensions();
    let mut points = Vec::new();

    for x in 0..width.saturating_sub(1) {
        for y in 0..height.saturating_sub(1) {
            let p = edges.get_pixel(x, y);

            if to_grayscale(p[0], p[1], p[2]) > threshold && rng.gen::<f64>() > ratio {
                points.push(Point::new(x, y));
            }
        }
    }

    points
}

/// Lattice points followed by edge points.
pub fn sample_points<R: Rng + ?Sized>(
    img: &RgbImage,
    options: &Options,
    rng: &mut R,
) -> Vec<Point> {
    let (width, height) = img.dimensions();

    let mut points = generate_random(width, height, options.point_count, rng);
    debug!("{} lattice points", points.len());

    let edges = filter::edge_map(img);
    let edge_points = generate_edges(&edges, options.edge_threshold, options.edge_ratio, rng);
    debug!("{} edge points", edge_points.len());

    points.extend(edge_points);
    points
}
