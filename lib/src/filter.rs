use image::{imageops, RgbImage};

// Both kernels are normalized by their sum; FIND_EDGES sums to zero and is applied as is.
const SHARPEN: [f32; 9] = [-2.0, -2.0, -2.0, -2.0, 32.0, -2.0, -2.0, -2.0, -2.0];
const FIND_EDGES: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0];

/// Apply a 3x3 kernel to the interior; the one-pixel border is copied from `img` unchanged.
fn convolve(img: &RgbImage, kernel: &[f32; 9]) -> RgbImage {
    let (width, height) = img.dimensions();
    let mut out = imageops::filter3x3(img, kernel);

    for (x, y, pixel) in img.enumerate_pixels() {
        if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
            out.put_pixel(x, y, *pixel);
        }
    }

    out
}

/// Sharpen the image and extract edge magnitudes. The result has the same size as `img`,
/// bright pixels mark strong edges. Border pixels keep the source color.
pub fn edge_map(img: &RgbImage) -> RgbImage {
    convolve(&convolve(img, &SHARPEN), &FIND_EDGES)
}
