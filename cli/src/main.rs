use anyhow::Result;
use clap::Parser;
use image::{ImageFormat, RgbImage};
use log::info;
use lowpoly::canvas;
use lowpoly::Options;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{Cursor, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Turn an image into flat shaded triangles")]
pub struct Args {
    #[arg(long, short)]
    input: PathBuf,

    #[arg(long, short)]
    output: PathBuf,

    /// JSON file with sampler options, flags below take precedence
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Number of jittered lattice points [default: 300]
    #[arg(long, short)]
    num_points: Option<usize>,

    /// Grayscale level above which edge pixels become candidates [default: 172]
    #[arg(long)]
    edge_threshold: Option<f64>,

    /// Probability of dropping an edge candidate [default: 0.98]
    #[arg(long)]
    edge_ratio: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Also write the triangles as SVG
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Also write the triangles and their colors as JSON
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Mark the sampled points in the output
    #[arg(long)]
    draw_points: bool,
}

impl Args {
    fn options(&self) -> Result<Options> {
        let mut options = match &self.config {
            Some(path) => serde_json::from_reader(std::fs::File::open(path)?)?,
            None => Options::default(),
        };

        if let Some(point_count) = self.num_points {
            options.point_count = point_count;
        }

        if let Some(edge_threshold) = self.edge_threshold {
            options.edge_threshold = edge_threshold;
        }

        if let Some(edge_ratio) = self.edge_ratio {
            options.edge_ratio = edge_ratio;
        }

        Ok(options)
    }
}

fn encode(img: &RgbImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format)?;
    Ok(bytes)
}

/// Create every file first and only then fill them. If any file cannot be created, the ones
/// created so far are removed again.
fn write_outputs(outputs: &[(PathBuf, Vec<u8>)]) -> Result<()> {
    let mut files = Vec::with_capacity(outputs.len());

    for (path, _) in outputs {
        match File::create(path) {
            Ok(file) => files.push(file),
            Err(err) => {
                for (created, _) in &outputs[..files.len()] {
                    let _ = std::fs::remove_file(created);
                }

                return Err(err.into());
            }
        }
    }

    for (mut file, (path, bytes)) in files.into_iter().zip(outputs) {
        file.write_all(bytes)?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = args.options()?;

    let img = image::open(&args.input)?.into_rgb8();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let scene = lowpoly::build_scene(&img, &options, &mut rng)?;

    info!(
        "{} points, {} triangles",
        scene.points.len(),
        scene.facets.len()
    );

    let mut out = scene.draw();

    if args.draw_points {
        canvas::draw_points(&mut out, &scene.points, canvas::WHITE);
    }

    // Nothing is written unless every output encodes and every file can be created.
    let format = ImageFormat::from_path(&args.output)?;
    let mut outputs = vec![(args.output.clone(), encode(&out, format)?)];

    if let Some(path) = &args.svg {
        let points: &[lowpoly::Point] = if args.draw_points {
            &scene.points
        } else {
            &[]
        };

        let document = lowpoly::svg::document(
            &scene.facets,
            points,
            "white",
            scene.width,
            scene.height,
        );
        outputs.push((path.clone(), document.to_string().into_bytes()));
    }

    if let Some(path) = &args.dump {
        outputs.push((path.clone(), serde_json::to_vec(&scene.facets)?));
    }

    write_outputs(&outputs)?;

    Ok(())
}
