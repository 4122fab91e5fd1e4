use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glam::Vec3;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sphere_tracer::camera::{Camera, CameraConfig};
use sphere_tracer::scenes;
use sphere_tracer::world::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SceneKind {
    /// Ground, matte, hollow glass and metal spheres
    Showcase,
    /// The random sphere field
    Random,
}

#[derive(Parser, Debug)]
#[clap(about = "Offline sphere ray tracer")]
struct CliArguments {
    #[clap(long, value_enum, default_value = "showcase")]
    scene: SceneKind,

    /// Output file, format picked from the extension. `-` writes PPM to stdout.
    #[clap(short = 'o', long, default_value = "image.png")]
    output: PathBuf,

    /// Seed for reproducible renders
    #[clap(long)]
    seed: Option<u64>,

    #[clap(short = 'w', long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    #[clap(long, value_parser = parse_positive)]
    aspect_ratio: Option<f32>,

    #[clap(short = 's', long)]
    samples: Option<u32>,

    #[clap(short = 'd', long)]
    max_depth: Option<u32>,

    #[clap(long)]
    vfov: Option<f32>,

    #[clap(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    look_from: Option<Vec3>,

    #[clap(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    look_at: Option<Vec3>,

    #[clap(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    up: Option<Vec3>,

    #[clap(long)]
    defocus_angle: Option<f32>,

    #[clap(long)]
    focus_distance: Option<f32>,
}

impl CliArguments {
    fn camera_config(&self, mut config: CameraConfig) -> CameraConfig {
        if let Some(v) = self.width {
            config.image_width = v;
        }
        if let Some(v) = self.aspect_ratio {
            config.aspect_ratio = v;
        }
        if let Some(v) = self.samples {
            config.samples_per_pixel = v;
        }
        if let Some(v) = self.max_depth {
            config.max_depth = v;
        }
        if let Some(v) = self.vfov {
            config.vertical_fov = v;
        }
        if let Some(v) = self.look_from {
            config.look_from = v;
        }
        if let Some(v) = self.look_at {
            config.look_at = v;
        }
        if let Some(v) = self.up {
            config.up = v;
        }
        if let Some(v) = self.defocus_angle {
            config.defocus_angle = v;
        }
        if let Some(v) = self.focus_distance {
            config.focus_distance = v;
        }
        config
    }
}

fn parse_positive(s: &str) -> Result<f32, String> {
    let v = s.trim().parse::<f32>().map_err(|e| format!("{:?}: {}", s, e))?;

    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(format!("expected a positive number but got {}", v))
    }
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("{:?}: {}", p, e)))
        .collect::<Result<Vec<_>, _>>()?;

    match parts[..] {
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(format!("expected x,y,z but got {} components", parts.len())),
    }
}

fn run(args: CliArguments) -> Result<(), Box<dyn Error>> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (world, defaults): (World, CameraConfig) = match args.scene {
        SceneKind::Showcase => (scenes::materials_showcase(), scenes::materials_showcase_camera()),
        SceneKind::Random => (scenes::random_spheres(&mut rng), scenes::random_spheres_camera()),
    };
    info!("Scene {:?} with {} objects", args.scene, world.len());

    let camera = Camera::new(&args.camera_config(defaults));
    let frame = camera.render(&world, &mut rng);

    if args.output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        frame.write_ppm(&mut out)?;
        out.flush()?;
    } else {
        frame.save(&args.output)?;
        info!("Wrote {}", args.output.display());
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = CliArguments::parse();

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
