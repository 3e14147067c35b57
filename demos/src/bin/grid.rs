//! A sphere covered with a stretched grid of dots whose edges wobble with
//! animated noise.

use anyhow::Result;
use clap::Parser;

use re::math::color::gray;
use re::prelude::*;
use stipple_demos::Anim;

#[derive(Debug, Parser)]
#[command(about = "Renders the noisy dot grid sketch to PPM frames")]
struct Cli {
    #[command(flatten)]
    anim: Anim,
    /// Color of the sphere between the dots.
    #[arg(long, default_value = "indigo")]
    color: Color3f,
    /// Radius of the dots, in grid cells.
    #[arg(long, default_value_t = 0.25)]
    threshold: f32,
    /// Amplitude of the noise added to the radius.
    #[arg(long, default_value_t = 0.15)]
    noise: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let mut cli = Cli::parse();
    // The grid sketch does not rotate unless asked to
    cli.anim.spin = cli.anim.spin.or(Some(0.0));

    let mut mat = DotMaterial::new(Grid::default());
    mat.mask = Mask {
        threshold: cli.threshold,
        noise: Noise { amplitude: cli.noise, ..Noise::default() },
        polarity: Polarity::Inside,
    };
    mat.base = cli.color;
    // Overbright, clamps to white
    mat.accent = gray(2.4);

    cli.anim.run("grid", rgb(0xFF, 0xFF, 0xFF), |t| DotMaterial {
        time: t,
        ..mat.clone()
    })?;
    Ok(())
}
