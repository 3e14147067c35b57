//! A rotating sphere with round dots around the vertices of a subdivided
//! icosahedron, lit by a rim highlight.

use anyhow::Result;
use clap::Parser;

use re::math::color::gray;
use re::prelude::*;
use re_geom::solids::Icosphere;
use stipple_demos::Anim;

#[derive(Debug, Parser)]
#[command(about = "Renders the icosphere dot sketch to PPM frames")]
struct Cli {
    #[command(flatten)]
    anim: Anim,
    /// Color of the sphere between the dots.
    #[arg(long, default_value = "#235")]
    color: Color3f,
    /// Radius of the dots.
    #[arg(long, default_value_t = 0.15)]
    threshold: f32,
    /// Subdivision level of the icosahedron.
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32)
            .range(..=i64::from(Icosphere::MAX_DETAIL))
    )]
    detail: u32,
    /// Strength of the rim highlight, zero to disable.
    #[arg(long, default_value_t = 0.35)]
    rim: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let points = Icosphere { detail: cli.detail, ..Icosphere::default() }
        .build()?;

    let mut mat = DotMaterial::new(points);
    mat.mask = Mask {
        threshold: cli.threshold,
        noise: Noise::NONE,
        polarity: Polarity::Inside,
    };
    mat.base = cli.color;
    mat.accent = gray(1.0);
    mat.rim = (cli.rim > 0.0).then(|| Rim {
        strength: cli.rim,
        ..Rim::default()
    });

    cli.anim.run("points", rgb(0x88, 0x99, 0xCC), |t| DotMaterial {
        time: t,
        ..mat.clone()
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_capped() {
        let cli = Cli::try_parse_from(["points", "--detail", "1023"]).unwrap();
        assert_eq!(cli.detail, Icosphere::MAX_DETAIL);
        assert!(Cli::try_parse_from(["points", "--detail", "1024"]).is_err());
        let huge = ["points", "--detail", "4294967295"];
        assert!(Cli::try_parse_from(huge).is_err());
    }
}
