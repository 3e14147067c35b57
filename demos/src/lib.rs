//! Command line options and the frame loop shared by the sketches.
//!
//! Each sketch renders an animated sphere into a sequence of PPM images,
//! `<out>/<name>-<frame>.ppm`, which can be assembled into a video or GIF
//! with an external tool.

use std::f32::consts::TAU;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::{info, trace};

use re::math::Color3;
use re::render::{Shader, Stats, render};
use re::util::{buf::Buf2, pnm::save_ppm};
use re_geom::sphere::{Equirect, Orthographic};

/// Options common to all sketches.
#[derive(Clone, Debug, Args)]
pub struct Anim {
    /// Width of the frames in pixels.
    #[arg(long, default_value_t = 540)]
    pub width: usize,
    /// Height of the frames in pixels.
    #[arg(long, default_value_t = 540)]
    pub height: usize,
    /// Frames per second.
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,
    /// Length of the loop in seconds.
    #[arg(long, default_value_t = 30.0)]
    pub duration: f32,
    /// Number of frames to render, default the whole loop.
    #[arg(long)]
    pub frames: Option<usize>,
    /// Full turns of the sphere per loop, default depends on the sketch.
    #[arg(long)]
    pub spin: Option<f32>,
    /// How the sphere is projected to the image.
    #[arg(long, value_enum, default_value_t = View::Sphere)]
    pub view: View,
    /// Directory to write the frames to.
    #[arg(long, short, default_value = "frames")]
    pub out: PathBuf,
}

/// Projection of the sphere to the image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// The rotating sphere seen from the front.
    #[default]
    Sphere,
    /// The whole texture of the sphere, unrotated.
    Equirect,
}

/// Maps frame numbers to animation time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Timeline {
    pub fps: f32,
    pub duration: f32,
}

impl Timeline {
    /// Returns the number of frames in one loop.
    pub fn frames(&self) -> usize {
        (self.duration * self.fps).round().max(0.0) as usize
    }
    /// Returns the time of `frame` in seconds.
    pub fn time(&self, frame: usize) -> f32 {
        frame as f32 / self.fps
    }
    /// Returns how far into the loop `frame` is, in [0, 1).
    pub fn playhead(&self, frame: usize) -> f32 {
        (self.time(frame) / self.duration).rem_euclid(1.0)
    }
    /// Returns the rotation of a sphere making `spin` turns per loop.
    pub fn rotation(&self, frame: usize, spin: f32) -> f32 {
        self.playhead(frame) * TAU * spin
    }
}

impl Anim {
    pub fn timeline(&self) -> Timeline {
        Timeline { fps: self.fps, duration: self.duration }
    }

    /// Renders the frames of sketch `name`.
    ///
    /// `shader_at` is called with the time of each frame and returns the
    /// shader to render that frame with.
    ///
    /// # Errors
    /// If the output directory cannot be created or a frame cannot be
    /// written.
    pub fn run<Sh, F>(
        &self,
        name: &str,
        background: Color3,
        mut shader_at: F,
    ) -> Result<Stats>
    where
        Sh: Shader,
        F: FnMut(f32) -> Sh,
    {
        anyhow::ensure!(
            self.fps > 0.0 && self.duration > 0.0,
            "fps and duration must be positive"
        );
        fs::create_dir_all(&self.out).with_context(|| {
            format!("creating output directory {}", self.out.display())
        })?;

        let timeline = self.timeline();
        let frames = self.frames.unwrap_or_else(|| timeline.frames());
        let spin = self.spin.unwrap_or(1.0);
        let mut buf = Buf2::new_default(self.width, self.height);
        let mut total = Stats::new();

        for frame in 0..frames {
            let t = timeline.time(frame);
            trace!(
                "frame {frame}: t = {t:.3}s, playhead {:.3}",
                timeline.playhead(frame)
            );
            let shader = shader_at(t);
            let stats = match self.view {
                View::Sphere => {
                    let rot = timeline.rotation(frame, spin);
                    let surface = Orthographic::new(rot);
                    render(&surface, &shader, background, &mut buf)
                }
                View::Equirect => {
                    render(&Equirect, &shader, background, &mut buf)
                }
            };

            let path = self.out.join(format!("{name}-{frame:04}.ppm"));
            save_ppm(&path, &buf)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("{} at {t:.2}s: {stats}", path.display());
            total += stats;
        }
        info!("{name}: {frames} frames, {total}");
        Ok(total)
    }
}
