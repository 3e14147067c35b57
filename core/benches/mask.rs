//! Distance field and mask benchmarks.

use divan::Bencher;
use divan::counter::ItemsCount;
use stipple_core::prelude::*;

const N: usize = 1024;

fn uvs() -> Vec<Point2> {
    (0..N)
        .map(|i| {
            let t = i as f32 / N as f32;
            pt2(t, fract(t * 7.31))
        })
        .collect()
}

fn sphere_points() -> Vec<Point3> {
    (0..N)
        .map(|i| {
            let t = i as f32 / N as f32 * core::f32::consts::TAU;
            pt3(t.cos(), (t * 3.0).sin() * 0.5, t.sin())
        })
        .collect()
}

/// Roughly the 42 vertices of a once-subdivided icosahedron.
fn reference_points() -> Points {
    let pts = (0..42).map(|i| {
        let t = i as f32 * 2.399_963;
        let y = 1.0 - 2.0 * (i as f32 + 0.5) / 42.0;
        let r = (1.0 - y * y).sqrt();
        pt3(r * t.cos(), y, r * t.sin())
    });
    Points::new(pts).unwrap()
}

#[divan::bench]
fn simplex_noise(b: Bencher) {
    let pts = sphere_points();
    b.counter(ItemsCount::new(N))
        .bench_local(|| pts.iter().map(|&p| simplex3::noise(p)).sum::<f32>());
}

#[divan::bench]
fn grid_mask(b: Bencher) {
    let grid = Grid::default();
    let mask = Mask::default();
    let uvs = uvs();
    let fp = Footprint::new(0.002, 0.001);
    b.counter(ItemsCount::new(N)).bench_local(|| {
        uvs.iter()
            .map(|&uv| mask.eval(&grid, uv, 1.5, fp))
            .sum::<f32>()
    });
}

#[divan::bench]
fn points_mask(b: Bencher) {
    let field = reference_points();
    let mask = Mask { noise: Noise::NONE, threshold: 0.15, ..Mask::default() };
    let pts = sphere_points();
    let fp = Footprint::new(0.002, 0.001);
    b.counter(ItemsCount::new(N)).bench_local(|| {
        pts.iter()
            .map(|&p| mask.eval(&field, p, 0.0, fp))
            .sum::<f32>()
    });
}

#[divan::bench(args = [64, 256])]
fn render_grid(b: Bencher, size: usize) {
    let mat = DotMaterial::new(Grid::default());
    let surface = |px: Point2, (w, h): (usize, usize)| {
        let uv = pt2(px.x() / w as f32, px.y() / h as f32);
        Some(Surfel {
            uv,
            pos: pt3(uv.x(), uv.y(), 0.0),
            normal: vec3(0.0, 0.0, 1.0),
            view: vec3(0.0, 0.0, 1.0),
        })
    };
    let mut buf = Buf2::new_default(size, size);
    b.counter(ItemsCount::new(size * size))
        .bench_local(|| render(&surface, &mat, rgb(0, 0, 0), &mut buf));
}

fn main() {
    divan::main()
}
