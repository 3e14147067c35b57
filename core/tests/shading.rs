use stipple_core::prelude::*;
use stipple_core::util::pnm::{encode_ppm, read_pnm};

/// A flat square viewed head-on, with `uv` and `pos` both in [0, 1].
fn square(px: Point2, (w, h): (usize, usize)) -> Option<Surfel> {
    let uv = pt2(px.x() / w as f32, px.y() / h as f32);
    Some(Surfel {
        uv,
        pos: pt3(uv.x(), uv.y(), 0.0),
        normal: vec3(0.0, 0.0, 1.0),
        view: vec3(0.0, 0.0, 1.0),
    })
}

/// A disc of radius 0.4 centered in the image.
fn disc(px: Point2, dims: (usize, usize)) -> Option<Surfel> {
    let s = square(px, dims)?;
    (s.uv.distance(&pt2(0.5, 0.5)) < 0.4).then_some(s)
}

const BASE: Color3 = rgb(0x22, 0x33, 0x55);
const ACCENT: Color3 = rgb(0xFF, 0xFF, 0xFF);
const BG: Color3 = rgb(0x88, 0x99, 0xCC);

fn material<F: DistanceField>(field: F, mask: Mask) -> DotMaterial<F> {
    DotMaterial {
        mask,
        base: BASE.to_color3f(),
        accent: ACCENT.to_color3f(),
        ..DotMaterial::new(field)
    }
}

#[test]
fn single_point_scenario() {
    let pts = Points::new([pt3(0.0, 0.0, 0.0)]).unwrap();
    let mask = Mask {
        threshold: 0.25,
        noise: Noise::NONE,
        polarity: Polarity::Outside,
    };
    let pos = pt3(0.3, 0.0, 0.0);

    for t in [0.0, 1.0, 29.5] {
        let m = mask.eval(&pts, pos, t, Footprint::new(0.005, 0.005));
        assert!(m > 0.999, "{m}");
    }
    assert_eq!(mask.eval(&pts, pt3(0.0, 0.0, 0.0), 0.0, Footprint::NONE), 0.0);
    assert_eq!(mask.eval(&pts, pt3(0.0, 0.0, 0.25), 0.0, Footprint::NONE), 0.5);
}

#[test]
fn grid_render_has_both_colors() {
    let mat = material(
        Grid::default(),
        Mask { polarity: Polarity::Inside, ..Mask::default() },
    );
    let mut buf = Buf2::new_default(256, 128);

    let stats = render(&square, &mat, BG, &mut buf);

    assert_eq!(stats.covered, 256 * 128);
    assert_eq!(stats.missed, 0);
    assert!(buf.data().contains(&BASE));
    assert!(buf.data().contains(&ACCENT));
    assert!(!buf.data().contains(&BG));
}

#[test]
fn points_render_with_rim_and_background() {
    let pts = Points::new([
        pt3(0.5, 0.5, 0.0),
        pt3(0.3, 0.3, 0.0),
        pt3(0.7, 0.6, 0.0),
    ])
    .unwrap();
    let mut mat = material(
        pts,
        Mask {
            threshold: 0.05,
            noise: Noise::NONE,
            polarity: Polarity::Inside,
        },
    );
    mat.rim = Some(Rim::default());
    let mut buf = Buf2::new_default(100, 100);

    let stats = render(&disc, &mat, BG, &mut buf);

    assert!(stats.covered > 0 && stats.missed > 0, "{stats}");
    assert_eq!(stats.pixels(), 100 * 100);
    // Corners are outside the disc
    assert_eq!(buf[0][0], BG);
    assert_eq!(buf[99][99], BG);
    // Head-on, so no rim: exact colors inside and outside the dots
    assert_eq!(buf[50][50], ACCENT);
    assert_eq!(buf[50][20], BASE);
}

#[test]
fn antialiased_edges_blend_between_colors() {
    let pts = Points::new([pt3(0.5, 0.5, 0.0)]).unwrap();
    let mat = material(
        pts,
        Mask {
            threshold: 0.3,
            noise: Noise::NONE,
            polarity: Polarity::Inside,
        },
    );
    let mut buf = Buf2::new_default(64, 64);
    render(&square, &mat, BG, &mut buf);

    let intermediate = buf
        .data()
        .iter()
        .filter(|&&c| c != BASE && c != ACCENT)
        .count();
    // Roughly one pixel wide ring around a circle of radius 0.3 * 64 px
    assert!(intermediate > 50 && intermediate < 400, "{intermediate}");
}

#[test]
fn frames_without_noise_are_identical() {
    let mask = Mask { noise: Noise::NONE, ..Mask::default() };
    let mut mat = material(Grid::default(), mask);
    let mut a = Buf2::new_default(48, 24);
    let mut b = Buf2::new_default(48, 24);

    mat.time = 0.0;
    render(&square, &mat, BG, &mut a);
    mat.time = 12.25;
    render(&square, &mat, BG, &mut b);

    assert_eq!(a, b);
}

#[test]
fn frames_with_noise_differ() {
    let mut mat = material(Grid::default(), Mask::default());
    let mut a = Buf2::new_default(96, 48);
    let mut b = Buf2::new_default(96, 48);

    mat.time = 0.0;
    render(&square, &mat, BG, &mut a);
    mat.time = 0.5;
    render(&square, &mat, BG, &mut b);

    assert_ne!(a, b);
}

#[test]
fn rendered_frame_survives_ppm_round_trip() {
    let mat = material(Grid::default(), Mask::default());
    let mut buf = Buf2::new_default(32, 16);
    render(&disc, &mat, BG, &mut buf);

    let bytes = encode_ppm(&buf);
    assert_eq!(read_pnm(&bytes), Ok(buf));
}
