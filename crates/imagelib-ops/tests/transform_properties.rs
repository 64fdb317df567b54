//! Property tests for the transform engine over a grid of image shapes.

use imagelib_core::{Bgra, Image, PadAnchor, Rect, ToBgra};
use imagelib_ops::{ImageOps, OpsError, OpsResult};

#[derive(Clone, Copy, Default, PartialEq, Debug)]
struct Rgba8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ToBgra for Rgba8 {
    fn to_bgra(&self) -> Bgra {
        Bgra::new(self.b, self.g, self.r, self.a)
    }
}

const SHAPES: [(u32, u32); 8] = [(0, 0), (0, 3), (4, 0), (1, 1), (2, 2), (3, 5), (6, 4), (7, 7)];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn gradient(cols: u32, rows: u32) -> Image<u32> {
    Image::from_fn(cols, rows, |row, col| row * 1000 + col)
}

const OPS: [&str; 14] = [
    "copy",
    "crop_full",
    "pad_plus_one",
    "pad_center",
    "upsample",
    "upsample_cols",
    "upsample_rows",
    "downsample",
    "downsample_cols",
    "downsample_rows",
    "flip_x",
    "flip_y",
    "flip_xy",
    "transpose",
];

fn apply(name: &str, i: &Image<u32>) -> OpsResult<Image<u32>> {
    match name {
        "copy" => Ok(i.copy()),
        "crop_full" => i.crop_rect(i.bounds()),
        "pad_plus_one" => i.pad(i.cols() + 1, i.rows() + 1),
        "pad_center" => i.pad_anchored(i.cols() + 3, i.rows() + 2, PadAnchor::Center),
        "upsample" => i.upsample(),
        "upsample_cols" => i.upsample_cols(),
        "upsample_rows" => i.upsample_rows(),
        "downsample" => i.downsample(),
        "downsample_cols" => i.downsample_cols(),
        "downsample_rows" => i.downsample_rows(),
        "flip_x" => i.flip_x(),
        "flip_y" => i.flip_y(),
        "flip_xy" => i.flip_xy(),
        "transpose" => i.transpose(),
        other => panic!("unknown op {other}"),
    }
}

#[test]
fn results_keep_length_invariant() {
    init_tracing();
    for (cols, rows) in SHAPES {
        let src = gradient(cols, rows);
        for name in OPS {
            if let Ok(out) = apply(name, &src) {
                assert_eq!(
                    out.len(),
                    out.cols() as usize * out.rows() as usize,
                    "{name} on {cols}x{rows}"
                );
            }
        }
    }
}

#[test]
fn transforms_are_pure() {
    for (cols, rows) in SHAPES {
        let src = gradient(cols, rows);
        let before = src.clone();
        for name in OPS {
            let _ = apply(name, &src);
            assert_eq!(src, before, "{name} mutated {cols}x{rows}");
        }
        // Failing calls leave the source alone too
        let _ = src.crop(cols, rows, 1, 1);
        let _ = src.pad(cols.saturating_sub(1), rows);
        assert_eq!(src, before);
    }
}

#[test]
fn results_do_not_alias_source() {
    let src = gradient(4, 4);
    let mut out = src.crop(0, 0, 4, 4).unwrap();
    out.set(0, 0, 42).unwrap();
    assert_eq!(src[0], 0);
}

#[test]
fn flips_are_involutions() {
    for (cols, rows) in SHAPES {
        let src = gradient(cols, rows);
        assert_eq!(src.flip_x().unwrap().flip_x().unwrap(), src);
        assert_eq!(src.flip_y().unwrap().flip_y().unwrap(), src);
        assert_eq!(src.flip_xy().unwrap().flip_xy().unwrap(), src);
    }
}

#[test]
fn transpose_is_involution() {
    for (cols, rows) in SHAPES {
        let src = gradient(cols, rows);
        let t = src.transpose().unwrap();
        assert_eq!(t.dimensions(), (rows, cols));
        assert_eq!(t.transpose().unwrap(), src);
    }
}

#[test]
fn crop_of_full_bounds_is_identity() {
    for (cols, rows) in SHAPES {
        let src = gradient(cols, rows);
        assert_eq!(src.crop(0, 0, cols, rows).unwrap(), src);
    }
}

#[test]
fn upsample_then_downsample_restores() {
    for (cols, rows) in SHAPES {
        let src = gradient(cols, rows);
        assert_eq!(src.upsample_cols().unwrap().downsample_cols().unwrap(), src);
        assert_eq!(src.upsample_rows().unwrap().downsample_rows().unwrap(), src);
        assert_eq!(src.upsample().unwrap().downsample().unwrap(), src);
    }
}

#[test]
fn dimension_rules() {
    let src = gradient(6, 4);
    assert_eq!(src.upsample().unwrap().dimensions(), (12, 8));
    assert_eq!(src.upsample_cols().unwrap().dimensions(), (12, 4));
    assert_eq!(src.upsample_rows().unwrap().dimensions(), (6, 8));
    assert_eq!(src.downsample().unwrap().dimensions(), (3, 2));
    assert_eq!(src.downsample_cols().unwrap().dimensions(), (3, 4));
    assert_eq!(src.downsample_rows().unwrap().dimensions(), (6, 2));
    assert_eq!(src.flip_xy().unwrap().dimensions(), (6, 4));
    assert_eq!(src.transpose().unwrap().dimensions(), (4, 6));
}

#[test]
fn invalid_geometry_is_rejected() {
    let src = gradient(3, 5);
    assert!(matches!(
        src.crop(2, 0, 2, 1),
        Err(OpsError::InvalidRegion { .. })
    ));
    assert!(matches!(
        src.crop_rect(Rect::new(0, 5, 1, 1)),
        Err(OpsError::InvalidRegion { .. })
    ));
    assert!(matches!(src.pad(2, 5), Err(OpsError::PadTooSmall { .. })));
    assert!(matches!(src.pad(3, 4), Err(OpsError::PadTooSmall { .. })));
    assert!(matches!(
        src.downsample_cols(),
        Err(OpsError::OddDimension { .. })
    ));
    assert!(matches!(
        src.downsample_rows(),
        Err(OpsError::OddDimension { .. })
    ));
}

#[test]
fn two_by_two_scenario() {
    let img: Image<u8> = Image::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();

    assert_eq!(img.transpose().unwrap().as_slice(), &[1, 3, 2, 4]);
    assert_eq!(img.flip_x().unwrap().as_slice(), &[3, 4, 1, 2]);
    assert_eq!(img.flip_y().unwrap().as_slice(), &[2, 1, 4, 3]);

    let up = img.upsample_cols().unwrap();
    assert_eq!((up.cols(), up.rows()), (4, 2));
    assert_eq!(up.as_slice(), &[1, 1, 2, 2, 3, 3, 4, 4]);

    let cropped = img.crop(1, 0, 1, 1).unwrap();
    assert_eq!(cropped.dimensions(), (1, 1));
    assert_eq!(cropped.as_slice(), &[2]);

    let padded = img.pad(3, 2).unwrap();
    assert_eq!(padded.dimensions(), (3, 2));
    assert_eq!(padded.as_slice(), &[1, 2, 0, 3, 4, 0]);
}

#[test]
fn struct_pixels_through_pipeline() {
    let red = Rgba8 { r: 255, g: 0, b: 0, a: 255 };
    let mut img: Image<Rgba8> = Image::new(2, 1);
    img.set(0, 0, red).unwrap();

    let out = img.transpose().unwrap().pad(2, 2).unwrap();
    assert_eq!(out[(0, 0)], red);
    assert_eq!(out[(1, 0)], Rgba8::default());

    let bytes = out.to_bgra();
    assert_eq!(bytes.len(), 16);
    assert_eq!(&bytes[0..4], &[0, 0, 255, 255]);
    assert_eq!(bytes[4..].iter().filter(|&&b| b != 0).count(), 0);
}
