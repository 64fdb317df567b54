//! Benchmarks for imagelib transforms and color export.
//!
//! Run with: `cargo bench -p imagelib-bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use imagelib_core::{Bgra, Image};
use imagelib_ops::ImageOps;
use std::hint::black_box;

const SIZES: [u32; 3] = [256, 1024, 2048];

fn gray(size: u32) -> Image<u8> {
    Image::from_fn(size, size, |row, col| (row ^ col) as u8)
}

fn color(size: u32) -> Image<Bgra> {
    Image::from_fn(size, size, |row, col| Bgra::new(row as u8, col as u8, 0, 255))
}

/// Benchmark geometric transforms on 8-bit grayscale images.
fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for size in SIZES {
        let img = gray(size);
        group.throughput(Throughput::Elements(img.len() as u64));

        group.bench_with_input(BenchmarkId::new("flip_x", size), &img, |b, i| {
            b.iter(|| black_box(i).flip_x())
        });

        group.bench_with_input(BenchmarkId::new("flip_y", size), &img, |b, i| {
            b.iter(|| black_box(i).flip_y())
        });

        group.bench_with_input(BenchmarkId::new("transpose", size), &img, |b, i| {
            b.iter(|| black_box(i).transpose())
        });

        group.bench_with_input(BenchmarkId::new("crop_half", size), &img, |b, i| {
            b.iter(|| black_box(i).crop(size / 4, size / 4, size / 2, size / 2))
        });

        group.bench_with_input(BenchmarkId::new("pad_double", size), &img, |b, i| {
            b.iter(|| black_box(i).pad(size * 2, size * 2))
        });
    }

    group.finish();
}

/// Benchmark nearest-neighbor resampling.
fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");

    for size in SIZES {
        let img = gray(size);
        group.throughput(Throughput::Elements(img.len() as u64));

        group.bench_with_input(BenchmarkId::new("upsample", size), &img, |b, i| {
            b.iter(|| black_box(i).upsample())
        });

        group.bench_with_input(BenchmarkId::new("downsample", size), &img, |b, i| {
            b.iter(|| black_box(i).downsample())
        });
    }

    group.finish();
}

/// Benchmark BGR/BGRA export.
fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    for size in SIZES {
        let g = gray(size);
        let rgba = color(size);
        group.throughput(Throughput::Elements(g.len() as u64));

        group.bench_with_input(BenchmarkId::new("gray_to_bgra", size), &g, |b, i| {
            b.iter(|| black_box(i).to_bgra())
        });

        group.bench_with_input(BenchmarkId::new("gray_to_bgr", size), &g, |b, i| {
            b.iter(|| black_box(i).to_bgr())
        });

        group.bench_with_input(BenchmarkId::new("bgra_to_pixel_color", size), &rgba, |b, i| {
            b.iter(|| black_box(i).to_pixel_color())
        });

        group.bench_with_input(BenchmarkId::new("indexed_bgra", size), &rgba, |b, i| {
            b.iter(|| {
                let mut sum = 0u64;
                black_box(i).to_indexed_bgra(|idx, c| sum += idx as u64 ^ c.b as u64);
                sum
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transforms, bench_resample, bench_export);
criterion_main!(benches);
