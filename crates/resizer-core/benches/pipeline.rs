//! Benchmarks for the resize transform.
//!
//! Run with: cargo bench -p resizer-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgb, RgbImage};
use resizer_core::pipeline::transform::{encode_jpeg, transform};
use resizer_core::{ResizeFilter, SizeSpec};

fn source_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
    encode_jpeg(&DynamicImage::ImageRgb8(img)).expect("encode fixture")
}

fn benchmark_thumbnail(c: &mut Criterion) {
    let raw = source_jpeg(1920, 1080);
    let size: SizeSpec = "50x50".parse().unwrap();

    c.bench_function("transform_1080p_to_50x50", |b| {
        b.iter(|| {
            let _ = transform(black_box(&raw), &size, ResizeFilter::Lanczos3);
        })
    });
}

fn benchmark_filters(c: &mut Criterion) {
    let raw = source_jpeg(1280, 960);
    let size: SizeSpec = "640x480".parse().unwrap();

    let mut group = c.benchmark_group("transform_filter");
    for filter in [ResizeFilter::Nearest, ResizeFilter::Triangle, ResizeFilter::Lanczos3] {
        group.bench_function(filter.as_str(), |b| {
            b.iter(|| {
                let _ = transform(black_box(&raw), &size, filter);
            })
        });
    }
    group.finish();
}

fn benchmark_encode(c: &mut Criterion) {
    let img = DynamicImage::new_rgb8(640, 480);

    c.bench_function("encode_jpeg_640x480", |b| {
        b.iter(|| {
            let _ = encode_jpeg(black_box(&img));
        })
    });
}

criterion_group!(benches, benchmark_thumbnail, benchmark_filters, benchmark_encode);
criterion_main!(benches);
