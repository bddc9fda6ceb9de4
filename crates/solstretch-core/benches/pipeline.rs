//! Benchmarks for solstretch-core pipeline operations
//!
//! Run with: cargo bench -p solstretch-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use solstretch_core::models::{EnhanceOptions, TileGrid};
use solstretch_core::pipeline::{
    enhance, equalize_local_contrast, stretch_perceptual, subtract_background, RgbImage,
};

/// Generate a synthetic test image with smooth illumination and local detail
fn generate_test_image(width: u32, height: u32) -> RgbImage {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let fx = x as f32 / width as f32;
            let fy = y as f32 / height as f32;

            // Smooth gradient plus a checkered detail signal
            let base = 60.0 + 120.0 * fx + 40.0 * fy;
            let detail = if (x / 4 + y / 4) % 2 == 0 { 18.0 } else { -18.0 };

            data.push((base + detail).clamp(0.0, 255.0) as u8);
            data.push((base * 0.8 + detail).clamp(0.0, 255.0) as u8);
            data.push((base * 0.6 - detail).clamp(0.0, 255.0) as u8);
        }
    }
    RgbImage::new(width, height, data).unwrap()
}

fn bench_background(c: &mut Criterion) {
    let mut group = c.benchmark_group("background");

    for size in [256u32, 512, 1024].iter() {
        let image = generate_test_image(*size, *size);
        group.throughput(Throughput::Elements((*size as u64) * (*size as u64)));
        group.bench_with_input(
            BenchmarkId::new("subtract_background", format!("{}x{}", size, size)),
            &image,
            |b, img| {
                b.iter(|| subtract_background(black_box(img), black_box(10.0)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_stretch(c: &mut Criterion) {
    let mut group = c.benchmark_group("stretch");

    for size in [256u32, 512, 1024].iter() {
        let image = generate_test_image(*size, *size);
        group.throughput(Throughput::Elements((*size as u64) * (*size as u64)));
        group.bench_with_input(
            BenchmarkId::new("stretch_perceptual", format!("{}x{}", size, size)),
            &image,
            |b, img| {
                b.iter(|| stretch_perceptual(black_box(img), black_box(1.0), black_box(99.0)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_equalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("equalize");

    for size in [256u32, 512, 1024].iter() {
        let image = generate_test_image(*size, *size);
        group.throughput(Throughput::Elements((*size as u64) * (*size as u64)));
        group.bench_with_input(
            BenchmarkId::new("equalize_local_contrast", format!("{}x{}", size, size)),
            &image,
            |b, img| {
                b.iter(|| {
                    equalize_local_contrast(black_box(img), black_box(2.0), TileGrid::Grid8)
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    let options = EnhanceOptions::default();
    for size in [256u32, 512].iter() {
        let image = generate_test_image(*size, *size);
        group.throughput(Throughput::Elements((*size as u64) * (*size as u64)));
        group.bench_with_input(
            BenchmarkId::new("enhance", format!("{}x{}", size, size)),
            &image,
            |b, img| {
                b.iter(|| enhance(black_box(img), black_box(&options)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_background,
    bench_stretch,
    bench_equalize,
    bench_full_pipeline
);
criterion_main!(benches);
