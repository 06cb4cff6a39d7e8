//! Benchmarks for the quicklook display pipeline.
//!
//! Run with: cargo bench --package quicklook --bench render_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use colormap::Cubehelix;
use quicklook::reduce::reduce_to_plane;
use quicklook::render::{ColorMapping, Interpolation, Renderer};
use quicklook::RasterRenderer;
use test_utils::ramp_volume;

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for depth in [8, 64, 256] {
        let vol = ramp_volume(&[depth, 256, 256]);
        group.bench_with_input(BenchmarkId::new("volume", depth), &vol, |b, vol| {
            b.iter(|| reduce_to_plane(black_box(vol.view())).unwrap());
        });
    }

    group.finish();
}

fn bench_gradient_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient_raster");
    let cmap = Cubehelix::default();

    for size in [64usize, 256, 512] {
        let vol = ramp_volume(&[3, size, size]);
        let plane = reduce_to_plane(vol.view()).unwrap();

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("nearest", size), &plane, |b, plane| {
            let mut renderer = RasterRenderer::new();
            b.iter(|| {
                renderer
                    .image(
                        black_box(*plane),
                        &ColorMapping::Sequential(&cmap),
                        Interpolation::Nearest,
                    )
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_png_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("png_encode");
    let cmap = Cubehelix::default();

    for size in [256usize, 512] {
        let vol = ramp_volume(&[3, size, size]);
        let plane = reduce_to_plane(vol.view()).unwrap();
        let mut renderer = RasterRenderer::new();
        let frame = renderer
            .image(plane, &ColorMapping::Sequential(&cmap), Interpolation::Nearest)
            .unwrap();

        group.throughput(Throughput::Bytes(frame.pixels().len() as u64));
        group.bench_with_input(BenchmarkId::new("auto", size), &frame, |b, frame| {
            b.iter(|| frame.to_png().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduce, bench_gradient_raster, bench_png_encode);
criterion_main!(benches);
