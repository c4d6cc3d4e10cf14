use cellquant::bench::cell_bitmap::*;
use cellquant::cpu_detect::*;
use cellquant::{Color8888, ColorPair, PixelBlock};
use core::time::Duration;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

/// Number of cells per iteration; a 1920x1080 image is 240x135 cells.
const NUM_CELLS: usize = 240 * 135;

type CellBitmapFn = unsafe fn(&PixelBlock, &ColorPair) -> u64;

fn generate_input() -> Vec<(PixelBlock, ColorPair)> {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..NUM_CELLS)
        .map(|_| {
            let mut block = PixelBlock::default();
            for pixel in block.pixels.iter_mut() {
                *pixel = Color8888::from_u32(next() as u32);
            }
            let pair = ColorPair::new(
                Color8888::from_u32(next() as u32),
                Color8888::from_u32(next() as u32),
            );
            (block, pair)
        })
        .collect()
}

fn bench_implementation(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    implementation: CellBitmapFn,
    input: &[(PixelBlock, ColorPair)],
) {
    group.bench_with_input(BenchmarkId::new(name, input.len()), input, |b, input| {
        b.iter(|| {
            input.iter().fold(0u64, |acc, (block, pair)| {
                acc ^ unsafe { implementation(black_box(block), black_box(pair)) }
            })
        })
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cell Bitmap");
    let input = generate_input();

    group.throughput(criterion::Throughput::Elements(NUM_CELLS as u64));
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(10));

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        if has_sse2() {
            bench_implementation(&mut group, "sse2", calc_cell_bitmap_sse2, &input);
        }

        if has_avx2() {
            bench_implementation(&mut group, "avx2", calc_cell_bitmap_avx2, &input);
        }
    }

    bench_implementation(&mut group, "generic", calc_cell_bitmap_generic, &input);
    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
