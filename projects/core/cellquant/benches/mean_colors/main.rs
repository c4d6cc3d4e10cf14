use cellquant::bench::color_accum::*;
use cellquant::bench::mean_colors::*;
use cellquant::cpu_detect::*;
use cellquant::{Color8888, ColorAccum, CoverageMask, PixelBlock, PIXELS_PER_CELL};
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

type MeanColorsFn = unsafe fn(&PixelBlock, &CoverageMask) -> [ColorAccum; 2];
type DivScalarFn = unsafe fn(&mut ColorAccum, u16);

fn generate_input() -> Vec<(PixelBlock, CoverageMask)> {
    let mut state = 0xD1B5_4A32_D192_ED03_u64;
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
            (block, CoverageMask::from_bitmap(next()))
        })
        .collect()
}

/// Extracts the accumulators and divides them into means, the way a renderer uses both kernels.
fn bench_implementation(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    extract: MeanColorsFn,
    divide: DivScalarFn,
    input: &[(PixelBlock, CoverageMask)],
) {
    group.bench_with_input(BenchmarkId::new(name, input.len()), input, |b, input| {
        b.iter(|| {
            for (block, mask) in input.iter() {
                let foreground_count = mask.foreground_count() as u16;
                unsafe {
                    let [mut bg, mut fg] = extract(black_box(block), black_box(mask));
                    divide(&mut bg, PIXELS_PER_CELL as u16 - foreground_count);
                    divide(&mut fg, foreground_count);
                    black_box((bg, fg));
                }
            }
        })
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mean Colors");
    let input = generate_input();

    group.throughput(criterion::Throughput::Elements(NUM_CELLS as u64));
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(10));

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        if has_sse2() {
            bench_implementation(
                &mut group,
                "sse2",
                extract_cell_mean_colors_sse2,
                div_scalar_sse2,
                &input,
            );
        }

        if has_avx2() {
            bench_implementation(
                &mut group,
                "avx2",
                extract_cell_mean_colors_avx2,
                div_scalar_sse2,
                &input,
            );
        }
    }

    bench_implementation(
        &mut group,
        "generic",
        extract_cell_mean_colors_generic,
        div_scalar_generic,
        &input,
    );
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
