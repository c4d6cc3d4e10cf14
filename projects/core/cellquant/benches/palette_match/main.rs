use cellquant::bench::palette_match::*;
use cellquant::cpu_detect::*;
use cellquant::Color8888;
use core::time::Duration;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

/// Number of colors matched per iteration; two per cell of a 1920x1080 image.
const NUM_TARGETS: usize = 2 * 240 * 135;

type PaletteMatchFn = unsafe fn(Color8888, &[Color8888]) -> usize;

/// The xterm 256 color palette: 16 system colors, a 6x6x6 cube and a 24 step grey ramp.
fn xterm_palette() -> Vec<Color8888> {
    const SYSTEM: [[u8; 3]; 16] = [
        [0, 0, 0],
        [128, 0, 0],
        [0, 128, 0],
        [128, 128, 0],
        [0, 0, 128],
        [128, 0, 128],
        [0, 128, 128],
        [192, 192, 192],
        [128, 128, 128],
        [255, 0, 0],
        [0, 255, 0],
        [255, 255, 0],
        [0, 0, 255],
        [255, 0, 255],
        [0, 255, 255],
        [255, 255, 255],
    ];
    const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

    let mut palette: Vec<Color8888> = SYSTEM
        .iter()
        .map(|&[r, g, b]| Color8888::opaque(r, g, b))
        .collect();
    for r in CUBE_LEVELS {
        for g in CUBE_LEVELS {
            for b in CUBE_LEVELS {
                palette.push(Color8888::opaque(r, g, b));
            }
        }
    }
    for step in 0..24u8 {
        let level = 8 + step * 10;
        palette.push(Color8888::opaque(level, level, level));
    }
    palette
}

fn generate_targets() -> Vec<Color8888> {
    let mut state = 0xA076_1D64_78BD_642F_u64;
    (0..NUM_TARGETS)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            Color8888::from_u32(state as u32)
        })
        .collect()
}

fn bench_implementation(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    implementation: PaletteMatchFn,
    targets: &[Color8888],
    palette: &[Color8888],
) {
    group.bench_with_input(
        BenchmarkId::new(name, palette.len()),
        targets,
        |b, targets| {
            b.iter(|| {
                targets.iter().fold(0usize, |acc, &target| {
                    acc ^ unsafe { implementation(black_box(target), black_box(palette)) }
                })
            })
        },
    );
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Palette Match");
    let targets = generate_targets();
    let palette = xterm_palette();

    group.throughput(criterion::Throughput::Elements(NUM_TARGETS as u64));
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(10));

    // 16 color terminals only get the system colors.
    for palette in [&palette[..16], &palette[..]] {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        {
            if has_sse2() {
                bench_implementation(
                    &mut group,
                    "sse2",
                    find_nearest_palette_index_sse2,
                    &targets,
                    palette,
                );
            }
        }

        bench_implementation(
            &mut group,
            "generic",
            find_nearest_palette_index_generic,
            &targets,
            palette,
        );
    }

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
