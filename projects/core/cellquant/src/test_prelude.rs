//! Common test imports and utilities for the cell kernel tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase, plus the shared harness which
//! checks every SIMD implementation against the generic (scalar) reference.
#![allow(unused_imports)]
#![allow(dead_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{format, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub(crate) use crate::color_8888::RGB_MASK_U32;
pub use crate::coverage_mask::{BACKGROUND_WORD, FOREGROUND_WORD};
pub use crate::pixel_block::PIXELS_PER_CELL;
pub use crate::reciprocal::{reciprocal, MAX_DIVISOR, RECIPROCALS};
pub use crate::{Color8888, ColorAccum, ColorPair, CoverageMask, PixelBlock};

#[allow(unused_imports)] // Might be unused in some CPU architectures, and that's ok.
pub use crate::cpu_detect::*;

// Re-export super for convenience in test modules
pub use super::*;

/// Number of randomly generated inputs each implementation is checked against.
pub(crate) const NUM_RANDOM_CASES: u64 = 512;

/// Small xorshift64* generator, so every test run sees the same inputs.
pub(crate) struct TestRng(u64);

impl TestRng {
    pub(crate) fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift, so force the state to be odd.
        Self(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1)
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    pub(crate) fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }

    pub(crate) fn next_color(&mut self) -> Color8888 {
        let [r, g, b, a, ..] = self.next_u64().to_ne_bytes();
        Color8888::new(r, g, b, a)
    }
}

/// Generates a block of random pixels.
pub(crate) fn generate_random_block(seed: u64) -> PixelBlock {
    let mut rng = TestRng::new(seed);
    let mut block = PixelBlock::default();
    for pixel in block.pixels.iter_mut() {
        *pixel = rng.next_color();
    }
    block
}

/// Generates a block of pixels clustered around two random colors, which is what real
/// cells (an edge between two regions) tend to look like.
pub(crate) fn generate_two_tone_block(seed: u64) -> PixelBlock {
    let mut rng = TestRng::new(seed);
    let tones = [rng.next_color(), rng.next_color()];
    let mut block = PixelBlock::default();
    for pixel in block.pixels.iter_mut() {
        let tone = tones[(rng.next_u8() & 1) as usize];
        let jitter = |c: u8, rng: &mut TestRng| c.saturating_add(rng.next_u8() & 7);
        *pixel = Color8888::new(
            jitter(tone.r, &mut rng),
            jitter(tone.g, &mut rng),
            jitter(tone.b, &mut rng),
            tone.a,
        );
    }
    block
}

/// Blocks made of channel extremes, which expose any wraparound in difference computations.
pub(crate) fn generate_extreme_blocks() -> Vec<PixelBlock> {
    let black = Color8888::new(0, 0, 0, 0);
    let white = Color8888::new(255, 255, 255, 255);
    let mut checkerboard = PixelBlock::new(black);
    for (x, pixel) in checkerboard.pixels.iter_mut().enumerate() {
        if (x + x / 8) % 2 == 1 {
            *pixel = white;
        }
    }

    vec![
        PixelBlock::new(black),
        PixelBlock::new(white),
        PixelBlock::new(Color8888::new(255, 0, 255, 0)),
        checkerboard,
    ]
}

/// Every block the reference comparisons are run on.
pub(crate) fn generate_test_blocks() -> Vec<PixelBlock> {
    let mut blocks = generate_extreme_blocks();
    for seed in 0..NUM_RANDOM_CASES {
        blocks.push(if seed % 2 == 0 {
            generate_random_block(seed)
        } else {
            generate_two_tone_block(seed)
        });
    }
    blocks
}

/// Generates a random color pair.
pub(crate) fn generate_color_pair(seed: u64) -> ColorPair {
    let mut rng = TestRng::new(seed ^ 0xC0_10_12);
    ColorPair::new(rng.next_color(), rng.next_color())
}

/// Color pairs made of channel extremes.
pub(crate) fn generate_extreme_pairs() -> Vec<ColorPair> {
    let black = Color8888::new(0, 0, 0, 0);
    let white = Color8888::new(255, 255, 255, 255);
    vec![
        ColorPair::new(black, white),
        ColorPair::new(white, black),
        ColorPair::new(white, white),
        ColorPair::new(black, black),
    ]
}

/// Generates a random coverage bitmap.
pub(crate) fn generate_bitmap(seed: u64) -> u64 {
    TestRng::new(seed ^ 0xB17_3A9).next_u64()
}

/// Bitmaps with regular structure, similar to the shapes of real glyphs.
pub(crate) const SHAPED_BITMAPS: [u64; 8] = [
    0,
    u64::MAX,
    0xFFFF_FFFF_0000_0000, // upper half block
    0x0F0F_0F0F_0F0F_0F0F, // right half block
    0xAA55_AA55_AA55_AA55, // checkerboard
    0x8000_0000_0000_0001, // opposite corners
    0x1818_1818_1818_1818, // vertical bar
    0x0000_00FF_FF00_0000, // horizontal bar
];

/// Every mask the reference comparisons are run on, paired with a block seed.
pub(crate) fn generate_test_bitmaps() -> Vec<u64> {
    let mut bitmaps = SHAPED_BITMAPS.to_vec();
    for seed in 0..NUM_RANDOM_CASES {
        bitmaps.push(generate_bitmap(seed));
    }
    bitmaps
}

/// Generates a palette of `len` random colors.
pub(crate) fn generate_palette(len: usize, seed: u64) -> Vec<Color8888> {
    let mut rng = TestRng::new(seed ^ 0x9A1E_77E);
    (0..len).map(|_| rng.next_color()).collect()
}

// ------------------------------------------------------
// Reference comparison harness for the kernel test cases
// ------------------------------------------------------

/// Signature shared by every cell error implementation.
pub(crate) type CellErrorFn = unsafe fn(&PixelBlock, &ColorPair, &CoverageMask) -> u32;

/// Signature shared by every bitmap synthesis implementation.
pub(crate) type CellBitmapFn = unsafe fn(&PixelBlock, &ColorPair) -> u64;

/// Signature shared by every mean color extraction implementation.
pub(crate) type MeanColorsFn = unsafe fn(&PixelBlock, &CoverageMask) -> [ColorAccum; 2];

/// Signature shared by every accumulator division implementation.
pub(crate) type DivScalarFn = unsafe fn(&mut ColorAccum, u16);

/// Signature shared by every palette matching implementation.
pub(crate) type PaletteMatchFn = unsafe fn(Color8888, &[Color8888]) -> usize;

/// Asserts that a cell error implementation agrees with the generic reference.
pub(crate) fn run_cell_error_reference_test(implementation: CellErrorFn, impl_name: &str) {
    let blocks = generate_test_blocks();
    let bitmaps = generate_test_bitmaps();
    let mut pairs = generate_extreme_pairs();
    pairs.extend((0..8).map(generate_color_pair));

    for (block_idx, block) in blocks.iter().enumerate() {
        let bitmap = bitmaps[block_idx % bitmaps.len()];
        let mask = CoverageMask::from_bitmap(bitmap);
        for pair in pairs.iter() {
            let expected = crate::cell_error::generic::calc_cell_error_generic(block, pair, &mask);
            let actual = unsafe { implementation(block, pair, &mask) };
            assert_eq!(
                expected, actual,
                "{impl_name} cell error differs from reference for block #{block_idx}, \
                 bitmap {bitmap:#018X}, pair {pair:?}"
            );
        }
    }
}

/// Asserts that a bitmap synthesis implementation agrees with the generic reference.
pub(crate) fn run_cell_bitmap_reference_test(implementation: CellBitmapFn, impl_name: &str) {
    let blocks = generate_test_blocks();
    let mut pairs = generate_extreme_pairs();
    pairs.extend((0..8).map(generate_color_pair));

    for (block_idx, block) in blocks.iter().enumerate() {
        // Include the block's own extremes as endpoints, so ties get exercised.
        let own_pair = ColorPair::new(block.pixels[0], block.pixels[63]);
        for pair in pairs.iter().chain(core::iter::once(&own_pair)) {
            let expected = crate::cell_bitmap::generic::calc_cell_bitmap_generic(block, pair);
            let actual = unsafe { implementation(block, pair) };
            assert_eq!(
                expected, actual,
                "{impl_name} bitmap differs from reference for block #{block_idx}, pair {pair:?}: \
                 expected {expected:#018X}, got {actual:#018X}"
            );
        }
    }
}

/// Asserts that a mean color extraction implementation agrees with the generic reference.
pub(crate) fn run_mean_colors_reference_test(implementation: MeanColorsFn, impl_name: &str) {
    let blocks = generate_test_blocks();
    let bitmaps = generate_test_bitmaps();

    for (block_idx, block) in blocks.iter().enumerate() {
        for bitmap in SHAPED_BITMAPS
            .iter()
            .chain(core::iter::once(&bitmaps[block_idx % bitmaps.len()]))
        {
            let mask = CoverageMask::from_bitmap(*bitmap);
            let expected =
                crate::mean_colors::generic::extract_cell_mean_colors_generic(block, &mask);
            let actual = unsafe { implementation(block, &mask) };
            assert_eq!(
                expected, actual,
                "{impl_name} accumulators differ from reference for block #{block_idx}, \
                 bitmap {bitmap:#018X}"
            );
        }
    }
}

/// Asserts that an accumulator division implementation agrees with the generic reference,
/// for every divisor and a spread of accumulator contents.
pub(crate) fn run_div_scalar_reference_test(implementation: DivScalarFn, impl_name: &str) {
    let mut rng = TestRng::new(0xD1_u64);
    for divisor in 0..=MAX_DIVISOR {
        let max_sum = (255 * divisor.max(1) as i32).min(i16::MAX as i32);
        let mut inputs = vec![
            ColorAccum::ZERO,
            ColorAccum::splat(max_sum as i16),
            ColorAccum::new(i16::MAX, i16::MIN, -1, 1),
        ];
        for _ in 0..16 {
            let mut ch = [0i16; 4];
            for c in ch.iter_mut() {
                *c = (rng.next_u64() % (max_sum as u64 + 1)) as i16;
            }
            inputs.push(ColorAccum { ch });
        }

        for input in inputs {
            let mut expected = input;
            crate::color_accum::generic::div_scalar_generic(&mut expected, divisor);
            let mut actual = input;
            unsafe { implementation(&mut actual, divisor) };
            assert_eq!(
                expected, actual,
                "{impl_name} division differs from reference for {input:?} / {divisor}"
            );
        }
    }
}

/// Asserts that a palette matching implementation agrees with the generic reference,
/// for palette lengths covering partial and whole vectors.
pub(crate) fn run_palette_match_reference_test(implementation: PaletteMatchFn, impl_name: &str) {
    let mut rng = TestRng::new(0x9A1_u64);
    for len in (1..=40).chain([255, 256]) {
        let palette = generate_palette(len, len as u64);
        for _ in 0..32 {
            let target = rng.next_color();
            let expected =
                crate::palette_match::generic::find_nearest_palette_index_generic(target, &palette);
            let actual = unsafe { implementation(target, &palette) };
            assert_eq!(
                expected, actual,
                "{impl_name} palette match differs from reference for {target:?} in a palette of {len}"
            );
        }
    }

    // Duplicated entries spread across lanes; the lowest index must win.
    let duplicated = vec![Color8888::new(9, 9, 9, 0); 11];
    let target = Color8888::new(0, 0, 0, 0);
    assert_eq!(
        unsafe { implementation(target, &duplicated) },
        0,
        "{impl_name} did not resolve a tie to the lowest index"
    );

    let mut late_tie = vec![Color8888::new(200, 200, 200, 0); 12];
    late_tie[6] = Color8888::new(1, 1, 1, 0);
    late_tie[9] = Color8888::new(1, 1, 1, 255);
    late_tie[5] = Color8888::new(1, 1, 1, 7);
    assert_eq!(
        unsafe { implementation(target, &late_tie) },
        5,
        "{impl_name} did not resolve a cross-lane tie to the lowest index"
    );
}
