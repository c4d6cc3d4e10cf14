#![no_main]

// Checks every mean color extraction implementation against the scalar reference, and that
// both groups add up to the whole block.

use cellquant::bench::mean_colors::*;
use cellquant::cpu_detect::*;
use cellquant::{extract_cell_mean_colors, CoverageMask, PixelBlock};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub rgba: [u8; 256],
    pub bitmap: u64,
}

fuzz_target!(|input: Input| {
    let block = PixelBlock::from_rgba_bytes(&input.rgba);
    let mask = CoverageMask::from_bitmap(input.bitmap);

    let expected = extract_cell_mean_colors_generic(&block, &mask);
    assert_eq!(extract_cell_mean_colors(&block, &mask), expected, "dispatched");

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        if has_sse2() {
            let actual = unsafe { extract_cell_mean_colors_sse2(&block, &mask) };
            assert_eq!(actual, expected, "SSE2");
        }

        if has_avx2() {
            let actual = unsafe { extract_cell_mean_colors_avx2(&block, &mask) };
            assert_eq!(actual, expected, "AVX2");
        }
    }

    let [bg, fg] = expected;
    let total = (bg + fg).ch.map(|c| c as i32);
    assert_eq!(total, block.channel_sums());
});
