#![no_main]

// Checks every bitmap synthesis implementation against the scalar reference.

use cellquant::bench::cell_bitmap::*;
use cellquant::cpu_detect::*;
use cellquant::{calc_cell_bitmap, ColorPair, PixelBlock};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub rgba: [u8; 256],
    pub fg: u32,
    pub bg: u32,
}

fuzz_target!(|input: Input| {
    let block = PixelBlock::from_rgba_bytes(&input.rgba);
    let pair = ColorPair::new(input.fg.into(), input.bg.into());

    let expected = calc_cell_bitmap_generic(&block, &pair);
    assert_eq!(calc_cell_bitmap(&block, &pair), expected, "dispatched");

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        if has_sse2() {
            assert_eq!(unsafe { calc_cell_bitmap_sse2(&block, &pair) }, expected, "SSE2");
        }

        if has_avx2() {
            assert_eq!(unsafe { calc_cell_bitmap_avx2(&block, &pair) }, expected, "AVX2");
        }
    }
});
