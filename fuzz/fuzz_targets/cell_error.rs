#![no_main]

// Checks every cell error implementation against the scalar reference, and that the
// synthesized bitmap never scores worse than the fuzzed one.

use cellquant::bench::cell_error::*;
use cellquant::cpu_detect::*;
use cellquant::{calc_cell_bitmap, calc_cell_error, ColorPair, CoverageMask, PixelBlock};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub rgba: [u8; 256],
    pub fg: u32,
    pub bg: u32,
    pub bitmap: u64,
}

fuzz_target!(|input: Input| {
    let block = PixelBlock::from_rgba_bytes(&input.rgba);
    let pair = ColorPair::new(input.fg.into(), input.bg.into());
    let mask = CoverageMask::from_bitmap(input.bitmap);

    let expected = calc_cell_error_generic(&block, &pair, &mask);
    assert_eq!(calc_cell_error(&block, &pair, &mask), expected, "dispatched");

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        if has_sse2() {
            assert_eq!(unsafe { calc_cell_error_sse2(&block, &pair, &mask) }, expected, "SSE2");
        }

        if has_avx2() {
            assert_eq!(unsafe { calc_cell_error_avx2(&block, &pair, &mask) }, expected, "AVX2");
        }
    }

    let best = CoverageMask::from_bitmap(calc_cell_bitmap(&block, &pair));
    assert!(
        calc_cell_error(&block, &pair, &best) <= expected,
        "synthesized bitmap scored worse than {:#018X}",
        input.bitmap
    );
});
