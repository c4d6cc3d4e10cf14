#![no_main]

// Checks every accumulator division implementation against the scalar reference, and the
// rounding bound for sums a cell can actually produce.

use cellquant::bench::color_accum::*;
use cellquant::cpu_detect::*;
use cellquant::reciprocal::MAX_DIVISOR;
use cellquant::{ColorAccum, PIXELS_PER_CELL};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub ch: [i16; 4],
    pub divisor: u16,
}

fuzz_target!(|input: Input| {
    let divisor = input.divisor % (MAX_DIVISOR + 1);
    let accum = ColorAccum { ch: input.ch };

    let mut expected = accum;
    div_scalar_generic(&mut expected, divisor);

    let mut actual = accum;
    actual.div_scalar(divisor);
    assert_eq!(actual, expected, "dispatched, {accum:?} / {divisor}");

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        if has_sse2() {
            let mut actual = accum;
            unsafe { div_scalar_sse2(&mut actual, divisor) };
            assert_eq!(actual, expected, "SSE2, {accum:?} / {divisor}");
        }
    }

    if divisor == 0 {
        assert_eq!(expected, ColorAccum::ZERO);
        return;
    }

    // The bound only holds up to the largest pixel count of a cell.
    if divisor > PIXELS_PER_CELL as u16 {
        return;
    }

    for (sum, mean) in accum.ch.iter().zip(expected.ch) {
        if (0..=255 * divisor as i32).contains(&(*sum as i32)) {
            let exact = *sum as f64 / divisor as f64;
            assert!((mean as f64 - exact).abs() <= 1.0, "{sum} / {divisor} gave {mean}");
        }
    }
});
