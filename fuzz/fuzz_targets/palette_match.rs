#![no_main]

// Checks every palette matching implementation against the scalar reference, including the
// lowest index tie rule.

use cellquant::bench::palette_match::*;
use cellquant::cpu_detect::*;
use cellquant::{find_nearest_palette_index, Color8888};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub target: u32,
    pub palette: Vec<u32>,
}

fuzz_target!(|input: Input| {
    if input.palette.is_empty() {
        return;
    }

    let target = Color8888::from(input.target);
    let palette: Vec<Color8888> = input.palette.iter().map(|&c| Color8888::from(c)).collect();

    let expected = find_nearest_palette_index_generic(target, &palette);
    assert_eq!(find_nearest_palette_index(target, &palette), expected, "dispatched");

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        if has_sse2() {
            let actual = unsafe { find_nearest_palette_index_sse2(target, &palette) };
            assert_eq!(actual, expected, "SSE2");
        }
    }

    // Nothing before the match may be as near.
    let nearest = target.rgb_distance(palette[expected]);
    assert!(palette.iter().all(|&entry| target.rgb_distance(entry) >= nearest));
    assert!(palette[..expected]
        .iter()
        .all(|&entry| target.rgb_distance(entry) > nearest));
});
