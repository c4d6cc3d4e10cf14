//! Fixed-point reciprocal table used by [`crate::ColorAccum::div_scalar`].
//!
//! Entry `n` holds `floor(32768 / n)` (a reciprocal scaled by 2^15). Division by zero is
//! defined as zero, so the entry at index 0 is 0.

/// Number of fractional bits in a [`RECIPROCALS`] entry.
pub const RECIPROCAL_SHIFT: u32 = 15;

/// Rounding bias added before shifting; half of the fixed-point unit.
pub const RECIPROCAL_ROUNDING: i32 = 1 << (RECIPROCAL_SHIFT - 1);

/// Largest divisor covered by [`RECIPROCALS`].
pub const MAX_DIVISOR: u16 = 256;

/// 32768 divided by index. Divide by zero is defined as zero.
pub static RECIPROCALS: [u16; MAX_DIVISOR as usize + 1] = [
    0, 32768, 16384, 10922, 8192, 6553, 5461, 4681, 4096, 3640, 3276, 2978, 2730, 2520, 2340,
    2184, 2048, 1927, 1820, 1724, 1638, 1560, 1489, 1424, 1365, 1310, 1260, 1213, 1170, 1129,
    1092, 1057, 1024, 992, 963, 936, 910, 885, 862, 840, 819, 799, 780, 762, 744, 728, 712, 697,
    682, 668, 655, 642, 630, 618, 606, 595, 585, 574, 564, 555, 546, 537, 528, 520, 512, 504, 496,
    489, 481, 474, 468, 461, 455, 448, 442, 436, 431, 425, 420, 414, 409, 404, 399, 394, 390, 385,
    381, 376, 372, 368, 364, 360, 356, 352, 348, 344, 341, 337, 334, 330, 327, 324, 321, 318, 315,
    312, 309, 306, 303, 300, 297, 295, 292, 289, 287, 284, 282, 280, 277, 275, 273, 270, 268, 266,
    264, 262, 260, 258, 256, 254, 252, 250, 248, 246, 244, 242, 240, 239, 237, 235, 234, 232, 230,
    229, 227, 225, 224, 222, 221, 219, 218, 217, 215, 214, 212, 211, 210, 208, 207, 206, 204, 203,
    202, 201, 199, 198, 197, 196, 195, 193, 192, 191, 190, 189, 188, 187, 186, 185, 184, 183, 182,
    181, 180, 179, 178, 177, 176, 175, 174, 173, 172, 171, 170, 169, 168, 168, 167, 166, 165, 164,
    163, 163, 162, 161, 160, 159, 159, 158, 157, 156, 156, 155, 154, 153, 153, 152, 151, 151, 150,
    149, 148, 148, 147, 146, 146, 145, 144, 144, 143, 143, 142, 141, 141, 140, 140, 139, 138, 138,
    137, 137, 136, 135, 135, 134, 134, 133, 133, 132, 132, 131, 131, 130, 130, 129, 129, 128, 128,
];

/// Returns the fixed-point reciprocal of `divisor`.
///
/// # Panics
///
/// If `divisor` is greater than [`MAX_DIVISOR`].
#[inline(always)]
pub fn reciprocal(divisor: u16) -> u16 {
    debug_assert!(
        divisor <= MAX_DIVISOR,
        "divisor must be in range [0, 256], got {divisor}"
    );
    RECIPROCALS[divisor as usize]
}
