//! Hanning window synthesis

use crate::math::div_w32_w16;
use crate::tables::HANNING_TABLE;

/// Fill `v` with the rising half of a Hanning window, Q15
///
/// The table is stepped with a Q22 phase accumulator of increment
/// `2^30 / v.len()`. Lengths up to 512 start half a step early so that
/// samples land between table entries; longer windows start a quarter step
/// early. The window length is limited to 32767 samples.
pub fn get_hanning_window(v: &mut [i16]) {
    debug_assert!(
        v.len() <= i16::MAX as usize,
        "hanning window longer than 32767 samples"
    );
    let size = v.len().min(i16::MAX as usize) as i16;
    if size == 0 {
        return;
    }

    let factor = div_w32_w16(0x4000_0000, size);
    let mut index: i32 = if size < 513 { -0x20_0000 } else { -0x10_0000 };

    for sample in v.iter_mut().take(size as usize) {
        index += factor;
        *sample = HANNING_TABLE[(index >> 22) as usize];
    }
}
