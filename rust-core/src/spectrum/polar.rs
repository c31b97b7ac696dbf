//! Rectangular-to-polar conversion

use std::f64::consts::PI;

use crate::error::{ensure_same_len, DspResult};

/// Convert (re, im) pairs to (magnitude, phase) in place
///
/// Phase is `atan(im/re)` moved into the correct quadrant when `re < 0`.
/// A zero real part is left to IEEE division: `im/0` is ±∞ and
/// `atan(±∞)` is ±π/2. At the origin `0/0` is NaN, so the phase is NaN.
pub fn rect_to_polar(re: &mut [f64], im: &mut [f64]) -> DspResult<()> {
    ensure_same_len(re.len(), im.len())?;

    for (r, i) in re.iter_mut().zip(im.iter_mut()) {
        let magnitude = (*r * *r + *i * *i).sqrt();
        let mut phase = (*i / *r).atan();

        if *r < 0.0 {
            phase += if *i < 0.0 { -PI } else { PI };
        }

        *r = magnitude;
        *i = phase;
    }

    Ok(())
}
