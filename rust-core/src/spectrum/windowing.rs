//! Applying windows to time-domain blocks before the FFT

use crate::error::{ensure_same_len, DspResult};

/// Apply window to signal
///
/// # Arguments
/// * `dst` - Output block, `dst[i] = src[i] * coeffs[i]`
/// * `src` - Input block
/// * `coeffs` - Window coefficients from [`crate::windows::generate_window`]
pub fn apply_window(dst: &mut [f64], src: &[f64], coeffs: &[f64]) -> DspResult<()> {
    ensure_same_len(coeffs.len(), src.len())?;
    ensure_same_len(coeffs.len(), dst.len())?;

    for ((d, &s), &w) in dst.iter_mut().zip(src.iter()).zip(coeffs.iter()) {
        *d = s * w;
    }

    Ok(())
}

/// Apply window in-place
pub fn apply_window_in_place(signal: &mut [f64], coeffs: &[f64]) -> DspResult<()> {
    ensure_same_len(coeffs.len(), signal.len())?;

    for (s, &w) in signal.iter_mut().zip(coeffs.iter()) {
        *s *= w;
    }

    Ok(())
}

/// Start index of a block of `block_len` samples centered on `position`
///
/// Saturates instead of wrapping, so a position beyond `isize::MAX` still
/// lands past the end of any signal.
pub fn centered_start(position: usize, block_len: usize) -> isize {
    let position = isize::try_from(position).unwrap_or(isize::MAX);
    let half = isize::try_from(block_len / 2).unwrap_or(isize::MAX);
    position.saturating_sub(half)
}

/// Copy `signal[start..start + out.len()]` into `out`, zero-filling outside the signal
///
/// # Arguments
/// * `signal` - Long signal
/// * `start` - First index to read; may be negative or past the end
/// * `out` - Block to fill
///
/// # Returns
/// Number of samples taken from `signal`
pub fn extract_segment(signal: &[f64], start: isize, out: &mut [f64]) -> usize {
    out.fill(0.0);

    let len = out.len() as isize;
    let src_start = start.clamp(0, signal.len() as isize);
    let src_end = start.saturating_add(len).clamp(0, signal.len() as isize);
    if src_end <= src_start {
        return 0;
    }

    let dst_start = (src_start - start) as usize;
    let count = (src_end - src_start) as usize;
    out[dst_start..dst_start + count].copy_from_slice(&signal[src_start as usize..src_end as usize]);

    count
}
