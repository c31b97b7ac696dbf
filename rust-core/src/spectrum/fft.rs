//! In-place radix-2 FFT over split real/imaginary buffers
//!
//! Iterative Cooley-Tukey, decimation in time. The twiddle factor of each
//! stage is advanced by multiplying with a fixed rotation step instead of
//! calling sin/cos per butterfly.

use std::f64::consts::PI;

use crate::error::{ensure_power_of_two, ensure_same_len, DspResult};

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Compute the DFT or inverse DFT of `re + i*im` in place
///
/// # Arguments
/// * `re` - Real part, overwritten with the real part of the result
/// * `im` - Imaginary part, overwritten with the imaginary part of the result
/// * `direction` - Forward (unscaled) or inverse (scaled by 1/N)
pub fn complex_fft(re: &mut [f64], im: &mut [f64], direction: Direction) -> DspResult<()> {
    match direction {
        Direction::Forward => fft_forward(re, im),
        Direction::Inverse => fft_inverse(re, im),
    }
}

/// Forward DFT: X[k] = Σ x[n]·e^(-2πikn/N)
pub fn fft_forward(re: &mut [f64], im: &mut [f64]) -> DspResult<()> {
    check_buffers(re, im)?;
    transform_in_place(re, im);
    Ok(())
}

/// Inverse DFT computed as conj(DFT(conj(X))) / N
pub fn fft_inverse(re: &mut [f64], im: &mut [f64]) -> DspResult<()> {
    check_buffers(re, im)?;

    for v in im.iter_mut() {
        *v = -*v;
    }

    transform_in_place(re, im);

    let scale = 1.0 / re.len() as f64;
    for (r, i) in re.iter_mut().zip(im.iter_mut()) {
        *r *= scale;
        *i *= -scale;
    }

    Ok(())
}

fn check_buffers(re: &[f64], im: &[f64]) -> DspResult<()> {
    ensure_same_len(re.len(), im.len())?;
    ensure_power_of_two(re.len(), 2)
}

/// Unchecked forward transform; callers have validated the lengths
pub(crate) fn transform_in_place(re: &mut [f64], im: &mut [f64]) {
    bit_reverse(re, im);

    let mut width = 2;
    while width <= re.len() {
        butterfly_stage(re, im, width);
        width <<= 1;
    }
}

/// Reorder so that element i moves to the bit-reversal of i
fn bit_reverse(re: &mut [f64], im: &mut [f64]) {
    let n = re.len();
    let half = n >> 1;

    // j tracks the bit-reversal of i
    let mut j = half;
    for i in 1..n - 1 {
        if i < j {
            re.swap(i, j);
            im.swap(i, j);
        }
        let mut k = half;
        while k <= j {
            j -= k;
            k >>= 1;
        }
        j += k;
    }
}

/// Run every butterfly of the stage whose sub-DFTs are `width` points wide
///
/// The first `width/2` points of each sub-DFT hold the even half, the rest
/// the odd half.
pub(crate) fn butterfly_stage(re: &mut [f64], im: &mut [f64], width: usize) {
    let n = re.len();
    let half_width = width >> 1;

    let step = PI / half_width as f64;
    let (step_re, step_im) = (step.cos(), -step.sin());

    let mut w_re = 1.0;
    let mut w_im = 0.0;

    for j in 0..half_width {
        for i in (j..n).step_by(width) {
            let ip = i + half_width;
            let t_re = re[ip] * w_re - im[ip] * w_im;
            let t_im = re[ip] * w_im + im[ip] * w_re;
            re[ip] = re[i] - t_re;
            im[ip] = im[i] - t_im;
            re[i] += t_re;
            im[i] += t_im;
        }

        let prev = w_re;
        w_re = prev * step_re - w_im * step_im;
        w_im = prev * step_im + w_im * step_re;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DspError;

    fn test_signal(n: usize) -> (Vec<f64>, Vec<f64>) {
        let re = (0..n).map(|i| (i as f64 * 0.37).sin() + 0.25 * (i as f64 * 1.91).cos()).collect();
        let im = (0..n).map(|i| (i as f64 * 0.73 + 0.5).cos() * 0.6).collect();
        (re, im)
    }

    #[test]
    fn test_round_trip() {
        for &n in &[2, 4, 8, 64, 512, 2048] {
            let (re0, im0) = test_signal(n);
            let (mut re, mut im) = (re0.clone(), im0.clone());

            fft_forward(&mut re, &mut im).unwrap();
            fft_inverse(&mut re, &mut im).unwrap();

            for i in 0..n {
                assert!((re[i] - re0[i]).abs() < 1e-9, "re mismatch at {} for N={}", i, n);
                assert!((im[i] - im0[i]).abs() < 1e-9, "im mismatch at {} for N={}", i, n);
            }
        }
    }

    #[test]
    fn test_impulse_is_flat() {
        let mut re = vec![0.0; 16];
        let mut im = vec![0.0; 16];
        re[0] = 1.0;

        complex_fft(&mut re, &mut im, Direction::Forward).unwrap();

        assert!(re.iter().all(|&r| (r - 1.0).abs() < 1e-12));
        assert!(im.iter().all(|&i| i.abs() < 1e-12));
    }

    #[test]
    fn test_single_complex_exponential() {
        // e^(2πi·3n/N) lands entirely in bin 3 with magnitude N
        let n = 32;
        let mut re: Vec<f64> = (0..n).map(|i| (2.0 * PI * 3.0 * i as f64 / n as f64).cos()).collect();
        let mut im: Vec<f64> = (0..n).map(|i| (2.0 * PI * 3.0 * i as f64 / n as f64).sin()).collect();

        fft_forward(&mut re, &mut im).unwrap();

        for k in 0..n {
            let expected = if k == 3 { n as f64 } else { 0.0 };
            assert!((re[k] - expected).abs() < 1e-9, "bin {}", k);
            assert!(im[k].abs() < 1e-9, "bin {}", k);
        }
    }

    #[test]
    fn test_bit_reverse_order() {
        let mut re: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let mut im = vec![0.0; 8];
        bit_reverse(&mut re, &mut im);
        assert_eq!(re, vec![0.0, 4.0, 2.0, 6.0, 1.0, 5.0, 3.0, 7.0]);
    }

    #[test]
    fn test_invalid_lengths_rejected() {
        let mut re = vec![1.0; 12];
        let mut im = vec![0.0; 12];
        assert_eq!(complex_fft(&mut re, &mut im, Direction::Forward), Err(DspError::NotPowerOfTwo(12)));
        // Nothing written on failure
        assert!(re.iter().all(|&r| r == 1.0));

        let mut re = vec![0.0; 8];
        let mut im = vec![0.0; 4];
        assert_eq!(
            fft_inverse(&mut re, &mut im),
            Err(DspError::LengthMismatch { expected: 8, actual: 4 })
        );

        let mut one = vec![1.0];
        let mut one_im = vec![0.0];
        assert!(fft_forward(&mut one, &mut one_im).is_err());
    }
}
