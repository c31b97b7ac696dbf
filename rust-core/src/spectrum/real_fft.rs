//! FFT for real-valued signals
//!
//! A real N-point signal is packed into an N/2-point complex signal (even
//! samples as the real part, odd samples as the imaginary part), transformed
//! with the complex FFT, split back into the spectra of the even and odd
//! samples, and merged by one final radix-2 stage of width N.
//!
//! Both buffers are N long. On return from the forward transform they hold
//! the full N-bin spectrum; bins N/2+1..N-1 mirror bins 1..N/2-1.

use super::fft::{butterfly_stage, transform_in_place, Direction};
use crate::error::{ensure_power_of_two, ensure_same_len, DspResult};

/// Smallest supported real transform (N/4 must be a whole bin)
pub const MIN_REAL_FFT_SIZE: usize = 4;

/// Bins with special handling in the even/odd split, derived from N
#[derive(Debug, Clone, Copy)]
struct SpecialBins {
    quarter: usize,
    nyquist: usize,
    three_quarter: usize,
}

impl SpecialBins {
    fn new(n: usize) -> Self {
        Self {
            quarter: n / 4,
            nyquist: n / 2,
            three_quarter: 3 * n / 4,
        }
    }
}

/// Real-input FFT in the given direction
///
/// # Arguments
/// * `re` - Forward: real time-domain signal. Inverse: real part of bins 0..=N/2
/// * `im` - Forward: ignored. Inverse: imaginary part of bins 0..=N/2
/// * `direction` - Forward or inverse
pub fn real_fft(re: &mut [f64], im: &mut [f64], direction: Direction) -> DspResult<()> {
    match direction {
        Direction::Forward => real_fft_forward(re, im),
        Direction::Inverse => real_fft_inverse(re, im),
    }
}

/// Forward transform of the real signal in `re`; `im` is scratch on entry
pub fn real_fft_forward(re: &mut [f64], im: &mut [f64]) -> DspResult<()> {
    check_buffers(re, im)?;
    forward_in_place(re, im);
    Ok(())
}

/// Inverse transform of the half spectrum in bins 0..=N/2
///
/// Bins above N/2 are ignored on entry. On return `re` holds the real time
/// signal and `im` is zeroed.
pub fn real_fft_inverse(re: &mut [f64], im: &mut [f64]) -> DspResult<()> {
    check_buffers(re, im)?;
    let n = re.len();

    // Make the spectrum conjugate-symmetric
    for i in n / 2 + 1..n {
        re[i] = re[n - i];
        im[i] = -im[n - i];
    }

    // The forward transform of Re+Im gives the Hartley-style inverse
    for (r, i) in re.iter_mut().zip(im.iter()) {
        *r += *i;
    }

    forward_in_place(re, im);

    let scale = 1.0 / n as f64;
    for (r, i) in re.iter_mut().zip(im.iter_mut()) {
        *r = (*r + *i) * scale;
        *i = 0.0;
    }

    Ok(())
}

fn check_buffers(re: &[f64], im: &[f64]) -> DspResult<()> {
    ensure_same_len(re.len(), im.len())?;
    ensure_power_of_two(re.len(), MIN_REAL_FFT_SIZE)
}

fn forward_in_place(re: &mut [f64], im: &mut [f64]) {
    let n = re.len();
    let bins = SpecialBins::new(n);
    let half = bins.nyquist;

    // Even samples to re, odd samples to im
    for i in 0..half {
        re[i] = re[2 * i];
        im[i] = re[2 * i + 1];
    }

    transform_in_place(&mut re[..half], &mut im[..half]);

    // Even spectrum stays in the low half, odd spectrum goes to the high half
    for i in 1..bins.quarter {
        let im_idx = half - i;
        let ip2 = i + half;
        let ipm = im_idx + half;

        re[ip2] = (im[i] + im[im_idx]) * 0.5;
        re[ipm] = re[ip2];
        im[ip2] = -(re[i] - re[im_idx]) * 0.5;
        im[ipm] = -im[ip2];
        re[i] = (re[i] + re[im_idx]) * 0.5;
        re[im_idx] = re[i];
        im[i] = (im[i] - im[im_idx]) * 0.5;
        im[im_idx] = -im[i];
    }

    re[bins.three_quarter] = im[bins.quarter];
    re[bins.nyquist] = im[0];
    im[bins.three_quarter] = 0.0;
    im[bins.nyquist] = 0.0;
    im[bins.quarter] = 0.0;
    im[0] = 0.0;

    butterfly_stage(re, im, n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DspError;
    use crate::spectrum::fft::fft_forward;
    use std::f64::consts::PI;

    fn test_signal(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 0.5 * (i as f64 * 0.41).sin() - 0.3 * (i as f64 * 2.3 + 0.2).cos())
            .collect()
    }

    #[test]
    fn test_matches_complex_fft() {
        for &n in &[4, 8, 16, 256, 512] {
            let signal = test_signal(n);

            let mut re = signal.clone();
            let mut im = vec![0.0; n];
            real_fft_forward(&mut re, &mut im).unwrap();

            let mut c_re = signal.clone();
            let mut c_im = vec![0.0; n];
            fft_forward(&mut c_re, &mut c_im).unwrap();

            for k in 0..n {
                assert!((re[k] - c_re[k]).abs() < 1e-9, "re bin {} for N={}", k, n);
                assert!((im[k] - c_im[k]).abs() < 1e-9, "im bin {} for N={}", k, n);
            }
        }
    }

    #[test]
    fn test_zero_signal() {
        let mut re = vec![0.0; 512];
        let mut im = vec![3.0; 512]; // ignored on forward
        real_fft(&mut re, &mut im, Direction::Forward).unwrap();

        assert!(re.iter().all(|&r| r == 0.0));
        assert!(im.iter().all(|&i| i == 0.0));
    }

    #[test]
    fn test_special_bins_are_real() {
        let n = 64;
        let mut re = test_signal(n);
        let mut im = vec![0.0; n];
        real_fft_forward(&mut re, &mut im).unwrap();

        assert_eq!(im[0], 0.0);
        assert_eq!(im[n / 2], 0.0);

        // Alternating sum is the Nyquist bin
        let signal = test_signal(n);
        let nyquist: f64 = signal
            .iter()
            .enumerate()
            .map(|(i, &x)| if i % 2 == 0 { x } else { -x })
            .sum();
        assert!((re[n / 2] - nyquist).abs() < 1e-9);
    }

    #[test]
    fn test_sine_peak() {
        let n = 512;
        let bin = 37;
        let mut re: Vec<f64> = (0..n).map(|i| (2.0 * PI * bin as f64 * i as f64 / n as f64).sin()).collect();
        let mut im = vec![0.0; n];
        real_fft_forward(&mut re, &mut im).unwrap();

        // A unit sine of N samples gives -i*N/2 at its bin
        assert!(re[bin].abs() < 1e-9);
        assert!((im[bin] + n as f64 / 2.0).abs() < 1e-9);
        for k in (0..n / 2).filter(|&k| k != bin) {
            assert!(re[k].hypot(im[k]) < 1e-9, "leak at bin {}", k);
        }
    }

    #[test]
    fn test_round_trip() {
        for &n in &[4, 32, 512, 2048] {
            let signal = test_signal(n);
            let mut re = signal.clone();
            let mut im = vec![0.0; n];

            real_fft_forward(&mut re, &mut im).unwrap();
            // Upper half is recomputed from the mirror; make sure it is not read
            for i in n / 2 + 1..n {
                re[i] = f64::NAN;
                im[i] = f64::NAN;
            }
            real_fft_inverse(&mut re, &mut im).unwrap();

            for i in 0..n {
                assert!((re[i] - signal[i]).abs() < 1e-9, "sample {} for N={}", i, n);
                assert_eq!(im[i], 0.0);
            }
        }
    }

    #[test]
    fn test_invalid_lengths_rejected() {
        let mut re = vec![0.0; 2];
        let mut im = vec![0.0; 2];
        assert_eq!(
            real_fft_forward(&mut re, &mut im),
            Err(DspError::TooShort { length: 2, minimum: 4 })
        );

        let mut re = vec![0.0; 24];
        let mut im = vec![0.0; 24];
        assert_eq!(real_fft_inverse(&mut re, &mut im), Err(DspError::NotPowerOfTwo(24)));
    }
}
