//! Spectrum pipeline for display
//!
//! window → real FFT → polar → dB. The free functions work on caller-owned
//! buffers and keep no state; [`SpectrumAnalyzer`] owns one set of buffers
//! and the current window for a display front end.

use super::polar::rect_to_polar;
use super::real_fft::{real_fft_forward, MIN_REAL_FFT_SIZE};
use super::windowing::{apply_window, centered_start, extract_segment};
use crate::error::{ensure_power_of_two, ensure_same_len, DspError, DspResult};
use crate::windows::{generate_window, generate_window_into, WindowType};

/// Lowest level reported, in dB
pub const DB_FLOOR: f64 = -100.0;

/// FFT sizes a front end offers, largest first
pub const SUPPORTED_FFT_SIZES: [usize; 6] = [2048, 1024, 512, 256, 128, 64];

/// Whether a front end offers `fft_size` in its size list
pub fn is_supported_fft_size(fft_size: usize) -> bool {
    SUPPORTED_FFT_SIZES.contains(&fft_size)
}

/// Convert one bin magnitude of an N-point FFT to dB
///
/// The magnitude is scaled by 2/N so a full-scale sine on a bin reads 0 dB.
/// Anything below [`DB_FLOOR`], including silence, reads exactly `DB_FLOOR`.
pub fn magnitude_to_db(magnitude: f64, fft_size: usize) -> f64 {
    let db = 20.0 * (magnitude * 2.0 / fft_size as f64).log10();
    db.max(DB_FLOOR)
}

/// Compute the dB spectrum of one block into caller-owned buffers
///
/// # Arguments
/// * `samples` - N time-domain samples, N a power of two ≥ 4
/// * `coeffs` - N window coefficients
/// * `re`, `im` - N-long scratch; on return the first N/2 entries hold magnitude and phase
/// * `db` - N/2 output levels
pub fn spectrum_db_into(
    samples: &[f64],
    coeffs: &[f64],
    re: &mut [f64],
    im: &mut [f64],
    db: &mut [f64],
) -> DspResult<()> {
    let n = samples.len();
    ensure_power_of_two(n, MIN_REAL_FFT_SIZE)?;
    ensure_same_len(n, im.len())?;
    ensure_same_len(n / 2, db.len())?;

    apply_window(re, samples, coeffs)?;
    real_fft_forward(re, im)?;

    let half = n / 2;
    rect_to_polar(&mut re[..half], &mut im[..half])?;

    for (out, &magnitude) in db.iter_mut().zip(re[..half].iter()) {
        *out = magnitude_to_db(magnitude, n);
    }

    Ok(())
}

/// Compute the dB spectrum of one block, allocating the buffers
pub fn spectrum_db(samples: &[f64], window_type: WindowType) -> DspResult<Vec<f64>> {
    let n = samples.len();
    ensure_power_of_two(n, MIN_REAL_FFT_SIZE)?;

    let coeffs = generate_window(window_type, n)?;
    let mut re = vec![0.0; n];
    let mut im = vec![0.0; n];
    let mut db = vec![0.0; n / 2];

    spectrum_db_into(samples, &coeffs, &mut re, &mut im, &mut db)?;
    Ok(db)
}

/// Index and level of the loudest bin; the first one wins on ties
pub fn peak_bin(db: &[f64]) -> Option<(usize, f64)> {
    db.iter()
        .copied()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, level)| match best {
            Some((_, top)) if level <= top => best,
            _ => Some((i, level)),
        })
}

/// Largest sample as a whole percentage of full scale
pub fn peak_amplitude_percent(samples: &[f64]) -> Option<i32> {
    samples
        .iter()
        .copied()
        .reduce(f64::max)
        .map(|max| (max * 100.0) as i32)
}

/// Spectrum analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// FFT size (number of samples, power of 2, at least 4)
    pub fft_size: usize,

    /// Window type for spectral analysis
    pub window_type: WindowType,

    /// Sample rate in Hz, used only for frequency readouts
    pub sample_rate: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: 512,
            window_type: WindowType::Rectangular,
            sample_rate: 8000.0,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> DspResult<()> {
        ensure_power_of_two(self.fft_size, MIN_REAL_FFT_SIZE)?;
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(DspError::InvalidSampleRate(self.sample_rate));
        }
        Ok(())
    }
}

/// Spectrum analyzer for a display
///
/// Holds the window coefficients for the current (kind, size) and regenerates
/// them only when either changes.
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    window: Vec<f64>,
    frame: Vec<f64>,
    re: Vec<f64>,
    im: Vec<f64>,
    db: Vec<f64>,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> DspResult<Self> {
        config.validate()?;
        log::debug!(
            "Creating spectrum analyzer: {} points, {} window, {} Hz",
            config.fft_size,
            config.window_type.name(),
            config.sample_rate
        );

        if !is_supported_fft_size(config.fft_size) {
            log::debug!("FFT size {} is not one of {:?}", config.fft_size, SUPPORTED_FFT_SIZES);
        }

        let n = config.fft_size;
        let window = generate_window(config.window_type, n)?;

        Ok(Self {
            config,
            window,
            frame: vec![0.0; n],
            re: vec![0.0; n],
            im: vec![0.0; n],
            db: vec![DB_FLOOR; n / 2],
        })
    }

    /// Analyze a block and return its dB spectrum
    ///
    /// Blocks shorter than the FFT size are zero-padded, longer ones truncated.
    pub fn analyze(&mut self, signal: &[f64]) -> DspResult<&[f64]> {
        let copy_len = signal.len().min(self.frame.len());
        self.frame[..copy_len].copy_from_slice(&signal[..copy_len]);
        self.frame[copy_len..].fill(0.0);

        self.run()
    }

    /// Analyze the block of a long signal centered on `position`
    ///
    /// Samples before the start or past the end of `signal` read as zero.
    pub fn analyze_at(&mut self, signal: &[f64], position: usize) -> DspResult<&[f64]> {
        let start = centered_start(position, self.frame.len());
        let taken = extract_segment(signal, start, &mut self.frame);
        log::trace!("Block at {} took {} of {} samples", start, taken, self.frame.len());

        self.run()
    }

    fn run(&mut self) -> DspResult<&[f64]> {
        spectrum_db_into(&self.frame, &self.window, &mut self.re, &mut self.im, &mut self.db)?;
        Ok(self.db.as_slice())
    }

    /// dB spectrum of the last analyzed block
    pub fn spectrum_db(&self) -> &[f64] {
        &self.db
    }

    /// Magnitudes of the last analyzed block (N/2 bins, unscaled)
    pub fn magnitudes(&self) -> &[f64] {
        &self.re[..self.num_bins()]
    }

    /// Phases of the last analyzed block in radians
    pub fn phases(&self) -> &[f64] {
        &self.im[..self.num_bins()]
    }

    /// Last analyzed block before windowing
    pub fn frame(&self) -> &[f64] {
        &self.frame
    }

    /// Switch window kind, regenerating coefficients only if it changed
    pub fn set_window_type(&mut self, window_type: WindowType) -> DspResult<()> {
        if window_type == self.config.window_type {
            return Ok(());
        }

        log::debug!("Regenerating {} window ({} points)", window_type.name(), self.config.fft_size);
        generate_window_into(window_type, &mut self.window)?;
        self.config.window_type = window_type;
        Ok(())
    }

    /// Update configuration
    pub fn update_config(&mut self, config: AnalyzerConfig) -> DspResult<()> {
        config.validate()?;

        if config.fft_size != self.config.fft_size {
            log::debug!(
                "FFT size {} -> {}{}",
                self.config.fft_size,
                config.fft_size,
                if is_supported_fft_size(config.fft_size) { "" } else { " (not in the display list)" }
            );
            let n = config.fft_size;
            self.window = generate_window(config.window_type, n)?;
            self.frame = vec![0.0; n];
            self.re = vec![0.0; n];
            self.im = vec![0.0; n];
            self.db = vec![DB_FLOOR; n / 2];
        } else if config.window_type != self.config.window_type {
            log::debug!("Regenerating {} window ({} points)", config.window_type.name(), config.fft_size);
            generate_window_into(config.window_type, &mut self.window)?;
        }

        self.config = config;
        Ok(())
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Current window coefficients
    pub fn window(&self) -> &[f64] {
        &self.window
    }

    /// Get number of frequency bins shown (fft_size / 2)
    pub fn num_bins(&self) -> usize {
        self.config.fft_size / 2
    }

    /// Convert bin index to Hz
    pub fn bin_to_hz(&self, bin: usize) -> f64 {
        self.config.sample_rate * bin as f64 / self.config.fft_size as f64
    }

    /// Get frequency bins in Hz
    pub fn frequency_bins_hz(&self) -> Vec<f64> {
        (0..self.num_bins()).map(|bin| self.bin_to_hz(bin)).collect()
    }

    /// Loudest bin of the last analyzed block
    pub fn peak(&self) -> Option<(usize, f64)> {
        peak_bin(&self.db)
    }

    /// Level of one bin of the last analyzed block
    pub fn level_at(&self, bin: usize) -> Option<f64> {
        self.db.get(bin).copied()
    }
}
