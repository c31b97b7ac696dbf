//! Window functions for spectral display
//!
//! All tapered kinds are built from the same two quantities:
//! `half = (N-1)/2` (integer division) and `k = 1/half`. The cosine kinds use
//! `2π·i·k` as their phase, so they complete a full period every `half`
//! samples rather than every `N-1` samples.

use std::f64::consts::PI;

use crate::error::{DspError, DspResult};

/// Window function types, in the order a front end lists them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowType {
    /// w[i] = 1
    #[default]
    Rectangular,

    /// Triangular: w[i] = 1 - k*|i - half|
    Bartlett,

    /// w[i] = 0.54 - 0.46*cos(2π·i·k)
    Hamming,

    /// w[i] = 0.5 - 0.5*cos(2π·i·k)
    Hanning,

    /// w[i] = 0.42 - 0.5*cos(2π·i·k) + 0.08*cos(4π·i·k)
    Blackman,

    /// w[i] = 1 - sqrt(k*|i - half|)
    Welch,
}

impl WindowType {
    pub const ALL: [WindowType; 6] = [
        WindowType::Rectangular,
        WindowType::Bartlett,
        WindowType::Hamming,
        WindowType::Hanning,
        WindowType::Blackman,
        WindowType::Welch,
    ];

    /// Look up a window by its position in [`WindowType::ALL`]
    ///
    /// This is the selector index a front end's window choice reports.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            WindowType::Rectangular => "Rectangular",
            WindowType::Bartlett => "Bartlett",
            WindowType::Hamming => "Hamming",
            WindowType::Hanning => "Hanning",
            WindowType::Blackman => "Blackman",
            WindowType::Welch => "Welch",
        }
    }

    /// Smallest length this window can be generated for
    ///
    /// Tapered kinds divide by `half = (N-1)/2`, which is zero below 3.
    pub fn min_length(&self) -> usize {
        match self {
            WindowType::Rectangular => 0,
            _ => 3,
        }
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (N)
///
/// # Returns
/// Vector of window coefficients w[i] for i = 0..N-1
pub fn generate_window(window_type: WindowType, length: usize) -> DspResult<Vec<f64>> {
    let mut window = vec![0.0; length];
    generate_window_into(window_type, &mut window)?;
    Ok(window)
}

/// Fill `coeffs` with the window of length `coeffs.len()`
pub fn generate_window_into(window_type: WindowType, coeffs: &mut [f64]) -> DspResult<()> {
    let length = coeffs.len();
    let minimum = window_type.min_length();
    if length < minimum {
        return Err(DspError::TooShort { length, minimum });
    }

    // Rectangular may be empty and never reads half or k
    let half = length.saturating_sub(1) / 2;
    let k = 1.0 / half as f64;
    // |i - half| without leaving unsigned arithmetic
    let distance = |i: usize| i.abs_diff(half) as f64;

    for (i, w) in coeffs.iter_mut().enumerate() {
        let phase = 2.0 * PI * i as f64 * k;
        *w = match window_type {
            WindowType::Rectangular => 1.0,
            WindowType::Bartlett => 1.0 - k * distance(i),
            WindowType::Hamming => 0.54 - 0.46 * phase.cos(),
            WindowType::Hanning => 0.5 - 0.5 * phase.cos(),
            WindowType::Blackman => 0.42 - 0.5 * phase.cos() + 0.08 * (2.0 * phase).cos(),
            WindowType::Welch => 1.0 - (k * distance(i)).sqrt(),
        };
    }

    Ok(())
}
