//! Speck - spectral core for audio display
//!
//! Windowing, radix-2 complex and real FFTs, rectangular-to-polar conversion
//! and the dB mapping that turns a block of samples into a spectrum display.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod windows;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{DspError, DspResult};
pub use windows::{WindowType, generate_window};
pub use spectrum::{
    apply_window, complex_fft, real_fft, rect_to_polar, AnalyzerConfig, Direction, SpectrumAnalyzer,
};
