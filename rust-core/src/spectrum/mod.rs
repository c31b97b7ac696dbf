//! Spectral analysis: FFTs, polar conversion, windowing and the dB pipeline

pub mod fft;
pub mod real_fft;
pub mod polar;
pub mod windowing;
pub mod analysis;

pub use fft::{complex_fft, fft_forward, fft_inverse, Direction};
pub use real_fft::{real_fft, real_fft_forward, real_fft_inverse};
pub use polar::rect_to_polar;
pub use windowing::{apply_window, apply_window_in_place, extract_segment};
pub use analysis::{
    is_supported_fft_size, spectrum_db, spectrum_db_into, AnalyzerConfig, SpectrumAnalyzer,
    SUPPORTED_FFT_SIZES,
};
