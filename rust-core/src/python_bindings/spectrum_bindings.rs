//! Python bindings for spectrum analysis

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use super::window_bindings::PyWindowType;
use crate::spectrum::{AnalyzerConfig, SpectrumAnalyzer};

/// Spectrum analyzer exposed to Python
#[pyclass(name = "SpectrumAnalyzer")]
pub struct PySpectrumAnalyzer {
    analyzer: SpectrumAnalyzer,
}

#[pymethods]
impl PySpectrumAnalyzer {
    /// Create a new spectrum analyzer
    ///
    /// Args:
    ///     fft_size: FFT size (power of 2, at least 4; a display offers SUPPORTED_FFT_SIZES)
    ///     window_type: Window type for analysis
    ///     sample_rate: Sample rate in Hz
    #[new]
    #[pyo3(signature = (fft_size=512, window_type=PyWindowType::Rectangular, sample_rate=8000.0))]
    fn new(fft_size: usize, window_type: PyWindowType, sample_rate: f64) -> PyResult<Self> {
        let config = AnalyzerConfig {
            fft_size,
            window_type: window_type.into(),
            sample_rate,
        };

        Ok(Self {
            analyzer: SpectrumAnalyzer::new(config)?,
        })
    }

    /// Analyze a block and return its dB spectrum
    ///
    /// Args:
    ///     signal: Input samples in [-1, 1]; zero-padded or truncated to fft_size
    ///
    /// Returns:
    ///     fft_size/2 levels in dB as numpy array
    fn analyze<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let sig = signal.as_array().to_vec();
        let db = self.analyzer.analyze(&sig)?.to_vec();

        Ok(PyArray1::from_vec(py, db))
    }

    /// Analyze the block of a long signal centered on a sample position
    ///
    /// Args:
    ///     signal: Whole signal
    ///     position: Center sample index
    fn analyze_at<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
        position: usize,
    ) -> PyResult<&'py PyArray1<f64>> {
        let sig = signal.as_array().to_vec();
        let db = self.analyzer.analyze_at(&sig, position)?.to_vec();

        Ok(PyArray1::from_vec(py, db))
    }

    /// Loudest bin of the last block as (bin, dB)
    fn peak(&self) -> Option<(usize, f64)> {
        self.analyzer.peak()
    }

    /// Get frequency bins in Hz
    fn frequency_bins_hz<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_vec(py, self.analyzer.frequency_bins_hz()))
    }

    /// Current window coefficients
    fn window<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_vec(py, self.analyzer.window().to_vec()))
    }

    /// Switch window type
    fn set_window_type(&mut self, window_type: PyWindowType) -> PyResult<()> {
        self.analyzer.set_window_type(window_type.into())?;
        Ok(())
    }

    /// Update configuration
    ///
    /// Args:
    ///     fft_size: New FFT size (power of 2, at least 4; see SUPPORTED_FFT_SIZES)
    ///     window_type: New window type
    ///     sample_rate: New sample rate
    #[pyo3(signature = (fft_size=None, window_type=None, sample_rate=None))]
    fn update_config(
        &mut self,
        fft_size: Option<usize>,
        window_type: Option<PyWindowType>,
        sample_rate: Option<f64>,
    ) -> PyResult<()> {
        let mut config = self.analyzer.config().clone();

        if let Some(size) = fft_size {
            config.fft_size = size;
        }
        if let Some(win) = window_type {
            config.window_type = win.into();
        }
        if let Some(sr) = sample_rate {
            config.sample_rate = sr;
        }

        self.analyzer.update_config(config)?;
        Ok(())
    }

    /// Get number of frequency bins
    fn num_bins(&self) -> usize {
        self.analyzer.num_bins()
    }

    fn get_window_type(&self) -> PyWindowType {
        self.analyzer.config().window_type.into()
    }

    fn get_sample_rate(&self) -> f64 {
        self.analyzer.config().sample_rate
    }

    fn get_fft_size(&self) -> usize {
        self.analyzer.config().fft_size
    }
}
