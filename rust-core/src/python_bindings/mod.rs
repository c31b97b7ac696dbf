//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::DspError;
use crate::spectrum::SUPPORTED_FFT_SIZES;

mod window_bindings;
mod transform_bindings;
mod spectrum_bindings;

impl From<DspError> for PyErr {
    fn from(err: DspError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn speck(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<window_bindings::PyWindowType>()?;
    m.add_class::<spectrum_bindings::PySpectrumAnalyzer>()?;

    m.add_function(wrap_pyfunction!(window_bindings::generate_window, m)?)?;
    m.add_function(wrap_pyfunction!(window_bindings::apply_window, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::complex_fft, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::real_fft, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::rect_to_polar, m)?)?;

    m.add("SUPPORTED_FFT_SIZES", SUPPORTED_FFT_SIZES.to_vec())?;

    Ok(())
}
