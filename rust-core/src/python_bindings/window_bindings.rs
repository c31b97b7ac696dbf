//! Python bindings for window generation

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::spectrum::windowing;
use crate::windows::{self, WindowType};

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Rectangular,
    Bartlett,
    Hamming,
    Hanning,
    Blackman,
    Welch,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Rectangular => WindowType::Rectangular,
            PyWindowType::Bartlett => WindowType::Bartlett,
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Hanning => WindowType::Hanning,
            PyWindowType::Blackman => WindowType::Blackman,
            PyWindowType::Welch => WindowType::Welch,
        }
    }
}

impl From<WindowType> for PyWindowType {
    fn from(win: WindowType) -> Self {
        match win {
            WindowType::Rectangular => PyWindowType::Rectangular,
            WindowType::Bartlett => PyWindowType::Bartlett,
            WindowType::Hamming => PyWindowType::Hamming,
            WindowType::Hanning => PyWindowType::Hanning,
            WindowType::Blackman => PyWindowType::Blackman,
            WindowType::Welch => PyWindowType::Welch,
        }
    }
}

/// Generate window coefficients
///
/// Args:
///     window_type: Window type
///     length: Number of coefficients
///
/// Returns:
///     Coefficients as numpy array
#[pyfunction]
pub fn generate_window<'py>(
    py: Python<'py>,
    window_type: PyWindowType,
    length: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let coeffs = windows::generate_window(window_type.into(), length)?;
    Ok(PyArray1::from_vec(py, coeffs))
}

/// Multiply a signal by window coefficients
///
/// Args:
///     signal: Input samples
///     coefficients: Window coefficients of the same length
///
/// Returns:
///     Windowed samples as numpy array
#[pyfunction]
pub fn apply_window<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    coefficients: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let src = signal.as_array().to_vec();
    let coeffs = coefficients.as_array().to_vec();
    let mut dst = vec![0.0; src.len()];

    windowing::apply_window(&mut dst, &src, &coeffs)?;

    Ok(PyArray1::from_vec(py, dst))
}
