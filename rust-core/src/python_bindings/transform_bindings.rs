//! Python bindings for the transforms
//!
//! The Rust functions work in place; these copy the inputs and return new arrays.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::spectrum::{self, Direction};

type ArrayPair<'py> = (&'py PyArray1<f64>, &'py PyArray1<f64>);

fn direction(inverse: bool) -> Direction {
    if inverse {
        Direction::Inverse
    } else {
        Direction::Forward
    }
}

/// Radix-2 complex FFT
///
/// Args:
///     re: Real part (length a power of two)
///     im: Imaginary part, same length
///     inverse: Compute the inverse transform (scaled by 1/N)
///
/// Returns:
///     Tuple (re, im) of the result
#[pyfunction]
#[pyo3(signature = (re, im, inverse=false))]
pub fn complex_fft<'py>(
    py: Python<'py>,
    re: PyReadonlyArray1<f64>,
    im: PyReadonlyArray1<f64>,
    inverse: bool,
) -> PyResult<ArrayPair<'py>> {
    let mut re = re.as_array().to_vec();
    let mut im = im.as_array().to_vec();

    spectrum::complex_fft(&mut re, &mut im, direction(inverse))?;

    Ok((PyArray1::from_vec(py, re), PyArray1::from_vec(py, im)))
}

/// FFT for real signals
///
/// Args:
///     re: Forward: real signal. Inverse: real part of bins 0..=N/2
///     im: Forward: ignored. Inverse: imaginary part of bins 0..=N/2
///     inverse: Compute the inverse transform
///
/// Returns:
///     Tuple (re, im); forward gives the full N-bin spectrum, inverse the signal and zeros
#[pyfunction]
#[pyo3(signature = (re, im, inverse=false))]
pub fn real_fft<'py>(
    py: Python<'py>,
    re: PyReadonlyArray1<f64>,
    im: PyReadonlyArray1<f64>,
    inverse: bool,
) -> PyResult<ArrayPair<'py>> {
    let mut re = re.as_array().to_vec();
    let mut im = im.as_array().to_vec();

    spectrum::real_fft(&mut re, &mut im, direction(inverse))?;

    Ok((PyArray1::from_vec(py, re), PyArray1::from_vec(py, im)))
}

/// Rectangular to polar conversion
///
/// Returns:
///     Tuple (magnitude, phase)
#[pyfunction]
pub fn rect_to_polar<'py>(
    py: Python<'py>,
    re: PyReadonlyArray1<f64>,
    im: PyReadonlyArray1<f64>,
) -> PyResult<ArrayPair<'py>> {
    let mut re = re.as_array().to_vec();
    let mut im = im.as_array().to_vec();

    spectrum::rect_to_polar(&mut re, &mut im)?;

    Ok((PyArray1::from_vec(py, re), PyArray1::from_vec(py, im)))
}
