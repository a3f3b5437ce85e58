use anyhow::{ensure, Error, Result};
use nalgebra::{DMatrix, DVector};

const PINV_EPSILON: f64 = 1e-12;

/// Savitzky-Golay smoothing.
///
/// Every sample is replaced by the least squares polynomial of degree
/// `polyorder` fitted over `window_length` neighbouring samples, evaluated at
/// the window center. Even windows take one more sample on the left, so their
/// center lies half a sample before the sample being replaced. The
/// `window_length / 2` samples at either end are evaluated on the polynomial
/// fitted to the first or last full window instead.
pub fn savgol_filter(data: &[f64], window_length: usize, polyorder: usize) -> Result<Vec<f64>> {
    ensure!(
        polyorder < window_length,
        "polyorder ({polyorder}) must be less than window_length ({window_length})"
    );
    ensure!(
        window_length <= data.len(),
        "window_length ({window_length}) exceeds the number of samples ({})",
        data.len()
    );

    let (n, w) = (data.len(), window_length);
    let half = w / 2;

    let center = if w % 2 == 0 {
        half as f64 - 0.5
    } else {
        half as f64
    };
    let interior = vandermonde(w, polyorder, center)
        .pseudo_inverse(PINV_EPSILON)
        .map_err(Error::msg)?;
    let weights = interior.row(0);

    let edge = vandermonde(w, polyorder, 0.0)
        .pseudo_inverse(PINV_EPSILON)
        .map_err(Error::msg)?;
    let head = &edge * DVector::from_column_slice(&data[..w]);
    let tail = &edge * DVector::from_column_slice(&data[n - w..]);

    let smoothed = (0..n)
        .map(|i| {
            if i < half {
                polyval(&head, i as f64)
            } else if i >= n - half {
                polyval(&tail, (i + w - n) as f64)
            } else {
                let window = &data[i - half..i - half + w];
                weights.iter().zip(window).map(|(a, b)| a * b).sum()
            }
        })
        .collect();

    Ok(smoothed)
}

/// Rows are samples at `j - origin`, columns are increasing powers.
fn vandermonde(window_length: usize, polyorder: usize, origin: f64) -> DMatrix<f64> {
    DMatrix::from_fn(window_length, polyorder + 1, |row, col| {
        (row as f64 - origin).powi(col as i32)
    })
}

fn polyval(coefficients: &DVector<f64>, x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic(x: f64) -> f64 {
        0.01 * x * x * x - 0.3 * x * x + 2.0 * x - 7.0
    }

    #[test]
    fn odd_window_preserves_cubic() {
        let data = (0..40).map(|x| cubic(x as f64)).collect::<Vec<_>>();
        let smoothed = savgol_filter(&data, 7, 3).unwrap();
        for (a, b) in data.iter().zip(&smoothed) {
            assert!((a - b).abs() < 1e-6, "{a} != {b}");
        }
    }

    #[test]
    fn even_window_lags_half_a_sample() {
        let data = (0..40).map(|x| cubic(x as f64)).collect::<Vec<_>>();
        let smoothed = savgol_filter(&data, 10, 3).unwrap();

        for (i, value) in smoothed.iter().enumerate() {
            let expected = if (5..35).contains(&i) {
                cubic(i as f64 - 0.5)
            } else {
                cubic(i as f64)
            };
            assert!((value - expected).abs() < 1e-6, "sample {i}: {value} != {expected}");
        }
    }

    #[test]
    fn flattens_noise() {
        let data = (0..60)
            .map(|x| if x % 2 == 0 { 1.0 } else { -1.0 })
            .collect::<Vec<_>>();
        let smoothed = savgol_filter(&data, 10, 3).unwrap();

        let amplitude = smoothed[10..50]
            .iter()
            .fold(0.0f64, |acc, x| acc.max(x.abs()));
        assert!(amplitude < 0.5, "{amplitude}");
    }

    #[test]
    fn rejects_bad_windows() {
        let data = [1.0; 8];
        assert!(savgol_filter(&data, 10, 3).is_err());
        assert!(savgol_filter(&data, 3, 3).is_err());
        assert_eq!(savgol_filter(&data, 8, 2).unwrap().len(), 8);
    }
}
