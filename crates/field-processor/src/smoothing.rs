//! Block-average smoothing and spectral comparison helpers.
//!
//! Demo-grade tooling for comparing a tile against a smoothed version of
//! itself: a NaN-aware block mean to downsample, and a Welch power spectral
//! density estimate to show what the smoothing removed. Neither is needed
//! for reconstruction correctness.

use num_complex::Complex;
use rustfft::FftPlanner;
use std::f64::consts::PI;

use ocean_common::{OceanError, OceanResult};

/// Downsample a row-major grid by averaging `block x block` cells.
///
/// Dry cells (NaN) are excluded from each block's mean; a block with no wet
/// cells stays NaN. Fails with [`OceanError::BlockMismatch`] unless `block`
/// is nonzero and divides both dimensions exactly, and with
/// [`OceanError::ShapeMismatch`] when `data` does not hold `rows * cols`
/// elements.
///
/// Returns (downsampled data, output rows, output cols).
pub fn block_mean(
    data: &[f32],
    rows: usize,
    cols: usize,
    block: usize,
) -> OceanResult<(Vec<f32>, usize, usize)> {
    if block == 0 || rows % block != 0 || cols % block != 0 {
        return Err(OceanError::BlockMismatch { block, rows, cols });
    }
    if data.len() != rows * cols {
        return Err(OceanError::shape_mismatch(
            "grid data vs declared shape",
            rows * cols,
            data.len(),
        ));
    }

    let out_rows = rows / block;
    let out_cols = cols / block;
    let mut output = vec![f32::NAN; out_rows * out_cols];

    for out_y in 0..out_rows {
        for out_x in 0..out_cols {
            let mut sum = 0.0_f32;
            let mut count = 0usize;

            for dy in 0..block {
                for dx in 0..block {
                    let v = data[(out_y * block + dy) * cols + out_x * block + dx];
                    if !v.is_nan() {
                        sum += v;
                        count += 1;
                    }
                }
            }

            if count > 0 {
                output[out_y * out_cols + out_x] = sum / count as f32;
            }
        }
    }

    Ok((output, out_rows, out_cols))
}

/// Welch power spectral density estimate with a Hann window.
///
/// Splits the signal into `segment_len`-sample segments advancing by
/// `segment_len - overlap`, windows each, and averages the one-sided
/// periodograms. Returns `segment_len / 2 + 1` bins; bin k sits at
/// `k / segment_len` cycles per sample (see [`psd_frequencies`]).
///
/// Scaled as a density against a unit sample rate: the bin sum divided by
/// `segment_len` recovers the signal's mean power (0.5 for a unit-amplitude
/// sinusoid).
///
/// Fails with [`OceanError::InvalidSpectrum`] when `segment_len` is zero,
/// `overlap >= segment_len`, or the signal is shorter than one segment.
pub fn welch_psd(signal: &[f64], segment_len: usize, overlap: usize) -> OceanResult<Vec<f64>> {
    if segment_len == 0 {
        return Err(OceanError::InvalidSpectrum(
            "segment length must be nonzero".to_string(),
        ));
    }
    if overlap >= segment_len {
        return Err(OceanError::InvalidSpectrum(format!(
            "overlap {overlap} must be smaller than segment length {segment_len}"
        )));
    }
    if signal.len() < segment_len {
        return Err(OceanError::InvalidSpectrum(format!(
            "signal length {} shorter than segment length {segment_len}",
            signal.len()
        )));
    }

    // Periodic Hann window, as conventional for spectral averaging.
    let window: Vec<f64> = (0..segment_len)
        .map(|n| 0.5 - 0.5 * (2.0 * PI * n as f64 / segment_len as f64).cos())
        .collect();
    let window_power: f64 = window.iter().map(|w| w * w).sum();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(segment_len);

    let n_bins = segment_len / 2 + 1;
    let nyquist_bin = if segment_len % 2 == 0 {
        Some(n_bins - 1)
    } else {
        None
    };

    let step = segment_len - overlap;
    let mut psd = vec![0.0_f64; n_bins];
    let mut n_segments = 0usize;

    let mut start = 0;
    while start + segment_len <= signal.len() {
        let mut buffer: Vec<Complex<f64>> = signal[start..start + segment_len]
            .iter()
            .zip(&window)
            .map(|(x, w)| Complex::new(x * w, 0.0))
            .collect();
        fft.process(&mut buffer);

        for (k, acc) in psd.iter_mut().enumerate() {
            let mut power = buffer[k].norm_sqr() / window_power;
            // One-sided spectrum: double everything except DC and Nyquist.
            if k != 0 && Some(k) != nyquist_bin {
                power *= 2.0;
            }
            *acc += power;
        }

        n_segments += 1;
        start += step;
    }

    for value in &mut psd {
        *value /= n_segments as f64;
    }
    Ok(psd)
}

/// Frequencies (cycles per sample) of the [`welch_psd`] bins.
pub fn psd_frequencies(segment_len: usize) -> Vec<f64> {
    (0..segment_len / 2 + 1)
        .map(|k| k as f64 / segment_len as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_mean_constant_field() {
        let data = vec![4.0_f32; 36];
        let (result, rows, cols) = block_mean(&data, 6, 6, 3).unwrap();
        assert_eq!((rows, cols), (2, 2));
        assert!(result.iter().all(|v| (*v - 4.0).abs() < 1e-6));
    }

    #[test]
    fn test_block_mean_values() {
        // 4x4 grid with values 1-16, 2x2 blocks.
        let data: Vec<f32> = (1..=16).map(|x| x as f32).collect();
        let (result, rows, cols) = block_mean(&data, 4, 4, 2).unwrap();

        assert_eq!((rows, cols), (2, 2));
        // Top-left block: 1,2,5,6 -> mean = 3.5
        assert!((result[0] - 3.5).abs() < 0.001);
        // Top-right block: 3,4,7,8 -> mean = 5.5
        assert!((result[1] - 5.5).abs() < 0.001);
    }

    #[test]
    fn test_block_mean_handles_nan() {
        let data = vec![1.0, f32::NAN, 3.0, 4.0];
        let (result, ..) = block_mean(&data, 2, 2, 2).unwrap();
        // Mean of 1, 3, 4 ignoring the dry cell.
        assert!((result[0] - 8.0 / 3.0).abs() < 0.001);

        let dry = vec![f32::NAN; 4];
        let (result, ..) = block_mean(&dry, 2, 2, 2).unwrap();
        assert!(result[0].is_nan());
    }

    #[test]
    fn test_block_mean_rejects_bad_blocks() {
        let data = vec![0.0_f32; 36];
        assert!(matches!(
            block_mean(&data, 6, 6, 4).unwrap_err(),
            OceanError::BlockMismatch { block: 4, .. }
        ));
        assert!(block_mean(&data, 6, 6, 0).is_err());
        assert!(block_mean(&data[..30], 6, 6, 3).is_err());
    }

    #[test]
    fn test_welch_psd_locates_sinusoid() {
        // Pure sinusoid at bin 8 of 64-sample segments (0.125 cycles/sample).
        let signal: Vec<f64> = (0..512)
            .map(|n| (2.0 * PI * 8.0 * n as f64 / 64.0).sin())
            .collect();
        let psd = welch_psd(&signal, 64, 32).unwrap();

        let peak = psd
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(k, _)| k)
            .unwrap();
        assert_eq!(peak, 8);

        let freqs = psd_frequencies(64);
        assert!((freqs[peak] - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_welch_psd_total_power_of_unit_sinusoid() {
        // A unit-amplitude sinusoid carries mean power 0.5; the bin sum
        // divided by the segment length must recover it, so any error in the
        // window normalization or the one-sided doubling shows up here.
        let signal: Vec<f64> = (0..512)
            .map(|n| (2.0 * PI * 8.0 * n as f64 / 64.0).sin())
            .collect();
        let psd = welch_psd(&signal, 64, 32).unwrap();

        let total_power: f64 = psd.iter().sum::<f64>() / 64.0;
        assert!((total_power - 0.5).abs() < 1e-9, "total power {total_power}");
    }

    #[test]
    fn test_welch_psd_constant_signal_is_all_dc() {
        let signal = vec![2.0_f64; 256];
        let psd = welch_psd(&signal, 32, 16).unwrap();
        assert!(psd[0] > 0.0);
        // The Hann window leaks DC into bin 1; everything past it is zero.
        assert!(psd[1] < psd[0]);
        for value in &psd[2..] {
            assert!(*value < psd[0] * 1e-9);
        }
    }

    #[test]
    fn test_welch_psd_rejects_bad_config() {
        let signal = vec![0.0_f64; 16];
        assert!(welch_psd(&signal, 0, 0).is_err());
        assert!(welch_psd(&signal, 8, 8).is_err());
        assert!(welch_psd(&signal, 32, 4).is_err());
    }
}
