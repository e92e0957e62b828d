//! Spectral centroid extraction
//!
//! The spectral centroid is the magnitude-weighted mean frequency of a frame,
//! the frequency-domain "center of mass". It correlates loosely with perceived
//! brightness, which is what separates the brighter Carnatic timbre from the
//! Hindustani one in the classifier.

use crate::features::spectrogram::bin_frequency;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Compute the per-frame spectral centroid series in Hz
///
/// # Arguments
///
/// * `spectrogram` - Magnitude spectrogram (n_frames x n_bins)
/// * `sample_rate` - Sample rate in Hz
/// * `frame_size` - FFT frame size used to compute the spectrogram
///
/// # Returns
///
/// One centroid value per frame. Frames with no energy (silence) yield 0.0
/// rather than NaN, keeping the series total over all inputs.
pub fn spectral_centroid_series(
    spectrogram: &[Vec<f32>],
    sample_rate: u32,
    frame_size: usize,
) -> Vec<f32> {
    spectrogram
        .iter()
        .map(|frame| frame_centroid(frame, sample_rate, frame_size))
        .collect()
}

/// Spectral centroid of a single magnitude frame
fn frame_centroid(frame: &[f32], sample_rate: u32, frame_size: usize) -> f32 {
    let mut weighted_sum = 0.0f32;
    let mut total_magnitude = 0.0f32;

    for (bin, &magnitude) in frame.iter().enumerate() {
        weighted_sum += bin_frequency(bin, sample_rate, frame_size) * magnitude;
        total_magnitude += magnitude;
    }

    if total_magnitude > EPSILON {
        weighted_sum / total_magnitude
    } else {
        0.0
    }
}

/// Arithmetic mean of a centroid series
///
/// Returns 0.0 for an empty series, which downstream code treats as
/// "no valid features" (the classification gate rejects non-positive values).
pub fn mean_centroid(series: &[f32]) -> f32 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().sum::<f32>() / series.len() as f32
}
