//! STFT magnitude spectrogram
//!
//! Computes a Hann-windowed short-time Fourier transform and keeps the
//! magnitude of the non-redundant bins (0..=frame_size/2). All downstream
//! feature extraction (centroid, chroma, tempo) consumes this one spectrogram
//! so the FFT work is done exactly once per file.

use crate::error::AnalysisError;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Compute a Hann-windowed magnitude spectrogram
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `frame_size` - FFT frame size (default: 2048)
/// * `hop_size` - Hop size in samples (default: 512)
///
/// # Returns
///
/// Spectrogram as `Vec<Vec<f32>>` (n_frames x (frame_size/2 + 1)). Signals
/// shorter than one frame produce an empty spectrogram rather than an error,
/// letting callers surface "no features" instead of failing.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `frame_size` or `hop_size` is zero.
pub fn magnitude_spectrogram(
    samples: &[f32],
    frame_size: usize,
    hop_size: usize,
) -> Result<Vec<Vec<f32>>, AnalysisError> {
    if frame_size == 0 || hop_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "frame_size and hop_size must be > 0".to_string(),
        ));
    }

    if samples.len() < frame_size {
        log::debug!(
            "Signal too short for one frame: {} samples < frame_size {}",
            samples.len(),
            frame_size
        );
        return Ok(Vec::new());
    }

    let n_frames = (samples.len() - frame_size) / hop_size + 1;
    let n_bins = frame_size / 2 + 1;

    // Hann window, precomputed once for all frames
    let window: Vec<f32> = (0..frame_size)
        .map(|i| {
            let t = 2.0 * std::f32::consts::PI * i as f32 / frame_size as f32;
            0.5 * (1.0 - t.cos())
        })
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(frame_size);

    let mut spectrogram = Vec::with_capacity(n_frames);
    let mut fft_buffer: Vec<Complex<f32>> = vec![Complex::new(0.0, 0.0); frame_size];

    for frame_idx in 0..n_frames {
        let start = frame_idx * hop_size;
        let frame = &samples[start..start + frame_size];

        for (i, (&s, &w)) in frame.iter().zip(window.iter()).enumerate() {
            fft_buffer[i] = Complex::new(s * w, 0.0);
        }

        fft.process(&mut fft_buffer);

        let magnitudes: Vec<f32> = fft_buffer[..n_bins].iter().map(|c| c.norm()).collect();
        spectrogram.push(magnitudes);
    }

    log::debug!(
        "Computed spectrogram: {} frames, {} bins per frame",
        spectrogram.len(),
        n_bins
    );

    Ok(spectrogram)
}

/// Frame rate of the spectrogram in frames per second
///
/// One frame is emitted every `hop_size` samples, so the frame rate is
/// `sample_rate / hop_size`.
pub fn frame_rate(sample_rate: u32, hop_size: usize) -> f32 {
    sample_rate as f32 / hop_size as f32
}

/// Frequency in Hz of a given FFT bin
pub fn bin_frequency(bin: usize, sample_rate: u32, frame_size: usize) -> f32 {
    bin as f32 * sample_rate as f32 / frame_size as f32
}
