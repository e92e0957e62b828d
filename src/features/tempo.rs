//! Tempo estimation
//!
//! Estimates a single global tempo from the magnitude spectrogram in two
//! steps:
//!
//! 1. **Spectral flux novelty**: frame-to-frame positive spectral change,
//!    which spikes at note onsets.
//! 2. **Autocorrelation**: FFT-accelerated autocorrelation of the novelty
//!    curve (`ACF = IFFT(|FFT(x)|²)`); the strongest periodicity within the
//!    configured BPM range is the tempo.
//!
//! Degenerate inputs (short signal, flat novelty, no peak in range) produce
//! a tempo of 0.0 rather than an error, which the caller's validity gate
//! reports as "could not extract valid features".
//!
//! # Reference
//!
//! Ellis, D. P. W., & Pikrakis, A. (2006). Real-time Beat Induction.
//! *Proceedings of the International Conference on Music Information Retrieval*.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Extract the spectral flux novelty curve from a magnitude spectrogram
///
/// Each frame is normalized to [0, 1] by its own maximum, then the L1 sum of
/// positive bin differences between consecutive frames is taken. Positive
/// differences emphasize onsets over decays. The resulting curve is
/// normalized to [0, 1].
///
/// # Arguments
///
/// * `spectrogram` - Magnitude spectrogram (n_frames x n_bins)
///
/// # Returns
///
/// Novelty curve of length `n_frames - 1`, or empty for fewer than 2 frames.
pub fn spectral_flux_novelty(spectrogram: &[Vec<f32>]) -> Vec<f32> {
    if spectrogram.len() < 2 {
        return Vec::new();
    }

    let normalized: Vec<Vec<f32>> = spectrogram
        .iter()
        .map(|frame| {
            let max = frame.iter().copied().fold(0.0f32, f32::max);
            if max > EPSILON {
                frame.iter().map(|&x| x / max).collect()
            } else {
                vec![0.0f32; frame.len()]
            }
        })
        .collect();

    let mut flux = Vec::with_capacity(normalized.len() - 1);
    for pair in normalized.windows(2) {
        let sum: f32 = pair[0]
            .iter()
            .zip(pair[1].iter())
            .map(|(&prev, &curr)| (curr - prev).max(0.0))
            .sum();
        flux.push(sum);
    }

    let max_flux = flux.iter().copied().fold(0.0f32, f32::max);
    if max_flux > EPSILON {
        for v in flux.iter_mut() {
            *v /= max_flux;
        }
    }

    log::debug!("Computed spectral flux novelty: {} values", flux.len());
    flux
}

/// Estimate tempo in BPM from a novelty curve
///
/// Computes the autocorrelation of the mean-removed novelty curve using FFT
/// acceleration, then picks the lag with the strongest correlation inside
/// the `[min_bpm, max_bpm]` window. The peak lag is refined with parabolic
/// interpolation before conversion to BPM.
///
/// # Arguments
///
/// * `novelty` - Novelty curve (one value per frame transition)
/// * `frame_rate` - Novelty frame rate in frames per second
/// * `min_bpm` - Minimum BPM to consider
/// * `max_bpm` - Maximum BPM to consider
///
/// # Returns
///
/// Tempo in BPM, or 0.0 when no periodicity can be found (too little data,
/// flat novelty, or no positive autocorrelation peak in range).
pub fn estimate_tempo(novelty: &[f32], frame_rate: f32, min_bpm: f32, max_bpm: f32) -> f32 {
    if novelty.is_empty() || frame_rate <= 0.0 || min_bpm <= 0.0 || max_bpm <= min_bpm {
        return 0.0;
    }

    let n = novelty.len();

    // Lag window corresponding to the BPM range
    let min_lag = (frame_rate * 60.0 / max_bpm).ceil() as usize;
    let max_lag = ((frame_rate * 60.0 / min_bpm).floor() as usize).min(n.saturating_sub(1));
    if min_lag == 0 || min_lag > max_lag {
        log::debug!("Novelty curve too short for BPM range: {} values", n);
        return 0.0;
    }

    let mean = novelty.iter().copied().sum::<f32>() / n as f32;

    // Zero-pad to twice the length so the circular autocorrelation from the
    // FFT matches the linear one over the lags we inspect
    let fft_size = (2 * n).next_power_of_two();
    let mut buffer: Vec<Complex<f32>> = novelty
        .iter()
        .map(|&x| Complex::new(x - mean, 0.0))
        .collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(fft_size).process(&mut buffer);
    for v in buffer.iter_mut() {
        *v = Complex::new(v.re * v.re + v.im * v.im, 0.0);
    }
    planner.plan_fft_inverse(fft_size).process(&mut buffer);

    let acf: Vec<f32> = buffer.iter().map(|c| c.re / fft_size as f32).collect();

    // Flat novelty: zero-lag autocorrelation carries no energy
    if acf[0] <= EPSILON {
        log::debug!("Flat novelty curve, no tempo");
        return 0.0;
    }

    // Strongest positive peak inside the lag window
    let mut best_lag = 0usize;
    let mut best_value = 0.0f32;
    for lag in min_lag..=max_lag {
        let value = acf[lag] / acf[0];
        if value > best_value {
            best_value = value;
            best_lag = lag;
        }
    }

    if best_lag == 0 {
        log::debug!(
            "No positive autocorrelation peak in lag window [{}, {}]",
            min_lag,
            max_lag
        );
        return 0.0;
    }

    // Parabolic interpolation around the peak for sub-lag precision
    let refined_lag = if best_lag > min_lag && best_lag < max_lag {
        let left = acf[best_lag - 1];
        let center = acf[best_lag];
        let right = acf[best_lag + 1];
        let denom = left - 2.0 * center + right;
        if denom.abs() > EPSILON {
            best_lag as f32 + 0.5 * (left - right) / denom
        } else {
            best_lag as f32
        }
    } else {
        best_lag as f32
    };

    let bpm = 60.0 * frame_rate / refined_lag;
    log::debug!(
        "Tempo estimate: lag={} ({:.2} refined), acf={:.3}, bpm={:.2}",
        best_lag,
        refined_lag,
        best_value,
        bpm
    );

    bpm.clamp(min_bpm, max_bpm)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Novelty curve with impulses every `period` frames
    fn impulse_train(len: usize, period: usize) -> Vec<f32> {
        (0..len)
            .map(|i| if i % period == 0 { 1.0 } else { 0.0 })
            .collect()
    }

    #[test]
    fn test_spectral_flux_detects_change() {
        let mut spectrogram = vec![vec![0.1f32; 512]; 10];
        for bin in 0..256 {
            spectrogram[5][bin] = 1.0;
        }

        let flux = spectral_flux_novelty(&spectrogram);
        assert_eq!(flux.len(), 9);

        // The transition into frame 5 is flux index 4
        let peak = flux
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak, 4);
    }

    #[test]
    fn test_spectral_flux_too_few_frames() {
        assert!(spectral_flux_novelty(&[]).is_empty());
        assert!(spectral_flux_novelty(&[vec![1.0f32; 512]]).is_empty());
    }

    #[test]
    fn test_estimate_tempo_impulse_train() {
        // Impulses every 40 frames at 86.13 fps -> 60 * 86.13 / 40 ≈ 129.2 BPM
        let frame_rate = 44100.0 / 512.0;
        let novelty = impulse_train(800, 40);

        let bpm = estimate_tempo(&novelty, frame_rate, 40.0, 220.0);
        let expected = 60.0 * frame_rate / 40.0;
        assert!(
            (bpm - expected).abs() < 2.0,
            "expected ~{:.1} BPM, got {:.1}",
            expected,
            bpm
        );
    }

    #[test]
    fn test_estimate_tempo_flat_novelty_is_zero() {
        let novelty = vec![0.5f32; 500];
        assert_eq!(estimate_tempo(&novelty, 86.13, 40.0, 220.0), 0.0);

        let novelty = vec![0.0f32; 500];
        assert_eq!(estimate_tempo(&novelty, 86.13, 40.0, 220.0), 0.0);
    }

    #[test]
    fn test_estimate_tempo_degenerate_inputs() {
        assert_eq!(estimate_tempo(&[], 86.13, 40.0, 220.0), 0.0);
        assert_eq!(estimate_tempo(&[1.0; 10], 86.13, 40.0, 220.0), 0.0);
        assert_eq!(estimate_tempo(&impulse_train(500, 40), 0.0, 40.0, 220.0), 0.0);
        assert_eq!(estimate_tempo(&impulse_train(500, 40), 86.13, 220.0, 40.0), 0.0);
    }

    #[test]
    fn test_estimate_tempo_within_range() {
        let frame_rate = 44100.0 / 512.0;
        let novelty = impulse_train(800, 40);
        let bpm = estimate_tempo(&novelty, frame_rate, 40.0, 220.0);
        assert!(bpm >= 40.0 && bpm <= 220.0);
    }
}
