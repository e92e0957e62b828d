//! Chroma extraction
//!
//! Folds the magnitude spectrogram into 12 pitch-class energy bins per frame
//! (C = 0, C# = 1, ..., B = 11), independent of octave. The chroma matrix is
//! used for display only; the classifier never consults it.

use crate::features::spectrogram::bin_frequency;

/// Number of pitch classes per octave
pub const N_PITCH_CLASSES: usize = 12;

/// Lowest frequency mapped to a pitch class, in Hz
///
/// Bins below this (including DC) carry no usable pitch information and are
/// dominated by rumble and window leakage.
const MIN_PITCH_HZ: f32 = 27.5;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Extract a chroma matrix from a magnitude spectrogram
///
/// Each FFT bin above [`MIN_PITCH_HZ`] is assigned to the pitch class of its
/// nearest equal-tempered semitone (relative to `reference_a4_hz`), and the
/// bin's energy (magnitude squared) is accumulated there. Each frame is then
/// normalized by its maximum so the heat map is readable regardless of level.
///
/// # Arguments
///
/// * `spectrogram` - Magnitude spectrogram (n_frames x n_bins)
/// * `sample_rate` - Sample rate in Hz
/// * `frame_size` - FFT frame size used to compute the spectrogram
/// * `reference_a4_hz` - Tuning reference for A4 (default 440.0)
///
/// # Returns
///
/// One `[f32; 12]` chroma vector per frame, values in [0, 1]. Silent frames
/// come back all-zero.
pub fn chroma_from_spectrogram(
    spectrogram: &[Vec<f32>],
    sample_rate: u32,
    frame_size: usize,
    reference_a4_hz: f32,
) -> Vec<[f32; N_PITCH_CLASSES]> {
    // Pitch class per bin depends only on the bin index, so map once
    let n_bins = spectrogram.first().map(|f| f.len()).unwrap_or(0);
    let bin_to_class: Vec<Option<usize>> = (0..n_bins)
        .map(|bin| pitch_class(bin_frequency(bin, sample_rate, frame_size), reference_a4_hz))
        .collect();

    spectrogram
        .iter()
        .map(|frame| {
            let mut chroma = [0.0f32; N_PITCH_CLASSES];
            for (bin, &magnitude) in frame.iter().enumerate() {
                if let Some(class) = bin_to_class.get(bin).copied().flatten() {
                    chroma[class] += magnitude * magnitude;
                }
            }

            let max = chroma.iter().copied().fold(0.0f32, f32::max);
            if max > EPSILON {
                for v in chroma.iter_mut() {
                    *v /= max;
                }
            }
            chroma
        })
        .collect()
}

/// Pitch class (0 = C .. 11 = B) of a frequency, or `None` below the floor
fn pitch_class(freq_hz: f32, reference_a4_hz: f32) -> Option<usize> {
    if freq_hz < MIN_PITCH_HZ {
        return None;
    }
    // MIDI note number: A4 = 69, C4 = 60, so note % 12 == 0 lands on C
    let midi = 69.0 + 12.0 * (freq_hz / reference_a4_hz).log2();
    let class = (midi.round() as i64).rem_euclid(12) as usize;
    Some(class)
}
