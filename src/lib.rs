//! # Raga DSP
//!
//! An audio analysis engine for Indian classical music, extracting tempo and
//! spectral features and classifying recordings as Carnatic or Hindustani.
//!
//! ## Features
//!
//! - **Tempo Estimation**: Spectral-flux novelty curve with FFT-accelerated
//!   autocorrelation peak picking
//! - **Spectral Centroid**: Per-frame brightness series plus mean reduction
//! - **Chroma Extraction**: 12-bin pitch-class matrix for visualization
//! - **Classification**: Two-threshold Carnatic/Hindustani rule over
//!   (tempo, mean centroid), thresholds configurable
//! - **Visualization**: Two-panel centroid/chroma figure (PNG or on-screen)
//!
//! ## Quick Start
//!
//! ```no_run
//! use raga_dsp::{analyze_audio, classify, AnalysisConfig};
//!
//! // Load audio samples (mono, f32, normalized)
//! let samples: Vec<f32> = vec![]; // Your audio data
//! let sample_rate = 44100;
//!
//! let config = AnalysisConfig::default();
//! let result = analyze_audio(&samples, sample_rate, &config)?;
//!
//! println!("Tempo: {:.2} BPM", result.tempo_bpm);
//! println!("Spectral Centroid: {:.2} Hz", result.avg_centroid_hz);
//!
//! if result.has_valid_features() {
//!     let tradition = classify(result.tempo_bpm, result.avg_centroid_hz, &config);
//!     println!("The given music is classified as: {}", tradition.label());
//! }
//! # Ok::<(), raga_dsp::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The analysis pipeline follows this flow:
//!
//! ```text
//! Audio File → Decoding → STFT → Feature Extraction → Classification
//!                                       ↓
//!                                 Visualization
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod viz;

// Re-export main types
pub use analysis::classifier::classify;
pub use analysis::result::{AnalysisMetadata, AnalysisResult, Tradition};
pub use config::AnalysisConfig;
pub use error::AnalysisError;

/// Current analysis algorithm version, recorded in result metadata
pub const ALGORITHM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main analysis function
///
/// Extracts all features the classifier and visualizer need from a mono
/// waveform: a global tempo estimate, the per-frame spectral centroid series
/// with its mean, and a chroma matrix. The STFT is computed once and shared
/// by all three extractors.
///
/// A tempo or mean centroid of 0.0 in the result is not an error; it means
/// the signal had no detectable beat or no spectral energy (e.g. silence).
/// Use [`AnalysisResult::has_valid_features`] before classifying.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz (typically 44100 or 48000)
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// [`AnalysisResult`] containing tempo, centroid series and mean, chroma
/// matrix, and metadata
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidInput`] for empty samples, a zero sample
/// rate, or an invalid configuration; processing failures from the feature
/// extractors propagate unchanged.
pub fn analyze_audio(
    samples: &[f32],
    sample_rate: u32,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting audio analysis: {} samples at {} Hz",
        samples.len(),
        sample_rate
    );

    if samples.is_empty() {
        return Err(AnalysisError::InvalidInput("Empty audio samples".to_string()));
    }

    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput("Invalid sample rate".to_string()));
    }

    config.validate()?;

    let spectrogram =
        features::spectrogram::magnitude_spectrogram(samples, config.frame_size, config.hop_size)?;

    let centroid_hz =
        features::centroid::spectral_centroid_series(&spectrogram, sample_rate, config.frame_size);
    let avg_centroid_hz = features::centroid::mean_centroid(&centroid_hz);

    let chroma = features::chroma::chroma_from_spectrogram(
        &spectrogram,
        sample_rate,
        config.frame_size,
        config.reference_a4_hz,
    );

    let novelty = features::tempo::spectral_flux_novelty(&spectrogram);
    let frame_rate = features::spectrogram::frame_rate(sample_rate, config.hop_size);
    let tempo_bpm =
        features::tempo::estimate_tempo(&novelty, frame_rate, config.min_bpm, config.max_bpm);

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;
    log::debug!(
        "Analysis complete in {:.2} ms: tempo={:.2} BPM, centroid={:.2} Hz, {} frames",
        processing_time_ms,
        tempo_bpm,
        avg_centroid_hz,
        centroid_hz.len()
    );

    Ok(AnalysisResult {
        tempo_bpm,
        centroid_hz,
        avg_centroid_hz,
        chroma,
        metadata: AnalysisMetadata {
            duration_seconds: samples.len() as f32 / sample_rate as f32,
            sample_rate,
            processing_time_ms,
            algorithm_version: ALGORITHM_VERSION.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_rejects_empty_input() {
        let config = AnalysisConfig::default();
        assert!(analyze_audio(&[], 44100, &config).is_err());
        assert!(analyze_audio(&[0.0; 1024], 0, &config).is_err());
    }

    #[test]
    fn test_analyze_silence_has_no_valid_features() {
        let samples = vec![0.0f32; 44100 * 2];
        let config = AnalysisConfig::default();
        let result = analyze_audio(&samples, 44100, &config).unwrap();

        assert_eq!(result.tempo_bpm, 0.0);
        assert_eq!(result.avg_centroid_hz, 0.0);
        assert!(!result.has_valid_features());
    }

    #[test]
    fn test_analyze_metadata() {
        let samples = vec![0.0f32; 44100 * 3];
        let config = AnalysisConfig::default();
        let result = analyze_audio(&samples, 44100, &config).unwrap();

        assert!((result.metadata.duration_seconds - 3.0).abs() < 0.01);
        assert_eq!(result.metadata.sample_rate, 44100);
        assert_eq!(result.metadata.algorithm_version, ALGORITHM_VERSION);
    }
}
