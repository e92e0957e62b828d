//! Tradition classification
//!
//! A two-threshold heuristic over (tempo, mean spectral centroid): Carnatic
//! performances tend to be both faster and brighter than Hindustani ones.
//! The thresholds are heuristic defaults carried in [`AnalysisConfig`], not
//! derived constants.

use crate::config::AnalysisConfig;
use crate::analysis::result::Tradition;

/// Classify a recording as Carnatic or Hindustani
///
/// Returns [`Tradition::Carnatic`] iff `tempo_bpm` is strictly greater than
/// `config.tempo_threshold_bpm` AND `avg_centroid_hz` is strictly greater
/// than `config.centroid_threshold_hz`; otherwise [`Tradition::Hindustani`].
/// Values exactly on a threshold yield Hindustani.
///
/// The function is total and pure over non-negative inputs; the same pair
/// always produces the same label. Both inputs are echoed via `log::debug!`
/// before returning.
///
/// # Arguments
///
/// * `tempo_bpm` - Tempo estimate in BPM (>= 0)
/// * `avg_centroid_hz` - Mean spectral centroid in Hz (>= 0)
/// * `config` - Configuration carrying the two thresholds
pub fn classify(tempo_bpm: f32, avg_centroid_hz: f32, config: &AnalysisConfig) -> Tradition {
    log::debug!(
        "Classifier inputs: tempo={} BPM, spectral centroid={} Hz",
        tempo_bpm,
        avg_centroid_hz
    );

    if tempo_bpm > config.tempo_threshold_bpm && avg_centroid_hz > config.centroid_threshold_hz {
        Tradition::Carnatic
    } else {
        Tradition::Hindustani
    }
}
