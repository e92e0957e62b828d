//! Analysis result types

use serde::{Deserialize, Serialize};

/// Indian classical music tradition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tradition {
    /// The South Indian tradition: generally faster tempi and a brighter tone
    Carnatic,
    /// The North Indian tradition
    Hindustani,
}

impl Tradition {
    /// User-facing label for this tradition
    ///
    /// # Example
    ///
    /// ```
    /// use raga_dsp::analysis::result::Tradition;
    ///
    /// assert_eq!(Tradition::Carnatic.label(), "Carnatic Classical Music");
    /// assert_eq!(Tradition::Hindustani.label(), "Hindustani Classical Music");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Tradition::Carnatic => "Carnatic Classical Music",
            Tradition::Hindustani => "Hindustani Classical Music",
        }
    }
}

/// Complete analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Global tempo estimate in BPM (0.0 when no beat could be detected)
    pub tempo_bpm: f32,

    /// Per-frame spectral centroid series in Hz
    pub centroid_hz: Vec<f32>,

    /// Arithmetic mean of the centroid series in Hz
    pub avg_centroid_hz: f32,

    /// Chroma matrix, one 12-bin pitch-class vector per frame (display only)
    pub chroma: Vec<[f32; 12]>,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

impl AnalysisResult {
    /// Whether both classification features are positive
    ///
    /// A tempo or mean centroid of 0.0 means extraction found nothing usable
    /// (silence, no detectable beat); classification should be skipped.
    pub fn has_valid_features(&self) -> bool {
        self.tempo_bpm > 0.0 && self.avg_centroid_hz > 0.0
    }
}

/// Analysis metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Audio duration in seconds
    pub duration_seconds: f32,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(tempo_bpm: f32, avg_centroid_hz: f32) -> AnalysisResult {
        AnalysisResult {
            tempo_bpm,
            centroid_hz: vec![avg_centroid_hz],
            avg_centroid_hz,
            chroma: Vec::new(),
            metadata: AnalysisMetadata {
                duration_seconds: 1.0,
                sample_rate: 44100,
                processing_time_ms: 0.0,
                algorithm_version: "test".to_string(),
            },
        }
    }

    #[test]
    fn test_tradition_labels() {
        assert_eq!(Tradition::Carnatic.label(), "Carnatic Classical Music");
        assert_eq!(Tradition::Hindustani.label(), "Hindustani Classical Music");
    }

    #[test]
    fn test_has_valid_features() {
        assert!(result_with(120.0, 1500.0).has_valid_features());
        assert!(!result_with(0.0, 1500.0).has_valid_features());
        assert!(!result_with(120.0, 0.0).has_valid_features());
        assert!(!result_with(0.0, 0.0).has_valid_features());
    }

    #[test]
    fn test_result_serializes() {
        let json = serde_json::to_string(&result_with(130.0, 2500.0)).unwrap();
        assert!(json.contains("\"tempo_bpm\":130.0"));
    }
}
