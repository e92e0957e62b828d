//! Configuration parameters for audio analysis

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // STFT parameters
    /// Frame size for STFT (default: 2048)
    pub frame_size: usize,

    /// Hop size for STFT (default: 512)
    pub hop_size: usize,

    // Tempo estimation
    /// Minimum BPM to consider (default: 40.0)
    ///
    /// Wide enough to cover vilambit laya in Hindustani performances.
    pub min_bpm: f32,

    /// Maximum BPM to consider (default: 220.0)
    pub max_bpm: f32,

    // Classification thresholds
    /// Tempo threshold in BPM separating the two traditions (default: 120.0)
    ///
    /// Carnatic performances generally sit above this tempo. The value is a
    /// heuristic default, not a derived constant; callers may override it.
    pub tempo_threshold_bpm: f32,

    /// Spectral centroid threshold in Hz (default: 2000.0)
    ///
    /// Carnatic timbre tends to be brighter, pushing the centroid above this
    /// value. Same caveat as `tempo_threshold_bpm`.
    pub centroid_threshold_hz: f32,

    // Chroma extraction
    /// Reference frequency for pitch-class mapping (default: 440.0 Hz, A4)
    pub reference_a4_hz: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_size: 2048,
            hop_size: 512,
            min_bpm: 40.0,
            max_bpm: 220.0,
            tempo_threshold_bpm: 120.0,
            centroid_threshold_hz: 2000.0,
            reference_a4_hz: 440.0,
        }
    }
}

impl AnalysisConfig {
    /// Validate configuration parameters
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if any parameter is out of range
    /// (zero frame/hop size, hop larger than frame, inverted BPM range, or
    /// non-positive thresholds).
    pub fn validate(&self) -> Result<(), crate::error::AnalysisError> {
        use crate::error::AnalysisError;

        if self.frame_size == 0 {
            return Err(AnalysisError::InvalidInput("frame_size must be > 0".to_string()));
        }
        if self.hop_size == 0 {
            return Err(AnalysisError::InvalidInput("hop_size must be > 0".to_string()));
        }
        if self.hop_size > self.frame_size {
            return Err(AnalysisError::InvalidInput(format!(
                "hop_size ({}) must not exceed frame_size ({})",
                self.hop_size, self.frame_size
            )));
        }
        if self.min_bpm <= 0.0 || self.max_bpm <= self.min_bpm {
            return Err(AnalysisError::InvalidInput(format!(
                "invalid BPM range: [{}, {}]",
                self.min_bpm, self.max_bpm
            )));
        }
        if self.tempo_threshold_bpm <= 0.0 || self.centroid_threshold_hz <= 0.0 {
            return Err(AnalysisError::InvalidInput(
                "classification thresholds must be positive".to_string(),
            ));
        }
        if self.reference_a4_hz <= 0.0 {
            return Err(AnalysisError::InvalidInput(
                "reference_a4_hz must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
