//! Feature extraction modules
//!
//! This module contains all feature extraction algorithms:
//! - STFT magnitude spectrogram (shared by everything below)
//! - Spectral centroid series + mean reduction
//! - Chroma extraction (12 pitch classes per frame)
//! - Tempo estimation (spectral flux novelty + autocorrelation)

pub mod centroid;
pub mod chroma;
pub mod spectrogram;
pub mod tempo;
