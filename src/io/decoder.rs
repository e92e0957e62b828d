//! Audio decoding using Symphonia
//!
//! Decodes any container/codec Symphonia is built with (WAV, FLAC, Vorbis,
//! MP3, ...) into mono f32 samples. The file handle lives inside the media
//! source stream, so it is released when this function returns, whether
//! decoding succeeded or not.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AnalysisError;

/// Decode an audio file to mono PCM samples
///
/// Multi-channel audio is downmixed by averaging the channels per frame.
/// All source sample formats are converted to f32 in [-1.0, 1.0].
///
/// # Arguments
///
/// * `path` - Path to the audio file
///
/// # Returns
///
/// Tuple of (mono samples, sample rate)
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` when the file cannot be opened,
/// its format is not recognized, it contains no decodable audio track, or
/// it decodes to zero samples. Corrupted packets inside an otherwise valid
/// stream are skipped, matching typical decoder behavior.
pub fn decode_audio(path: &Path) -> Result<(Vec<f32>, u32), AnalysisError> {
    log::debug!("Decoding audio file: {}", path.display());

    let file = File::open(path)
        .map_err(|e| AnalysisError::DecodingError(format!("{}: {}", path.display(), e)))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AnalysisError::DecodingError(format!("unrecognized format: {}", e)))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| AnalysisError::DecodingError("no supported audio track".to_string()))?;
    let track_id = track.id;

    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| AnalysisError::DecodingError("missing sample rate".to_string()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AnalysisError::DecodingError(format!("unsupported codec: {}", e)))?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream surfaces as an I/O error in Symphonia
            Err(_) => break,
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                let channels = spec.channels.count();

                let buf = sample_buf
                    .get_or_insert_with(|| SampleBuffer::new(decoded.capacity() as u64, spec));
                buf.copy_interleaved_ref(decoded);

                if channels <= 1 {
                    samples.extend_from_slice(buf.samples());
                } else {
                    samples.extend(
                        buf.samples()
                            .chunks_exact(channels)
                            .map(|frame| frame.iter().sum::<f32>() / channels as f32),
                    );
                }
            }
            Err(SymphoniaError::DecodeError(e)) => {
                // Corrupted packet; skip and keep going
                log::warn!("Skipping undecodable packet: {}", e);
                continue;
            }
            Err(e) => return Err(AnalysisError::DecodingError(e.to_string())),
        }
    }

    if samples.is_empty() {
        return Err(AnalysisError::DecodingError(
            "decoded no audio samples".to_string(),
        ));
    }

    log::debug!(
        "Decoded {} mono samples at {} Hz ({:.2}s)",
        samples.len(),
        sample_rate,
        samples.len() as f32 / sample_rate as f32
    );

    Ok((samples, sample_rate))
}
