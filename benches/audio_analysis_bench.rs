//! Performance benchmarks for audio analysis

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use raga_dsp::features::{centroid, chroma, spectrogram, tempo};
use raga_dsp::{analyze_audio, AnalysisConfig};

/// 30 seconds of a bright drone with clicks at the given tempo
fn synth_performance(bpm: f32, sample_rate: u32) -> Vec<f32> {
    let n = (sample_rate * 30) as usize;
    let mut samples: Vec<f32> = (0..n)
        .map(|i| {
            (2.0 * std::f32::consts::PI * 2800.0 * i as f32 / sample_rate as f32).sin() * 0.4
        })
        .collect();

    let period = (sample_rate as f32 * 60.0 / bpm) as usize;
    let click_len = (sample_rate as f32 * 0.02) as usize;
    let mut start = 0;
    while start < samples.len() {
        for i in 0..click_len.min(samples.len() - start) {
            let t = i as f32 / sample_rate as f32;
            samples[start + i] +=
                (2.0 * std::f32::consts::PI * 5000.0 * t).sin() * (-t * 200.0).exp() * 0.5;
        }
        start += period;
    }

    samples
}

fn bench_full_pipeline(c: &mut Criterion) {
    let samples = synth_performance(150.0, 44100);
    let config = AnalysisConfig::default();

    c.bench_function("analyze_audio_30s_click_track", |b| {
        b.iter(|| {
            let _ = analyze_audio(black_box(&samples), black_box(44100), black_box(&config));
        });
    });
}

fn bench_feature_stages(c: &mut Criterion) {
    let samples = synth_performance(150.0, 44100);
    let config = AnalysisConfig::default();

    let spec = spectrogram::magnitude_spectrogram(&samples, config.frame_size, config.hop_size)
        .expect("spectrogram");
    let frame_rate = spectrogram::frame_rate(44100, config.hop_size);

    c.bench_function("magnitude_spectrogram_30s", |b| {
        b.iter(|| {
            let _ = spectrogram::magnitude_spectrogram(
                black_box(&samples),
                config.frame_size,
                config.hop_size,
            );
        });
    });

    c.bench_function("spectral_centroid_30s", |b| {
        b.iter(|| {
            let series =
                centroid::spectral_centroid_series(black_box(&spec), 44100, config.frame_size);
            black_box(centroid::mean_centroid(&series));
        });
    });

    c.bench_function("chroma_30s", |b| {
        b.iter(|| {
            black_box(chroma::chroma_from_spectrogram(
                black_box(&spec),
                44100,
                config.frame_size,
                config.reference_a4_hz,
            ));
        });
    });

    c.bench_function("tempo_30s", |b| {
        b.iter(|| {
            let novelty = tempo::spectral_flux_novelty(black_box(&spec));
            black_box(tempo::estimate_tempo(
                &novelty,
                frame_rate,
                config.min_bpm,
                config.max_bpm,
            ));
        });
    });
}

criterion_group!(benches, bench_full_pipeline, bench_feature_stages);
criterion_main!(benches);
