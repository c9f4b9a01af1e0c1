//! Audio loading and loudness analysis.

use crate::error::AudioError;
use crate::types::EnergySample;
use hound::{SampleFormat, WavReader};
use std::path::Path;

/// RMS analysis window in milliseconds
const RMS_WINDOW_MS: usize = 500;

/// Hop between RMS windows in milliseconds
const RMS_HOP_MS: usize = 100;

/// A peak must exceed the median RMS by this factor
const PEAK_FACTOR: f32 = 1.8;

/// Load a WAV file as mono f32 samples, returning the sample rate.
///
/// Stereo is converted to mono by averaging channel pairs; integer formats
/// are normalized to [-1, 1] by their bit depth.
///
/// # Errors
///
/// Returns error if the file cannot be read or has more than two channels.
pub fn load_wav_mono(path: impl AsRef<Path>) -> Result<(Vec<f32>, u32), AudioError> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels == 0 || spec.channels > 2 {
        return Err(AudioError::InvalidChannels(spec.channels));
    }

    let mut samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<hound::Result<_>>()?,
        SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 / scale))
                .collect::<hound::Result<_>>()?
        }
    };

    if spec.channels == 2 {
        samples = samples
            .chunks(2)
            .map(|pair| pair.iter().sum::<f32>() / 2.0)
            .collect();
    }

    Ok((samples, spec.sample_rate))
}

/// Compute the loudness curve of a WAV file.
///
/// Returns an empty curve on any failure; a missing energy signal degrades
/// scoring instead of aborting the run.
pub fn loudness_from_wav(path: impl AsRef<Path>) -> Vec<EnergySample> {
    let path = path.as_ref();
    match load_wav_mono(path) {
        Ok((samples, sample_rate)) => loudness_curve(&samples, sample_rate),
        Err(e) => {
            tracing::warn!(path = ?path.display(), error = %e, "audio energy computation failed");
            Vec::new()
        }
    }
}

/// Windowed RMS loudness curve over mono samples.
///
/// 500ms windows advance in 100ms hops; each sample is stamped at its window
/// start. Audio shorter than one window yields an empty curve.
pub fn loudness_curve(samples: &[f32], sample_rate: u32) -> Vec<EnergySample> {
    let window = sample_rate as usize * RMS_WINDOW_MS / 1000;
    let hop = (sample_rate as usize * RMS_HOP_MS / 1000).max(1);

    if window == 0 || samples.len() <= window {
        return Vec::new();
    }

    (0..samples.len() - window)
        .step_by(hop)
        .map(|i| {
            let chunk = &samples[i..i + window];
            let mean_square = chunk.iter().map(|s| s * s).sum::<f32>() / window as f32;
            EnergySample {
                time: i as f32 / sample_rate as f32,
                rms: mean_square.sqrt(),
            }
        })
        .collect()
}

/// Find timestamps where the loudness curve clearly exceeds its median level.
///
/// Peaks closer than `min_gap` seconds to the previous peak are dropped.
/// Returns nothing when the curve is empty or its median is zero (silence).
pub fn energy_peaks(curve: &[EnergySample], min_gap: f32) -> Vec<f32> {
    if curve.is_empty() {
        return Vec::new();
    }

    let median = median_rms(curve);
    if median == 0.0 {
        return Vec::new();
    }

    let threshold = median * PEAK_FACTOR;
    let mut peaks: Vec<f32> = Vec::new();

    for sample in curve {
        if sample.rms > threshold
            && peaks.last().is_none_or(|last| sample.time - last >= min_gap)
        {
            peaks.push(sample.time);
        }
    }

    peaks
}

fn median_rms(curve: &[EnergySample]) -> f32 {
    let mut values: Vec<f32> = curve.iter().map(|s| s.rms).collect();
    values.sort_by(f32::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
