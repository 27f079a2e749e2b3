// Offline synthesis of the click cue and the ambient drone, encoded as WAV.
use std::f32::consts::TAU;

use crate::error::SynthError;

pub const SAMPLE_RATE: u32 = 22_050;
/// Length of the looping ambient bed.
pub const AMBIENT_LOOP_SECS: f32 = 20.0;

const CLICK_SECS: f32 = 0.08;
const CLICK_SWEEP_SECS: f32 = 0.06;

#[derive(Clone, Copy)]
enum Wave {
    Sine,
    Triangle,
}

impl Wave {
    fn at(self, phase: f32) -> f32 {
        match self {
            Wave::Sine => phase.sin(),
            Wave::Triangle => {
                let x = (phase / TAU).rem_euclid(1.0);
                1.0 - 4.0 * (x - 0.5).abs()
            }
        }
    }
}

/// One oscillator of the drone, with optional vibrato and tremolo.
#[derive(Clone, Copy)]
struct Voice {
    freq: f32,
    wave: Wave,
    gain: f32,
    vibrato_rate: f32,
    vibrato_depth: f32,
    tremolo_rate: f32,
    tremolo_depth: f32,
    lowpass_hz: Option<f32>,
}

impl Voice {
    fn sine(freq: f32, gain: f32) -> Self {
        Self {
            freq,
            wave: Wave::Sine,
            gain,
            vibrato_rate: 0.0,
            vibrato_depth: 0.0,
            tremolo_rate: 0.0,
            tremolo_depth: 0.0,
            lowpass_hz: None,
        }
    }

    fn vibrato(mut self, rate: f32, depth: f32) -> Self {
        self.vibrato_rate = rate;
        self.vibrato_depth = depth;
        self
    }
}

/// Rounds `freq` to a whole number of cycles per loop so the bed wraps cleanly.
fn loop_aligned(freq: f32, period: f32) -> f32 {
    (freq * period).round().max(1.0) / period
}

fn ambient_voices() -> Vec<Voice> {
    let mut voices = Vec::new();

    // Deep bass, each note doubled slightly sharp.
    for (i, freq) in [55.0, 82.4, 110.0].into_iter().enumerate() {
        let gain = 0.06 / (i + 1) as f32;
        let rate = 0.05 + i as f32 * 0.01;
        voices.push(Voice::sine(freq, gain).vibrato(rate, freq * 0.003));
        voices.push(Voice::sine(freq * 1.002, gain));
    }

    // Filtered pad.
    for (i, freq) in [164.8, 220.0, 329.6].into_iter().enumerate() {
        let gain = 0.025 / (i + 1) as f32;
        let rate = 0.03 + i as f32 * 0.007;
        voices.push(Voice {
            lowpass_hz: Some(800.0),
            ..Voice::sine(freq, gain).vibrato(rate, freq * 0.005)
        });
        voices.push(Voice {
            wave: Wave::Triangle,
            lowpass_hz: Some(800.0),
            ..Voice::sine(freq * 0.998, gain)
        });
    }

    // High harmonics with a slow swell.
    for (i, freq) in [440.0, 554.4, 659.3, 880.0].into_iter().enumerate() {
        let gain = 0.008 / (i + 1) as f32;
        voices.push(Voice {
            tremolo_rate: 0.02 + i as f32 * 0.005,
            tremolo_depth: 0.005 / (i + 1) as f32,
            ..Voice::sine(freq, gain).vibrato(0.04 + i as f32 * 0.01, freq * 0.002)
        });
    }

    // Sub bass.
    voices.push(Voice::sine(32.7, 0.07).vibrato(0.015, 2.0));
    voices.push(Voice::sine(65.4, 0.07));

    // Open fifths.
    for (i, freq) in [73.4, 110.0, 146.8].into_iter().enumerate() {
        voices.push(Voice::sine(freq, 0.02 / (i + 1) as f32).vibrato(0.025, freq * 0.004));
    }

    voices
}

fn render_voice(voice: Voice, out: &mut [f32], sample_rate: u32, period: f32) {
    let dt = 1.0 / sample_rate as f32;
    let freq = loop_aligned(voice.freq, period);
    let vibrato_rate = if voice.vibrato_depth > 0.0 {
        loop_aligned(voice.vibrato_rate, period)
    } else {
        0.0
    };
    let tremolo_rate = if voice.tremolo_depth > 0.0 {
        loop_aligned(voice.tremolo_rate, period)
    } else {
        0.0
    };
    let alpha = voice
        .lowpass_hz
        .map(|cutoff| 1.0 - (-TAU * cutoff * dt).exp());

    let mut phase = 0.0_f32;
    let mut filtered = 0.0_f32;
    for (n, sample) in out.iter_mut().enumerate() {
        let t = n as f32 * dt;
        let vibrato = voice.vibrato_depth * (TAU * vibrato_rate * t).sin();
        phase = (phase + TAU * (freq + vibrato) * dt).rem_euclid(TAU);
        let mut value = voice.wave.at(phase);
        if let Some(alpha) = alpha {
            filtered += (value - filtered) * alpha;
            value = filtered;
        }
        let gain = voice.gain + voice.tremolo_depth * (TAU * tremolo_rate * t).sin();
        *sample += value * gain.max(0.0);
    }
}

/// The looping drone, mono, [`AMBIENT_LOOP_SECS`] long.
pub fn ambient_bed(sample_rate: u32) -> Vec<f32> {
    let len = (AMBIENT_LOOP_SECS * sample_rate as f32) as usize;
    let mut out = vec![0.0; len];
    for voice in ambient_voices() {
        render_voice(voice, &mut out, sample_rate, AMBIENT_LOOP_SECS);
    }
    out
}

/// Short downward blip played when a ring opens: 520 Hz to 280 Hz.
pub fn ring_click(sample_rate: u32) -> Vec<f32> {
    let len = (CLICK_SECS * sample_rate as f32) as usize;
    let dt = 1.0 / sample_rate as f32;
    let mut phase = 0.0_f32;
    (0..len)
        .map(|n| {
            let t = n as f32 * dt;
            let sweep = (t / CLICK_SWEEP_SECS).min(1.0);
            let freq = 520.0 * (280.0_f32 / 520.0).powf(sweep);
            let gain = 0.12 * (0.001_f32 / 0.12).powf(t / CLICK_SECS);
            phase = (phase + TAU * freq * dt).rem_euclid(TAU);
            phase.sin() * gain
        })
        .collect()
}

/// 16-bit PCM mono WAV.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, SynthError> {
    if samples.is_empty() {
        return Err(SynthError::EmptyBuffer);
    }
    let data_len = samples
        .len()
        .checked_mul(2)
        .and_then(|bytes| u32::try_from(bytes).ok())
        .filter(|bytes| *bytes <= u32::MAX - 36)
        .ok_or(SynthError::TooLong {
            samples: samples.len(),
        })?;

    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        let pcm = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        wav.extend_from_slice(&pcm.to_le_bytes());
    }
    Ok(wav)
}
