use std::sync::{Arc, Mutex};
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::StreamConfig;

use crate::audio::domain::audio_recorder::AudioRecorder;
use crate::audio::domain::audio_segment::AudioSegment;

/// Captures a fixed-duration mono clip from the default input device.
///
/// The capture is blocking: `record` returns once the requested duration has
/// elapsed. Devices that cannot open at the target rate are captured at their
/// native rate and resampled afterwards.
pub struct CpalRecorder {
    target_sample_rate: u32,
}

impl CpalRecorder {
    pub fn new(target_sample_rate: u32) -> Self {
        Self { target_sample_rate }
    }

    fn input_config(
        device: &cpal::Device,
        target_rate: u32,
    ) -> Result<StreamConfig, Box<dyn std::error::Error>> {
        let mut config: StreamConfig = device.default_input_config()?.into();
        for supported in device.supported_input_configs()? {
            if supported.min_sample_rate().0 <= target_rate
                && supported.max_sample_rate().0 >= target_rate
            {
                config.sample_rate = cpal::SampleRate(target_rate);
                break;
            }
        }
        Ok(config)
    }
}

impl AudioRecorder for CpalRecorder {
    fn record(&self, duration_secs: f64) -> Result<AudioSegment, Box<dyn std::error::Error>> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or("no audio input device available")?;
        log::info!("recording from input device: {}", device.name()?);

        let config = Self::input_config(&device, self.target_sample_rate)?;
        let channels = config.channels as usize;
        let device_rate = config.sample_rate.0;

        let buffer = Arc::new(Mutex::new(Vec::<f32>::new()));
        let callback_buffer = Arc::clone(&buffer);

        let stream = device.build_input_stream(
            &config,
            move |data: &[f32], _: &cpal::InputCallbackInfo| {
                let Ok(mut buf) = callback_buffer.lock() else {
                    return;
                };
                if channels == 1 {
                    buf.extend_from_slice(data);
                } else {
                    for frame in data.chunks(channels) {
                        buf.push(frame.iter().sum::<f32>() / channels as f32);
                    }
                }
            },
            |err| log::error!("audio stream error: {err}"),
            None,
        )?;

        stream.play()?;
        std::thread::sleep(Duration::from_secs_f64(duration_secs));
        drop(stream);

        let captured = buffer
            .lock()
            .map_err(|_| "audio buffer mutex poisoned")?
            .clone();
        log::debug!(
            "captured {} samples ({:.2}s at {} Hz)",
            captured.len(),
            captured.len() as f64 / device_rate as f64,
            device_rate
        );

        let samples = resample(&captured, device_rate, self.target_sample_rate);
        Ok(AudioSegment::new(samples, self.target_sample_rate, 1))
    }
}

/// Linear-interpolation resampling between sample rates.
fn resample(input: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || input.is_empty() {
        return input.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_len = (input.len() as f64 / ratio) as usize;
    let mut output = Vec::with_capacity(output_len);

    for i in 0..output_len {
        let src = i as f64 * ratio;
        let lo = src.floor() as usize;
        let hi = (lo + 1).min(input.len() - 1);
        let frac = (src - lo as f64) as f32;
        output.push(input[lo] * (1.0 - frac) + input[hi] * frac);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resample_identity() {
        let input = vec![0.1, 0.2, 0.3];
        assert_eq!(resample(&input, 16000, 16000), input);
    }

    #[test]
    fn test_resample_halves_length() {
        let input: Vec<f32> = (0..32000).map(|i| (i % 100) as f32 / 100.0).collect();
        let output = resample(&input, 32000, 16000);
        assert_eq!(output.len(), 16000);
    }

    #[test]
    fn test_resample_interpolates_between_neighbors() {
        // Downsampling 4 -> 2 keeps every other input point.
        let output = resample(&[0.0, 1.0, 0.0, 1.0], 4, 2);
        assert_eq!(output.len(), 2);
        assert_relative_eq!(output[0], 0.0);
        assert_relative_eq!(output[1], 0.0);
    }

    #[test]
    fn test_resample_empty_input() {
        assert!(resample(&[], 48000, 16000).is_empty());
    }
}
