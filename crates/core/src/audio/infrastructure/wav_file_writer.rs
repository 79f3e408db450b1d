use std::path::Path;

use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::audio_writer::AudioWriter;

/// Writes an AudioSegment as integer PCM WAV via hound.
///
/// Recorded queries are written at 24 bits (the external sox step then
/// produces the 16-bit copy DeepSpeech expects); exported clip segments are
/// written at 16 bits directly.
pub struct WavFileWriter {
    bits_per_sample: u16,
}

impl WavFileWriter {
    pub fn new(bits_per_sample: u16) -> Self {
        Self { bits_per_sample }
    }
}

impl AudioWriter for WavFileWriter {
    fn write_audio(
        &self,
        path: &Path,
        audio: &AudioSegment,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let spec = hound::WavSpec {
            channels: audio.channels(),
            sample_rate: audio.sample_rate(),
            bits_per_sample: self.bits_per_sample,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::create(path, spec)?;
        let max = ((1i64 << (self.bits_per_sample - 1)) - 1) as f32;
        for &sample in audio.samples() {
            writer.write_sample((sample.clamp(-1.0, 1.0) * max) as i32)?;
        }
        writer.finalize()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_16_bit_round_trips_through_hound() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let audio = AudioSegment::new(vec![0.0, 0.5, -0.5, 1.0], 16000, 1);

        WavFileWriter::new(16).write_audio(&path, &audio).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 16000);
        assert_eq!(spec.bits_per_sample, 16);
        let samples: Vec<i32> = reader.samples::<i32>().map(Result::unwrap).collect();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], 0);
        assert_eq!(samples[3], i16::MAX as i32);
    }

    #[test]
    fn test_write_24_bit_spec() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("query.wav");
        let audio = AudioSegment::new(vec![0.0; 160], 16000, 1);

        WavFileWriter::new(24).write_audio(&path, &audio).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().bits_per_sample, 24);
        assert_eq!(reader.len(), 160);
    }

    #[test]
    fn test_write_clamps_out_of_range_samples() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hot.wav");
        let audio = AudioSegment::new(vec![2.0, -2.0], 16000, 1);

        WavFileWriter::new(16).write_audio(&path, &audio).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let samples: Vec<i32> = reader.samples::<i32>().map(Result::unwrap).collect();
        assert_eq!(samples, vec![i16::MAX as i32, -(i16::MAX as i32)]);
    }

    #[test]
    fn test_write_to_unwritable_path_fails() {
        let audio = AudioSegment::new(vec![0.0], 16000, 1);
        let path = if cfg!(windows) {
            Path::new("Z:\\nonexistent\\out.wav")
        } else {
            Path::new("/nonexistent/out.wav")
        };
        assert!(WavFileWriter::new(16).write_audio(path, &audio).is_err());
    }
}
