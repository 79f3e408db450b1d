use std::path::Path;

use super::audio_segment::AudioSegment;

/// Domain interface for decoding an audio file.
pub trait AudioReader: Send {
    /// Decode the file to a mono PCM AudioSegment at the given sample rate.
    /// Returns None if the file contains no audio stream.
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>>;
}
