use std::path::Path;

use super::audio_segment::AudioSegment;

/// Domain interface for persisting an AudioSegment as a file.
pub trait AudioWriter: Send {
    fn write_audio(
        &self,
        path: &Path,
        audio: &AudioSegment,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
