use super::audio_segment::AudioSegment;

/// Domain interface for capturing audio from the default input device.
///
/// Capture blocks the caller until the requested duration has elapsed.
pub trait AudioRecorder: Send {
    fn record(&self, duration_secs: f64) -> Result<AudioSegment, Box<dyn std::error::Error>>;
}
