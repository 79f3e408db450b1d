use std::path::Path;

/// Domain interface for speech-to-text transcription of a recorded file.
///
/// Which language (and therefore which acoustic/language model pair) is used
/// is a construction-time concern of the implementation.
pub trait SpeechRecognizer: Send {
    /// Transcribe the audio file, returning the recognized text trimmed of
    /// surrounding whitespace.
    fn transcribe(&self, audio_path: &Path) -> Result<String, Box<dyn std::error::Error>>;
}
