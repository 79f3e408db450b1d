use std::path::{Path, PathBuf};

/// Domain interface for the bit-depth conversion step between recording and
/// transcription (file in, converted file out).
pub trait SampleConverter: Send {
    /// Convert the file and return the path of the converted copy.
    fn convert(&self, input: &Path) -> Result<PathBuf, Box<dyn std::error::Error>>;
}
