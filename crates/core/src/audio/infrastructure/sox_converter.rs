use std::path::{Path, PathBuf};

use crate::audio::domain::sample_converter::SampleConverter;
use crate::shared::subprocess::{run_tool, ExternalToolError};

const SOX_BIN: &str = "sox";

/// Converts a recorded WAV to the bit depth DeepSpeech expects by shelling
/// out to sox (`sox <in> -b 16 <out>`).
pub struct SoxConverter {
    bits: u16,
}

impl SoxConverter {
    pub fn new() -> Self {
        Self { bits: 16 }
    }

    /// The converted copy sits next to the input: `query.wav -> query_16bit.wav`.
    pub fn converted_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = input
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "wav".to_string());
        input.with_file_name(format!("{stem}_{}bit.{ext}", self.bits))
    }
}

impl Default for SoxConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleConverter for SoxConverter {
    fn convert(&self, input: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
        if !input.exists() {
            return Err(Box::new(ExternalToolError::InputMissing(input.to_path_buf())));
        }

        let output = self.converted_path(input);
        let bits = self.bits.to_string();
        run_tool(
            SOX_BIN,
            &[
                &input.to_string_lossy(),
                "-b",
                &bits,
                &output.to_string_lossy(),
            ],
        )?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converted_path_keeps_directory_and_extension() {
        let converter = SoxConverter::new();
        let out = converter.converted_path(Path::new("/tmp/query.wav"));
        assert_eq!(out, PathBuf::from("/tmp/query_16bit.wav"));
    }

    #[test]
    fn test_convert_missing_input_is_typed_error() {
        let converter = SoxConverter::new();
        let err = converter
            .convert(Path::new("/nonexistent/query.wav"))
            .unwrap_err();
        let err = err.downcast::<ExternalToolError>().unwrap();
        assert!(matches!(*err, ExternalToolError::InputMissing(_)));
    }
}
