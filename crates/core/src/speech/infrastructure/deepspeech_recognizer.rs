use std::path::{Path, PathBuf};

use crate::shared::subprocess::{run_tool, ExternalToolError};
use crate::speech::domain::language::Language;
use crate::speech::domain::speech_recognizer::SpeechRecognizer;
use crate::speech::infrastructure::model_resolver::{self, ModelResolveError};

const DEEPSPEECH_BIN: &str = "deepspeech";

/// Transcribes audio by invoking the external DeepSpeech binary with a
/// language-specific model/scorer pair.
pub struct DeepSpeechRecognizer {
    model: PathBuf,
    scorer: PathBuf,
    debug: bool,
}

impl DeepSpeechRecognizer {
    /// Resolve the model pair for `language` and build a recognizer.
    ///
    /// With `debug` set, the subprocess streams are logged at debug level
    /// instead of discarded.
    pub fn new(
        language: Language,
        bundled_dir: Option<&Path>,
        debug: bool,
    ) -> Result<Self, ModelResolveError> {
        let pair = model_resolver::resolve_pair(language, bundled_dir)?;
        Ok(Self {
            model: pair.model,
            scorer: pair.scorer,
            debug,
        })
    }
}

impl SpeechRecognizer for DeepSpeechRecognizer {
    fn transcribe(&self, audio_path: &Path) -> Result<String, Box<dyn std::error::Error>> {
        if !audio_path.exists() {
            return Err(Box::new(ExternalToolError::InputMissing(
                audio_path.to_path_buf(),
            )));
        }

        let output = run_tool(
            DEEPSPEECH_BIN,
            &[
                "--model",
                &self.model.to_string_lossy(),
                "--scorer",
                &self.scorer.to_string_lossy(),
                "--audio",
                &audio_path.to_string_lossy(),
            ],
        )?;

        if self.debug {
            log::debug!("deepspeech stderr: {}", output.stderr.trim());
            log::debug!("deepspeech stdout: {}", output.stdout.trim());
        }

        Ok(output.stdout.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcribe_missing_audio_is_typed_error() {
        let recognizer = DeepSpeechRecognizer {
            model: PathBuf::from("model.pbmm"),
            scorer: PathBuf::from("lm.scorer"),
            debug: false,
        };
        let err = recognizer
            .transcribe(Path::new("/nonexistent/query_16bit.wav"))
            .unwrap_err();
        let err = err.downcast::<ExternalToolError>().unwrap();
        assert!(matches!(*err, ExternalToolError::InputMissing(_)));
    }
}
