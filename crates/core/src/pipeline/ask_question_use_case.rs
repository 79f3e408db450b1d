use std::path::Path;

use thiserror::Error;

use crate::audio::domain::audio_recorder::AudioRecorder;
use crate::audio::domain::audio_writer::AudioWriter;
use crate::audio::domain::sample_converter::SampleConverter;
use crate::faq::domain::faq_table::FaqTable;
use crate::faq::domain::match_candidate::MatchCandidate;
use crate::faq::domain::question_matcher::QuestionMatcher;
use crate::shared::constants::{QUERY_DURATION_SECS, SURFACED_CANDIDATES};
use crate::speech::domain::language::Language;
use crate::speech::domain::speech_recognizer::SpeechRecognizer;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("no speech was recognized; try recording again")]
    NoSpeechRecognized,
    #[error("the FAQ table is empty")]
    EmptyTable,
}

/// Orchestrates one spoken query: record, persist, convert, transcribe, rank.
///
/// Everything behind the trait seams blocks until done; the caller decides
/// whether to stage the run on a worker thread.
pub struct AskQuestionUseCase {
    recorder: Box<dyn AudioRecorder>,
    writer: Box<dyn AudioWriter>,
    converter: Box<dyn SampleConverter>,
    recognizer: Box<dyn SpeechRecognizer>,
    matcher: Box<dyn QuestionMatcher>,
}

/// What one recording attempt produced.
#[derive(Debug)]
pub struct QueryOutcome {
    pub transcription: String,
    pub candidates: Vec<MatchCandidate>,
}

impl AskQuestionUseCase {
    pub fn new(
        recorder: Box<dyn AudioRecorder>,
        writer: Box<dyn AudioWriter>,
        converter: Box<dyn SampleConverter>,
        recognizer: Box<dyn SpeechRecognizer>,
        matcher: Box<dyn QuestionMatcher>,
    ) -> Self {
        Self {
            recorder,
            writer,
            converter,
            recognizer,
            matcher,
        }
    }

    pub fn run(
        &self,
        table: &FaqTable,
        language: Language,
        query_path: &Path,
    ) -> Result<QueryOutcome, Box<dyn std::error::Error>> {
        if table.is_empty() {
            return Err(Box::new(QueryError::EmptyTable));
        }

        let audio = self.recorder.record(QUERY_DURATION_SECS)?;
        self.writer.write_audio(query_path, &audio)?;

        let converted = self.converter.convert(query_path)?;
        let transcription = self.recognizer.transcribe(&converted)?;
        log::info!("transcription: {transcription:?}");

        let tokens: Vec<String> = transcription
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if tokens.is_empty() {
            return Err(Box::new(QueryError::NoSpeechRecognized));
        }

        let mut candidates = self.matcher.rank(&tokens, table, language);
        candidates.truncate(SURFACED_CANDIDATES);
        Ok(QueryOutcome {
            transcription,
            candidates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::audio_segment::AudioSegment;
    use crate::faq::infrastructure::token_overlap_matcher::TokenOverlapMatcher;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    // Stubs

    struct StubRecorder;

    impl AudioRecorder for StubRecorder {
        fn record(&self, duration_secs: f64) -> Result<AudioSegment, Box<dyn std::error::Error>> {
            let samples = vec![0.0; (duration_secs * 16000.0) as usize];
            Ok(AudioSegment::new(samples, 16000, 1))
        }
    }

    struct StubWriter {
        written_to: Arc<Mutex<Option<PathBuf>>>,
    }

    impl AudioWriter for StubWriter {
        fn write_audio(
            &self,
            path: &Path,
            _: &AudioSegment,
        ) -> Result<(), Box<dyn std::error::Error>> {
            *self.written_to.lock().unwrap() = Some(path.to_path_buf());
            Ok(())
        }
    }

    struct StubConverter;

    impl SampleConverter for StubConverter {
        fn convert(&self, input: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
            Ok(input.with_extension("16bit.wav"))
        }
    }

    struct StubRecognizer {
        transcription: &'static str,
    }

    impl SpeechRecognizer for StubRecognizer {
        fn transcribe(&self, _: &Path) -> Result<String, Box<dyn std::error::Error>> {
            Ok(self.transcription.to_string())
        }
    }

    fn table() -> FaqTable {
        FaqTable::parse(
            r#"{
                "1": [
                    {"What is the minimum wage?": "$10.19 per hour."},
                    {"Qaillun akingelartat?": "$10.19."}
                ],
                "2": [
                    {"When is payday?": "Monthly or semi-monthly."},
                    {"Qaku akiliuq?": "Iraluq."}
                ]
            }"#,
        )
        .unwrap()
    }

    fn use_case(transcription: &'static str) -> (AskQuestionUseCase, Arc<Mutex<Option<PathBuf>>>) {
        let written_to = Arc::new(Mutex::new(None));
        let uc = AskQuestionUseCase::new(
            Box::new(StubRecorder),
            Box::new(StubWriter {
                written_to: written_to.clone(),
            }),
            Box::new(StubConverter),
            Box::new(StubRecognizer { transcription }),
            Box::new(TokenOverlapMatcher),
        );
        (uc, written_to)
    }

    #[test]
    fn test_run_ranks_transcription_against_table() {
        let (uc, _) = use_case("what is the minimum wage");
        let outcome = uc
            .run(&table(), Language::English, Path::new("query.wav"))
            .unwrap();
        assert_eq!(outcome.transcription, "what is the minimum wage");
        assert_eq!(outcome.candidates.len(), 2);
        assert_eq!(outcome.candidates[0].record.number, 1);
    }

    #[test]
    fn test_run_surfaces_at_most_two_candidates() {
        let json = r#"{
            "1": [{"What is the minimum wage?": "a"}, {"q1": "a"}],
            "2": [{"When is payday?": "a"}, {"q2": "a"}],
            "3": [{"Who is covered?": "a"}, {"q3": "a"}]
        }"#;
        let big_table = FaqTable::parse(json).unwrap();
        let (uc, _) = use_case("what is the minimum wage");
        let outcome = uc
            .run(&big_table, Language::English, Path::new("query.wav"))
            .unwrap();
        assert_eq!(outcome.candidates.len(), SURFACED_CANDIDATES);
        assert_eq!(outcome.candidates[0].record.number, 1);
    }

    #[test]
    fn test_run_writes_query_to_given_path() {
        let (uc, written_to) = use_case("when is payday");
        uc.run(&table(), Language::English, Path::new("query.wav"))
            .unwrap();
        assert_eq!(
            written_to.lock().unwrap().as_deref(),
            Some(Path::new("query.wav"))
        );
    }

    #[test]
    fn test_empty_transcription_is_no_match_error() {
        let (uc, _) = use_case("   ");
        let err = uc
            .run(&table(), Language::English, Path::new("query.wav"))
            .unwrap_err();
        let err = err.downcast::<QueryError>().unwrap();
        assert!(matches!(*err, QueryError::NoSpeechRecognized));
    }

    #[test]
    fn test_empty_table_is_rejected_before_recording() {
        let (uc, written_to) = use_case("anything");
        let err = uc
            .run(&FaqTable::default(), Language::English, Path::new("query.wav"))
            .unwrap_err();
        let err = err.downcast::<QueryError>().unwrap();
        assert!(matches!(*err, QueryError::EmptyTable));
        assert!(written_to.lock().unwrap().is_none());
    }
}
