use std::path::PathBuf;
use std::thread;

use crossbeam_channel::Receiver;

use phraselator_core::audio::infrastructure::cpal_recorder::CpalRecorder;
use phraselator_core::audio::infrastructure::sox_converter::SoxConverter;
use phraselator_core::audio::infrastructure::wav_file_writer::WavFileWriter;
use phraselator_core::faq::domain::faq_table::FaqTable;
use phraselator_core::faq::domain::match_candidate::MatchCandidate;
use phraselator_core::faq::infrastructure::token_overlap_matcher::TokenOverlapMatcher;
use phraselator_core::pipeline::ask_question_use_case::{AskQuestionUseCase, QueryOutcome};
use phraselator_core::shared::constants::AUDIO_SAMPLE_RATE;
use phraselator_core::speech::domain::language::Language;
use phraselator_core::speech::infrastructure::deepspeech_recognizer::DeepSpeechRecognizer;

/// Messages sent from the worker thread to the UI.
#[derive(Debug, Clone)]
pub enum QueryMessage {
    Ranked {
        transcription: String,
        candidates: Vec<MatchCandidate>,
    },
    Error(String),
}

/// Parameters for one recording attempt.
pub struct QueryParams {
    pub table: FaqTable,
    pub language: Language,
    pub query_path: PathBuf,
    pub model_dir: Option<PathBuf>,
    pub debug: bool,
}

/// Spawn a background query worker. Returns the channel receiver.
///
/// The whole pipeline blocks on the worker thread so the window keeps
/// painting while the microphone is open.
pub fn spawn(params: QueryParams) -> Receiver<QueryMessage> {
    let (tx, rx) = crossbeam_channel::unbounded::<QueryMessage>();

    thread::spawn(move || {
        let message = match run_query(&params) {
            Ok(outcome) => QueryMessage::Ranked {
                transcription: outcome.transcription,
                candidates: outcome.candidates,
            },
            Err(e) => QueryMessage::Error(e.to_string()),
        };
        let _ = tx.send(message);
    });

    rx
}

fn run_query(params: &QueryParams) -> Result<QueryOutcome, Box<dyn std::error::Error>> {
    let recognizer =
        DeepSpeechRecognizer::new(params.language, params.model_dir.as_deref(), params.debug)?;

    let use_case = AskQuestionUseCase::new(
        Box::new(CpalRecorder::new(AUDIO_SAMPLE_RATE)),
        Box::new(WavFileWriter::new(24)),
        Box::new(SoxConverter::new()),
        Box::new(recognizer),
        Box::new(TokenOverlapMatcher),
    );

    use_case.run(&params.table, params.language, &params.query_path)
}
