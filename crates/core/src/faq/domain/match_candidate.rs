use super::faq_table::QuestionRecord;
use crate::speech::domain::language::Language;

/// A FAQ record paired with its similarity score against one transcription.
///
/// Produced fresh per recording and discarded once the user confirms or
/// records again.
#[derive(Clone, Debug)]
pub struct MatchCandidate {
    pub score: f64,
    pub record: QuestionRecord,
}

impl MatchCandidate {
    /// The selectable string surfaced in the UI drop-down.
    pub fn label(&self, language: Language) -> String {
        format!("{}) {}", self.record.number, self.record.entry(language).question)
    }
}
