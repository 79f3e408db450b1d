use super::faq_table::FaqTable;
use super::match_candidate::MatchCandidate;
use crate::speech::domain::language::Language;

/// Contract for ranking the FAQ table against a transcription.
///
/// Implementations receive the whitespace-split query tokens and must return
/// candidates ordered best-first with a deterministic tie-break.
pub trait QuestionMatcher: Send {
    fn rank(&self, tokens: &[String], table: &FaqTable, language: Language)
        -> Vec<MatchCandidate>;
}
