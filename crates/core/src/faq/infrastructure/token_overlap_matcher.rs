use std::collections::HashSet;

use crate::faq::domain::faq_table::FaqTable;
use crate::faq::domain::match_candidate::MatchCandidate;
use crate::faq::domain::question_matcher::QuestionMatcher;
use crate::speech::domain::language::Language;

/// Ranks questions by normalized token overlap with the transcription.
///
/// Score: `|query tokens ∩ question tokens| / |question tokens|`, with tokens
/// lowercased and stripped of punctuation. Ties keep ascending question-number
/// order.
pub struct TokenOverlapMatcher;

impl TokenOverlapMatcher {
    fn score(query: &HashSet<String>, question: &str) -> f64 {
        let question_tokens: Vec<String> = question
            .split_whitespace()
            .map(normalize)
            .filter(|t| !t.is_empty())
            .collect();
        if question_tokens.is_empty() {
            return 0.0;
        }
        let overlap = question_tokens
            .iter()
            .filter(|t| query.contains(*t))
            .count();
        overlap as f64 / question_tokens.len() as f64
    }
}

impl QuestionMatcher for TokenOverlapMatcher {
    fn rank(
        &self,
        tokens: &[String],
        table: &FaqTable,
        language: Language,
    ) -> Vec<MatchCandidate> {
        let query: HashSet<String> = tokens
            .iter()
            .map(|t| normalize(t))
            .filter(|t| !t.is_empty())
            .collect();

        let mut candidates: Vec<MatchCandidate> = table
            .records()
            .iter()
            .map(|record| MatchCandidate {
                score: Self::score(&query, &record.entry(language).question),
                record: record.clone(),
            })
            .collect();

        // Records arrive sorted by number; the stable sort preserves that
        // order between equal scores.
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates
    }
}

fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}
