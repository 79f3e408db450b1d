use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::speech::domain::language::Language;

/// One question/answer pair in a single language.
#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A numbered FAQ question with its English and Yup'ik entries.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionRecord {
    pub number: u32,
    pub english: FaqEntry,
    pub yupik: FaqEntry,
}

impl QuestionRecord {
    pub fn entry(&self, language: Language) -> &FaqEntry {
        match language {
            Language::English => &self.english,
            Language::Yupik => &self.yupik,
        }
    }
}

#[derive(Error, Debug)]
pub enum FaqError {
    #[error("failed to read FAQ file {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("FAQ file is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("FAQ key {0:?} is not a question number")]
    BadKey(String),
    #[error("duplicate question number {0}")]
    DuplicateKey(u32),
    #[error("question {0}: expected an array of two single-pair language objects")]
    MalformedEntry(u32),
}

/// The bilingual FAQ table, loaded once at startup and immutable after.
///
/// On-disk format (from the original brochure export):
/// `{"1": [{"english q": "english a"}, {"yupik q": "yupik a"}], ...}`
#[derive(Clone, Debug, Default)]
pub struct FaqTable {
    records: Vec<QuestionRecord>,
}

impl FaqTable {
    pub fn load(path: &Path) -> Result<Self, FaqError> {
        let contents = fs::read_to_string(path).map_err(|source| FaqError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(json: &str) -> Result<Self, FaqError> {
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(FaqError::Parse)?;

        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(raw.len());
        for (key, value) in &raw {
            let number: u32 = key
                .trim()
                .parse()
                .map_err(|_| FaqError::BadKey(key.clone()))?;
            // "1" and "01" would otherwise collapse to the same number.
            if !seen.insert(number) {
                return Err(FaqError::DuplicateKey(number));
            }
            let (english, yupik) = parse_language_pair(number, value)?;
            records.push(QuestionRecord {
                number,
                english,
                yupik,
            });
        }

        records.sort_by_key(|r| r.number);
        Ok(Self { records })
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, number: u32) -> Option<&QuestionRecord> {
        self.records.iter().find(|r| r.number == number)
    }

    /// The "N) question" listing shown by the two listing buttons.
    pub fn listing(&self, language: Language) -> String {
        let mut out = String::new();
        for record in &self.records {
            if !out.is_empty() {
                out.push('\n');
            }
            let _ = write!(out, "{}) {}", record.number, record.entry(language).question);
        }
        out
    }
}

fn parse_language_pair(
    number: u32,
    value: &serde_json::Value,
) -> Result<(FaqEntry, FaqEntry), FaqError> {
    let pair = value
        .as_array()
        .filter(|a| a.len() == 2)
        .ok_or(FaqError::MalformedEntry(number))?;
    let english = parse_entry(number, &pair[0])?;
    let yupik = parse_entry(number, &pair[1])?;
    Ok((english, yupik))
}

fn parse_entry(number: u32, value: &serde_json::Value) -> Result<FaqEntry, FaqError> {
    let object = value
        .as_object()
        .filter(|o| o.len() == 1)
        .ok_or(FaqError::MalformedEntry(number))?;
    let (question, answer) = object.iter().next().ok_or(FaqError::MalformedEntry(number))?;
    let answer = answer.as_str().ok_or(FaqError::MalformedEntry(number))?;
    Ok(FaqEntry {
        question: question.clone(),
        answer: answer.to_string(),
    })
}
