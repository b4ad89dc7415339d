use serde::Serialize;

use crate::error::{Result, check_length_bounds};

pub const DEFAULT_MIN_LENGTH: usize = 2;
pub const DEFAULT_MAX_LENGTH: usize = 100;
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Options controlling word extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenizeConfig {
    pub unique_only: bool,
    pub sorted: bool,
    pub min_length: usize,
    pub max_length: usize,
    pub allow_hyphens: bool,
    pub include_common_words: bool,
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            unique_only: false,
            sorted: true,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            allow_hyphens: false,
            include_common_words: false,
        }
    }
}

impl TokenizeConfig {
    /// Fails with a config error when `min_length > max_length`.
    pub fn validate(&self) -> Result<()> {
        check_length_bounds(self.min_length, self.max_length)
    }
}

/// A word and how many times it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self { word: word.into(), count }
    }
}

/// Words grouped under one starting letter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetterBucket {
    pub letter: char,
    pub count: usize,
    pub percentage: f64,
}

/// Words grouped under one length
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthBucket {
    pub length: usize,
    pub count: usize,
    pub percentage: f64,
}

/// Everything a run produced, in section order. Unselected sections are omitted.
#[derive(Debug, Default, Serialize)]
pub struct DigestReport {
    pub file: String,
    pub config: TokenizeConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_words: Option<Vec<WordCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letters: Option<Vec<LetterBucket>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lengths: Option<Vec<LengthBucket>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_secs_ago: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<WordCount>>,
}
