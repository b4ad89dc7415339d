//! Word frequency and distribution reports for plain-text files.
//!
//! The pipeline runs one way: [`tokenizer`] turns a file into normalized
//! words, then [`frequency`] and [`distribution`] compute statistics over
//! that word list and [`report`] assembles the selected sections.

pub mod cli;
pub mod common_words;
pub mod digest_types;
pub mod distribution;
pub mod error;
pub mod frequency;
pub mod report;
pub mod tokenizer;

pub use common_words::CommonWords;
pub use digest_types::{DigestReport, LengthBucket, LetterBucket, TokenizeConfig, WordCount};
pub use distribution::{by_first_letter, by_length, marker_count};
pub use error::{DigestError, Result};
pub use frequency::{count, search, top_n, top_n_filtered, unique_count};
pub use tokenizer::{tokenize, tokenize_text};
