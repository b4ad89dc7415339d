//! Breakdown of words by starting letter and by length, plus the bar graphs
//! used to print them.

use tracing::debug;

use crate::digest_types::{LengthBucket, LetterBucket};
use crate::error::{DigestError, Result};

const RULE_WIDTH: usize = 150;
const UNIT_MARKER: &str = "|=|";
const NO_DATA_MARKER: &str = "X";

fn percentage(count: usize, total: usize) -> f64 {
    if count == 0 || total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Count words per starting letter `a..=z`.
///
/// Words that don't start with a lowercase ASCII letter (an empty word, or a
/// leading apostrophe) are left out of both counts and the percentage base.
pub fn by_first_letter<S: AsRef<str>>(words: &[S]) -> Vec<LetterBucket> {
    let mut counts = [0usize; 26];
    for word in words {
        if let Some(first @ b'a'..=b'z') = word.as_ref().bytes().next() {
            counts[usize::from(first - b'a')] += 1;
        }
    }
    let total: usize = counts.iter().sum();
    debug!(matched = total, "letter distribution");

    (b'a'..=b'z')
        .zip(counts)
        .map(|(letter, count)| LetterBucket {
            letter: char::from(letter),
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

/// Count words per length, covering every length from the shortest word to
/// the longest one even where nothing has that length.
pub fn by_length<S: AsRef<str>>(words: &[S]) -> Result<Vec<LengthBucket>> {
    let lengths = words.iter().map(|w| w.as_ref().len());
    let (Some(min), Some(max)) = (lengths.clone().min(), lengths.clone().max()) else {
        return Err(DigestError::EmptyInput("no words to measure"));
    };

    let mut counts = vec![0usize; max - min + 1];
    for len in lengths {
        counts[len - min] += 1;
    }
    let total = words.len();
    debug!(min, max, "length distribution");

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(offset, count)| LengthBucket {
            length: min + offset,
            count,
            percentage: percentage(count, total),
        })
        .collect())
}

/// How many unit markers a bucket gets: none for an empty bucket, one for
/// anything under a percent, otherwise the truncated percentage.
pub fn marker_count(pct: f64) -> usize {
    if pct <= 0.0 {
        0
    } else if pct < 1.0 {
        1
    } else {
        pct.trunc() as usize
    }
}

fn bar(pct: f64) -> String {
    match marker_count(pct) {
        0 => NO_DATA_MARKER.to_string(),
        n => UNIT_MARKER.repeat(n),
    }
}

/// Width of the `(count)` column: room for the largest possible count plus parens.
fn count_width(total_words: usize) -> usize {
    total_words.to_string().len() + 2
}

fn push_row(out: &mut String, label: &str, count: usize, pct: f64, width: usize) {
    let count = format!("({})", count);
    out.push_str(&format!("{} {:<width$}: {}\n", label, count, bar(pct)));
}

fn framed(title: &str, rows: String) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    format!("\n{}\n{}\n{}{}\n", title, rule, rows, rule)
}

/// Render the letter graph, one row per letter.
pub fn render_letters(buckets: &[LetterBucket], total_words: usize) -> String {
    let width = count_width(total_words);
    let mut rows = String::new();
    for b in buckets {
        push_row(&mut rows, &b.letter.to_string(), b.count, b.percentage, width);
    }
    framed("Words starting with:", rows)
}

/// Render the length graph, one row per length.
pub fn render_lengths(buckets: &[LengthBucket], total_words: usize) -> String {
    let width = count_width(total_words);
    let mut rows = String::new();
    for b in buckets {
        push_row(&mut rows, &format!("{:<4}", b.length), b.count, b.percentage, width);
    }
    framed("Length (#Words)", rows)
}
