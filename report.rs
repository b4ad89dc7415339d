use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use tracing::{debug, info};

use crate::digest_types::{DigestReport, TokenizeConfig, WordCount};
use crate::distribution::{by_first_letter, by_length, render_lengths, render_letters};
use crate::error::{DigestError, Result};
use crate::frequency::{search, top_n, unique_count};

/// Which report sections to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sections {
    pub occurrences: bool,
    pub letters: bool,
    pub lengths: bool,
    pub total: bool,
    pub unique: bool,
    pub modified: bool,
}

impl Sections {
    pub fn all() -> Self {
        Self {
            occurrences: true,
            letters: true,
            lengths: true,
            total: true,
            unique: true,
            modified: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the default-selection rule: everything runs when asked to, or
    /// when no section was picked and there is no search to run instead.
    pub fn resolve(self, display_all: bool, has_search: bool) -> Self {
        if display_all || (self.is_empty() && !has_search) {
            Self::all()
        } else {
            self
        }
    }
}

/// What to compute for one run.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub sections: Sections,
    pub top_limit: usize,
    pub search: Option<String>,
}

/// Time since the file was last written, rounded up to whole seconds.
/// A modification time in the future counts as zero.
pub fn elapsed_since_modified(path: &Path) -> Result<Duration> {
    let io_err = |source| DigestError::Io {
        path: path.to_path_buf(),
        source,
    };
    let modified = fs::metadata(path).and_then(|m| m.modified()).map_err(io_err)?;
    let elapsed = SystemTime::now().duration_since(modified).unwrap_or(Duration::ZERO);
    let secs = elapsed.as_secs() + u64::from(elapsed.subsec_nanos() > 0);
    Ok(Duration::from_secs(secs))
}

/// `H hours MM minutes SS seconds`, with whole days folded into the hours.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!(
        "{} hours {:02} minutes {:02} seconds",
        secs / 3600,
        secs / 60 % 60,
        secs % 60
    )
}

/// Run every selected analysis over an already tokenized word list.
pub fn build_report(
    path: &Path,
    words: &[String],
    config: &TokenizeConfig,
    request: &ReportRequest,
) -> Result<DigestReport> {
    let sections = request.sections;
    info!(?sections, words = words.len(), "building report");

    let mut report = DigestReport {
        file: path.display().to_string(),
        config: config.clone(),
        ..DigestReport::default()
    };

    if sections.occurrences {
        report.top_words = Some(if words.is_empty() {
            Vec::new()
        } else {
            top_n(words, request.top_limit)?
        });
    }
    if sections.letters {
        report.letters = Some(by_first_letter(words));
    }
    if sections.lengths {
        report.lengths = Some(if words.is_empty() {
            Vec::new()
        } else {
            by_length(words)?
        });
    }
    if sections.total {
        report.total_words = Some(words.len());
    }
    if sections.unique {
        report.unique_words = Some(unique_count(words));
    }
    if sections.modified {
        report.modified_secs_ago = Some(elapsed_since_modified(path)?.as_secs());
    }
    if let Some(pattern) = &request.search {
        report.matches = Some(search(words, pattern)?);
    }

    debug!("report ready");
    Ok(report)
}

fn render_top_words(out: &mut String, top: &[WordCount], limit: usize) {
    if limit == 0 {
        out.push_str("\nRanking limit is 0, no words shown\n");
        return;
    }
    if top.is_empty() {
        out.push_str("\nNo words to rank\n");
        return;
    }
    let max_len = top.iter().map(|wc| wc.word.len()).max().unwrap_or(0);
    let padding = max_len + 2;

    out.push_str(&format!("\nShowing Top {} Words\n\n", limit));
    out.push_str(&format!("{:<3} {:^padding$} {}\n", "#", "Word", "Count"));
    out.push_str(&format!("{} {:padding$} {}\n", "---", "-".repeat(max_len), "-----"));
    for (rank, wc) in top.iter().enumerate() {
        out.push_str(&format!("{:<3} {:<padding$}  {}\n", rank + 1, wc.word, wc.count));
    }
}

fn render_matches(out: &mut String, matches: &[WordCount]) {
    if matches.is_empty() {
        out.push_str("\nNo match\n");
        return;
    }
    let padding = matches.iter().map(|wc| wc.word.len()).max().unwrap_or(0) + 2;
    out.push_str("\nFound match:\n");
    for wc in matches {
        out.push_str(&format!("{:padding$}:  {}\n", wc.word, wc.count));
    }
}

/// Plain-text rendering of a report, sections in their fixed order.
/// `total_words` is the size of the analyzed word list and sets graph widths.
pub fn render_text(report: &DigestReport, total_words: usize, top_limit: usize) -> String {
    let mut out = String::new();

    if let Some(top) = &report.top_words {
        render_top_words(&mut out, top, top_limit);
    }
    if let Some(letters) = &report.letters {
        out.push_str(&render_letters(letters, total_words));
    }
    if let Some(lengths) = &report.lengths {
        if lengths.is_empty() {
            out.push_str("\nNo words to measure\n");
        } else {
            out.push_str(&render_lengths(lengths, total_words));
        }
    }
    if let Some(total) = report.total_words {
        out.push_str(&format!("\nTotal # of words: {}\n", total));
    }
    if let Some(unique) = report.unique_words {
        out.push_str(&format!("\nTotal # of unique words: {}\n\n", unique));
    }
    if let Some(secs) = report.modified_secs_ago {
        out.push_str(&format!(
            "\n{} was last modified: {} ago\n\n",
            report.file,
            format_elapsed(Duration::from_secs(secs))
        ));
    }
    if let Some(matches) = &report.matches {
        render_matches(&mut out, matches);
    }
    out
}
