use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;

use crate::digest_types::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_TOP_LIMIT, TokenizeConfig};
use crate::report::{ReportRequest, Sections, build_report, render_text};
use crate::tokenizer::tokenize;

/// Analyzes file text and shows stats. Allows regex searching and
/// enabling/disabling the reports below. Runs every report when none is picked.
#[derive(Parser, Debug)]
#[command(name = "text-digest", version, about)]
pub struct Args {
    /// Path to the text file to analyze
    #[arg(short = 'f', long)]
    pub file_path: PathBuf,

    /// Display all stats
    #[arg(short = 'd', long, visible_alias = "show-all")]
    pub display_all: bool,

    /// Display total number of words
    #[arg(short = 'c', long)]
    pub words_count: bool,

    /// Display total number of unique words
    #[arg(short = 'u', long)]
    pub unique_words_count: bool,

    /// Show most common words
    #[arg(short = 'w', long)]
    pub word_occurrence: bool,

    /// How many of the most common words to list
    #[arg(short = 'o', long, default_value_t = DEFAULT_TOP_LIMIT)]
    pub word_occurrence_limit: usize,

    /// Regex matched against the start of each word; prints matching words and their counts (ex: 'whal.+')
    #[arg(short = 's', long)]
    pub search_for_word: Option<String>,

    /// Print words-by-starting-letter graph
    #[arg(short = 'a', long)]
    pub alphabetic_ratio: bool,

    /// Print words-by-length graph
    #[arg(short = 'l', long)]
    pub length_ratio: bool,

    /// Keep hyphenated words whole (ex: chat-room)
    #[arg(short = 'y', long)]
    pub allow_hyphens: bool,

    /// Minimum word length
    #[arg(short = 'n', long, default_value_t = DEFAULT_MIN_LENGTH)]
    pub min_length: usize,

    /// Maximum word length
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Include common words (ex: the, a, an, is)
    #[arg(short = 'i', long)]
    pub include_common: bool,

    /// Show how long ago the file was last modified
    #[arg(short = 't', long)]
    pub file_modify_time: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The report always works on the full, sorted word list.
    pub fn tokenize_config(&self) -> TokenizeConfig {
        TokenizeConfig {
            unique_only: false,
            sorted: true,
            min_length: self.min_length,
            max_length: self.max_length,
            allow_hyphens: self.allow_hyphens,
            include_common_words: self.include_common,
        }
    }

    pub fn selected_sections(&self) -> Sections {
        Sections {
            occurrences: self.word_occurrence,
            letters: self.alphabetic_ratio,
            lengths: self.length_ratio,
            total: self.words_count,
            unique: self.unique_words_count,
            modified: self.file_modify_time,
        }
    }

    /// True when every section runs because of `-d` or because nothing was picked.
    pub fn runs_everything(&self) -> bool {
        self.display_all || (self.selected_sections().is_empty() && self.search_for_word.is_none())
    }

    pub fn sections(&self) -> Sections {
        self.selected_sections()
            .resolve(self.display_all, self.search_for_word.is_some())
    }
}

/// Tokenize the file, build the requested report and write it to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = args.tokenize_config();
    let sections = args.sections();
    let request = ReportRequest {
        sections,
        top_limit: args.word_occurrence_limit,
        search: args.search_for_word.clone(),
    };

    let words = tokenize(&args.file_path, &config)
        .with_context(|| format!("Failed to analyze {}", args.file_path.display()))?;
    info!(words = words.len(), "tokenized {}", args.file_path.display());

    let report = build_report(&args.file_path, &words, &config, &request)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to write JSON report")?;
        writeln!(out)?;
    } else {
        if args.runs_everything() {
            writeln!(out, "\nRunning all stats (-d or --show-all)\nPass -h or --help for more options")?;
        }
        out.write_all(render_text(&report, words.len(), args.word_occurrence_limit).as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
