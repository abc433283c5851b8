//! Plain-text report generation
//!
//! Four report files are rewritten on every snapshot. Their line formats are
//! consumed by downstream tooling and must stay stable.

use crate::output::traits::{OutputError, OutputResult, SnapshotSink};
use crate::stats::StatsSnapshot;
use std::fs;
use std::path::{Path, PathBuf};

/// File holding the unique page count
pub const UNIQUE_PAGES_FILE: &str = "unique_urls.txt";

/// File holding the longest page
pub const LONGEST_PAGE_FILE: &str = "longest_page.txt";

/// File holding per-subdomain visit counts
pub const SUBDOMAINS_FILE: &str = "subdomains.txt";

/// File holding the most common words
pub const COMMON_WORDS_FILE: &str = "common_words.txt";

/// Writes snapshots as four plain-text files in a directory
#[derive(Debug, Clone)]
pub struct TextReportWriter {
    dir: PathBuf,
}

impl TextReportWriter {
    /// Creates a writer, creating `dir` if it does not exist
    pub fn new(dir: impl Into<PathBuf>) -> OutputResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes all four reports, overwriting previous contents
    pub fn write_reports(&self, snapshot: &StatsSnapshot) -> OutputResult<()> {
        self.write_file(UNIQUE_PAGES_FILE, &format_unique_pages(snapshot))?;
        self.write_file(LONGEST_PAGE_FILE, &format_longest_page(snapshot))?;
        self.write_file(SUBDOMAINS_FILE, &format_subdomains(snapshot))?;
        self.write_file(COMMON_WORDS_FILE, &format_common_words(snapshot))?;
        Ok(())
    }

    fn write_file(&self, name: &str, contents: &str) -> OutputResult<()> {
        let path = self.dir.join(name);
        fs::write(&path, contents).map_err(|source| OutputError::Write {
            path: path.display().to_string(),
            source,
        })
    }
}

impl SnapshotSink for TextReportWriter {
    fn emit(&mut self, snapshot: &StatsSnapshot) -> OutputResult<()> {
        self.write_reports(snapshot)
    }
}

/// `Total unique pages: <N>`
pub fn format_unique_pages(snapshot: &StatsSnapshot) -> String {
    format!("Total unique pages: {}\n", snapshot.unique_pages)
}

/// `Longest page: <url> (<count> words)`
pub fn format_longest_page(snapshot: &StatsSnapshot) -> String {
    format!(
        "Longest page: {} ({} words)\n",
        snapshot.longest_page.url, snapshot.longest_page.word_count
    )
}

/// One `<host>, <count>` line per subdomain, sorted by host
pub fn format_subdomains(snapshot: &StatsSnapshot) -> String {
    let mut out = String::new();
    for (host, count) in &snapshot.subdomains {
        out.push_str(&format!("{}, {}\n", host, count));
    }
    out
}

/// One `<word>: <count>` line per top word
pub fn format_common_words(snapshot: &StatsSnapshot) -> String {
    let mut out = String::new();
    for (word, count) in &snapshot.top_words {
        out.push_str(&format!("{}: {}\n", word, count));
    }
    out
}
