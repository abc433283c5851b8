/// The page with the most tokens seen so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestPage {
    /// Canonical URL of the page (empty until a page with content is recorded)
    pub url: String,

    /// Number of tokens on the page, stop words included
    pub word_count: usize,
}

/// Point-in-time view of the corpus statistics
///
/// Produced by [`CorpusStats::snapshot`](super::CorpusStats::snapshot) and
/// consumed by report writers. Holding a snapshot never blocks further updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Number of distinct canonical URLs attempted
    pub unique_pages: usize,

    /// Longest page recorded
    pub longest_page: LongestPage,

    /// Visit counts per host within the root domain, sorted by host
    pub subdomains: Vec<(String, u64)>,

    /// Most frequent words, count descending, ties in first-seen order
    pub top_words: Vec<(String, u64)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot() {
        let snapshot = StatsSnapshot::default();
        assert_eq!(snapshot.unique_pages, 0);
        assert_eq!(snapshot.longest_page.url, "");
        assert_eq!(snapshot.longest_page.word_count, 0);
        assert!(snapshot.subdomains.is_empty());
        assert!(snapshot.top_words.is_empty());
    }
}
