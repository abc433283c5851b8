use crate::stats::snapshot::{LongestPage, StatsSnapshot};
use crate::stats::StopWordSet;
use crate::config::DomainMatch;
use crate::url::{extract_domain, CanonicalUrl};
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Shortest token that is counted in the frequency table
const MIN_WORD_LEN: usize = 2;

#[derive(Debug, Clone, Copy)]
struct WordCount {
    count: u64,
    first_seen: u64,
}

/// Running statistics over every page the crawler has processed
///
/// All counters only grow: the visited set never shrinks, word counts never
/// decrease and the longest page is only replaced by a strictly longer one.
/// Mutation requires `&mut self`, so a single owner serializes updates.
#[derive(Debug, Clone)]
pub struct CorpusStats {
    stop_words: StopWordSet,
    root_domain: String,
    domain_match: DomainMatch,
    top_words: usize,
    visited: HashSet<CanonicalUrl>,
    word_freq: HashMap<String, WordCount>,
    next_word_seq: u64,
    longest_page: Option<(CanonicalUrl, usize)>,
    subdomains: BTreeMap<String, u64>,
}

impl CorpusStats {
    /// Creates empty statistics
    ///
    /// # Arguments
    ///
    /// * `stop_words` - Words never counted in the frequency table
    /// * `root_domain` - Hosts under this domain are tallied per subdomain
    /// * `top_words` - Number of words included in snapshots
    pub fn new(stop_words: StopWordSet, root_domain: &str, top_words: usize) -> Self {
        Self {
            stop_words,
            root_domain: root_domain.to_lowercase(),
            domain_match: DomainMatch::default(),
            top_words,
            visited: HashSet::new(),
            word_freq: HashMap::new(),
            next_word_seq: 0,
            longest_page: None,
            subdomains: BTreeMap::new(),
        }
    }

    /// Sets how hosts are compared against the root domain
    pub fn with_domain_match(mut self, domain_match: DomainMatch) -> Self {
        self.domain_match = domain_match;
        self
    }

    /// Marks a URL as seen
    ///
    /// Returns `true` if the URL had not been seen before.
    pub fn record_visit(&mut self, url: &CanonicalUrl) -> bool {
        if self.visited.contains(url) {
            return false;
        }
        self.visited.insert(url.clone())
    }

    /// Folds the tokens of one page into the corpus counters
    ///
    /// Every token that is not a stop word and is at least two characters long
    /// bumps its frequency. The page replaces the longest page only if it has
    /// strictly more tokens (stop words included). If the host lies under the
    /// root domain, that host's visit count goes up by one.
    pub fn record_content<S: AsRef<str>>(&mut self, url: &CanonicalUrl, tokens: &[S]) {
        for token in tokens {
            let token = token.as_ref();
            if token.chars().count() < MIN_WORD_LEN || self.stop_words.contains(token) {
                continue;
            }

            match self.word_freq.get_mut(token) {
                Some(entry) => entry.count += 1,
                None => {
                    self.word_freq.insert(
                        token.to_string(),
                        WordCount {
                            count: 1,
                            first_seen: self.next_word_seq,
                        },
                    );
                    self.next_word_seq += 1;
                }
            }
        }

        if tokens.len() > self.longest_word_count() {
            self.longest_page = Some((url.clone(), tokens.len()));
        }

        if let Some(host) = extract_domain(url.as_url()) {
            if self.domain_match.matches(&self.root_domain, &host) {
                *self.subdomains.entry(host).or_insert(0) += 1;
            }
        }
    }

    /// Captures the current counters without modifying them
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            unique_pages: self.visited.len(),
            longest_page: self
                .longest_page
                .as_ref()
                .map(|(url, count)| LongestPage {
                    url: url.to_string(),
                    word_count: *count,
                })
                .unwrap_or_default(),
            subdomains: self
                .subdomains
                .iter()
                .map(|(host, count)| (host.clone(), *count))
                .collect(),
            top_words: self.most_common(self.top_words),
        }
    }

    /// Returns up to `limit` words ordered by count, ties in first-seen order
    pub fn most_common(&self, limit: usize) -> Vec<(String, u64)> {
        let mut words: Vec<(&String, &WordCount)> = self.word_freq.iter().collect();
        words.sort_by_key(|(_, wc)| (Reverse(wc.count), wc.first_seen));

        words
            .into_iter()
            .take(limit)
            .map(|(word, wc)| (word.clone(), wc.count))
            .collect()
    }

    pub fn unique_pages(&self) -> usize {
        self.visited.len()
    }

    pub fn is_visited(&self, url: &CanonicalUrl) -> bool {
        self.visited.contains(url)
    }

    /// Current count for `word`, zero if never counted
    pub fn word_count(&self, word: &str) -> u64 {
        self.word_freq.get(word).map(|wc| wc.count).unwrap_or(0)
    }

    /// Number of distinct words in the frequency table
    pub fn distinct_words(&self) -> usize {
        self.word_freq.len()
    }

    pub fn longest_page(&self) -> Option<(&CanonicalUrl, usize)> {
        self.longest_page.as_ref().map(|(url, count)| (url, *count))
    }

    pub fn subdomain_count(&self, host: &str) -> u64 {
        self.subdomains.get(host).copied().unwrap_or(0)
    }

    fn longest_word_count(&self) -> usize {
        self.longest_page.as_ref().map(|(_, count)| *count).unwrap_or(0)
    }
}
