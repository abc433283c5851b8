use serde::Deserialize;

/// Main configuration structure for Crawl-Lens
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub scope: ScopeConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub text: TextConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Crawl boundary configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScopeConfig {
    /// Host suffixes that are always in scope (e.g., "ics.uci.edu")
    #[serde(rename = "allowed-domains")]
    pub allowed_domains: Vec<String>,

    /// Domain whose subdomains are tallied in the subdomain report
    #[serde(rename = "root-domain")]
    pub root_domain: String,

    /// Host suffixes that are only in scope under a specific path
    #[serde(default)]
    pub gated: Vec<GatedDomain>,

    /// File extensions (without the dot) that are never crawled
    #[serde(rename = "excluded-extensions", default = "default_excluded_extensions")]
    pub excluded_extensions: Vec<String>,

    /// How hosts are compared against the domain suffixes above
    #[serde(rename = "domain-match", default)]
    pub domain_match: DomainMatch,
}

/// Host comparison mode for allowed, gated and root domains
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainMatch {
    /// Plain string suffix: `www.eecs.uci.edu` falls under `cs.uci.edu`
    #[default]
    Suffix,

    /// Whole labels only: the host equals the domain or ends with `.` + domain
    Labels,
}

/// A domain suffix that is only accepted when the path contains a marker
#[derive(Debug, Clone, Deserialize)]
pub struct GatedDomain {
    /// Host suffix (e.g., "today.uci.edu")
    pub domain: String,

    /// Substring the URL path must contain
    #[serde(rename = "required-path")]
    pub required_path: String,
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the snapshot reports are written into
    #[serde(rename = "report-dir")]
    pub report_dir: String,

    /// Number of entries in the common words report
    #[serde(rename = "top-words", default = "default_top_words")]
    pub top_words: usize,
}

/// Text statistics configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    /// Words that are never counted
    #[serde(rename = "stop-words", default = "default_stop_words")]
    pub stop_words: Vec<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
        }
    }
}

/// User agent identification for the fetch adapter
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "CrawlLens".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

fn default_top_words() -> usize {
    50
}

fn default_excluded_extensions() -> Vec<String> {
    DEFAULT_EXCLUDED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_stop_words() -> Vec<String> {
    DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Binary, media, archive and document formats
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &[
    "css", "js", "bmp", "gif", "jpg", "jpeg", "ico", "png", "tif", "tiff", "mid", "mp2", "mp3",
    "mp4", "wav", "avi", "mov", "mpeg", "ram", "m4v", "mkv", "ogg", "ogv", "pdf", "ps", "eps",
    "tex", "ppt", "pptx", "doc", "docx", "xls", "xlsx", "names", "data", "dat", "exe", "bz2",
    "tar", "msi", "bin", "7z", "psd", "dmg", "iso", "epub", "dll", "cnf", "tgz", "sha1", "thmx",
    "mso", "arff", "rtf", "jar", "csv", "rm", "smil", "wmv", "swf", "wma", "zip", "rar", "gz",
];

/// English stop words
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "me", "more",
    "most", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should", "so", "some",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "with",
    "would", "you", "your", "yours", "yourself", "yourselves",
];
