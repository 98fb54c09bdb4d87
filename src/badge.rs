//! GitHub Actions status badge URLs.
//!
//! Builds workflow badge URLs, validates their format, and pulls badge images
//! out of Markdown so a README can be checked from the CLI.

use once_cell::sync::Lazy;
use regex::Regex;

/// Full-format badge URL: `https://github.com/{owner}/{repo}/actions/workflows/{file}.yml/badge.svg`.
static BADGE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https://github\.com/[A-Za-z0-9_-]+/[A-Za-z0-9_-]+/actions/workflows/[A-Za-z0-9_-]+\.yml/badge\.svg$",
    )
    .expect("valid regex")
});

/// Owner or repository name.
static SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid regex"));

/// Markdown image whose target ends in `/badge.svg`.
static MARKDOWN_BADGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[(?P<label>[^\]]*)\]\((?P<url>[^)\s]+/badge\.svg)\)").expect("valid regex")
});

/// A badge image found in a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Alt text, e.g. `CI`.
    pub label: String,
    /// Image URL.
    pub url: String,
}

impl Badge {
    /// Whether the badge points at a well-formed workflow badge URL.
    pub fn is_valid(&self) -> bool {
        is_valid_badge_url(&self.url)
    }
}

/// Build the badge URL for a workflow file such as `ci.yml`.
pub fn badge_url(owner: &str, repo: &str, workflow_file: &str) -> String {
    format!("https://github.com/{owner}/{repo}/actions/workflows/{workflow_file}/badge.svg")
}

/// Check a URL against the GitHub Actions workflow badge format.
pub fn is_valid_badge_url(url: &str) -> bool {
    BADGE_URL.is_match(url)
}

/// Check an owner or repository name.
pub fn is_valid_slug(s: &str) -> bool {
    SLUG.is_match(s)
}

/// Extract all badge images from Markdown, in document order.
pub fn extract_badges(markdown: &str) -> Vec<Badge> {
    MARKDOWN_BADGE
        .captures_iter(markdown)
        .map(|cap| Badge {
            label: cap["label"].to_string(),
            url: cap["url"].to_string(),
        })
        .collect()
}
