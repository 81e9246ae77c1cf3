//! Markdown heading anchors.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Derive the link target a Markdown renderer assigns to a heading line.
///
/// Follows the GitHub heading slug rules: lowercase, drop the leading
/// `#`s and the space after them, keep only ASCII alphanumerics, hyphens
/// and spaces, then turn each run of whitespace into a single hyphen.
///
/// ```
/// use runsheet::render::anchor;
///
/// assert_eq!(anchor("### (2.1) Blah blah! Blah."), "#21-blah-blah-blah");
/// ```
pub fn anchor(header: &str) -> String {
    let lower = header.to_lowercase();
    let text = lower.trim_start_matches('#').trim_start_matches(' ');
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == ' ')
        .collect();
    format!("#{}", WHITESPACE.replace_all(&kept, "-"))
}
