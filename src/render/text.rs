//! Narrative analysis text arrives HTML-bearing; the terminal wants plain
//! text. Entities are decoded first, block-level breaks become newlines,
//! remaining tags are stripped, and whitespace is normalized.

use html_escape::decode_html_entities;
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>|</p>|</div>").unwrap());
static TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

pub fn clean_analysis_text(content: &str) -> String {
    let text = decode_html_entities(content).into_owned();
    let text = LINE_BREAKS.replace_all(&text, "\n");
    let text = TAGS.replace_all(&text, "");
    let text = SPACES.replace_all(&text, " ");

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
