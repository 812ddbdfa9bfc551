// Gap title inference.
//
// First choice is a curated title: the concept list is scanned in declared
// order and the first keyword found anywhere in the group's text names the
// gap. When nothing matches, the title is built from the group's three most
// frequent long words.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::config::PipelineConfig;

static LONG_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]{5,}").expect("valid long-word regex"));

/// How many frequent words make up a fallback title.
const FALLBACK_WORDS: usize = 3;

/// Infer a human-readable title for a group of sentences.
///
/// Deterministic. Returns an empty string only when there is no keyword
/// match and no word of five or more letters.
pub fn infer_gap_title(sentences: &[String], config: &PipelineConfig) -> String {
    let text = sentences.join(" ").to_lowercase();

    if let Some((_, title)) = config
        .concepts
        .iter()
        .find(|(keyword, _)| text.contains(keyword.as_str()))
    {
        return title.clone();
    }

    most_common_words(&text, FALLBACK_WORDS)
        .iter()
        .map(|w| title_case(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The `n` most frequent words of five or more ASCII letters.
/// Ties keep first-occurrence order.
fn most_common_words(text: &str, n: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for m in LONG_WORD.find_iter(text) {
        let word = m.as_str();
        match counts.iter_mut().find(|(w, _)| *w == word) {
            Some((_, count)) => *count += 1,
            None => counts.push((word, 1)),
        }
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(n)
        .map(|(w, _)| w.to_string())
        .collect()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
