// Paragraph reconstruction and sentence splitting for PDF text.
//
// PDF text arrives hard-wrapped at the column width, with words hyphenated
// across line ends. Lines are merged back into paragraphs first (a blank line
// ends a paragraph), then each paragraph is split on Unicode sentence
// boundaries (UAX #29).

use unicode_segmentation::UnicodeSegmentation;

use crate::config::PipelineConfig;

/// Merge hard-wrapped lines into paragraphs.
///
/// A line ending in a hyphen that follows a letter is joined to the next line
/// without a space (`compu-` + `tation` = `computation`).
pub fn reconstruct_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut buffer = String::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !buffer.is_empty() {
                paragraphs.push(std::mem::take(&mut buffer));
            }
            continue;
        }

        if buffer.is_empty() {
            buffer.push_str(line);
        } else if ends_with_word_hyphen(&buffer) {
            buffer.pop();
            buffer.push_str(line);
        } else {
            buffer.push(' ');
            buffer.push_str(line);
        }
    }

    if !buffer.is_empty() {
        paragraphs.push(buffer);
    }

    paragraphs
}

fn ends_with_word_hyphen(s: &str) -> bool {
    let mut rev = s.chars().rev();
    matches!(
        (rev.next(), rev.next()),
        (Some('-'), Some(prev)) if prev.is_alphabetic()
    )
}

/// Split a paragraph into whitespace-normalised, single-line sentences.
pub fn split_sentences(paragraph: &str) -> Vec<String> {
    paragraph
        .unicode_sentences()
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extraction-stage quality gate: long enough, and not cut off mid-thought.
pub fn is_candidate(sentence: &str, config: &PipelineConfig) -> bool {
    let words: Vec<String> = sentence
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    if words.len() < config.candidate_min_words {
        return false;
    }

    !config.dangling_endings.iter().any(|ending| {
        let tail: Vec<&str> = ending.split_whitespace().collect();
        !tail.is_empty()
            && words.len() >= tail.len()
            && words[words.len() - tail.len()..]
                .iter()
                .zip(&tail)
                .all(|(w, t)| w == t)
    })
}

/// Full text-to-candidates pass for one document.
pub fn candidate_sentences(text: &str, config: &PipelineConfig) -> Vec<String> {
    reconstruct_paragraphs(text)
        .iter()
        .flat_map(|p| split_sentences(p))
        .filter(|s| is_candidate(s, config))
        .collect()
}
