// Limitation filter: decides whether a repaired sentence describes a limitation.
//
// Four cheap checks, all of which must pass: enough words, not a shouted
// heading, at least one cue word, and enough actual letters to be prose
// rather than a table row or reference fragment.

use tracing::debug;

use super::repair::repair_sentence;
use crate::config::PipelineConfig;

/// Return true if the sentence looks like a genuine limitation statement.
pub fn is_valid_limitation(sentence: &str, config: &PipelineConfig) -> bool {
    if sentence.split_whitespace().count() < config.min_words {
        return false;
    }

    // All-caps lines are section headings or extraction artifacts
    if sentence.to_uppercase() == sentence {
        return false;
    }

    let lower = sentence.to_lowercase();
    if !config.cue_words.iter().any(|cue| lower.contains(cue.as_str())) {
        return false;
    }

    let letters = sentence.chars().filter(|c| c.is_ascii_alphabetic()).count();
    letters >= config.min_alpha_chars
}

/// Repair each line and keep the valid limitation sentences, in input order.
pub fn load_sentences<I, S>(lines: I, config: &PipelineConfig) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = 0usize;
    let sentences: Vec<String> = lines
        .into_iter()
        .map(|line| repair_sentence(line.as_ref()))
        .filter(|line| !line.is_empty())
        .inspect(|_| seen += 1)
        .filter(|line| is_valid_limitation(line, config))
        .collect();

    debug!(
        candidates = seen,
        kept = sentences.len(),
        "Filtered limitation sentences"
    );

    sentences
}
