// Research gaps: naming, describing, and assembling the reported unit.

pub mod describe;
pub mod models;
pub mod title;

pub use describe::generate_description;
pub use models::ResearchGap;
pub use title::infer_gap_title;

use crate::config::PipelineConfig;

/// Title used when a group yields no keyword and no fallback words.
pub const PLACEHOLDER_TITLE: &str = "Unclassified Limitations";

/// Build the gap for one group of sentences.
///
/// `frequency` is the full group size; only the first `max_evidence`
/// sentences are kept as evidence.
pub fn build_gap(gap_id: u32, sentences: &[String], config: &PipelineConfig) -> ResearchGap {
    let mut title = infer_gap_title(sentences, config);
    if title.is_empty() {
        title = PLACEHOLDER_TITLE.to_string();
    }

    let frequency = sentences.len();
    let description = generate_description(&title, frequency);
    let evidence = sentences.iter().take(config.max_evidence).cloned().collect();

    ResearchGap {
        gap_id,
        title,
        description,
        frequency,
        evidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_gap_caps_evidence_not_frequency() {
        let sentences: Vec<String> = (0..8)
            .map(|i| format!("Sentence {i} about training cost that still remains high"))
            .collect();
        let gap = build_gap(3, &sentences, &PipelineConfig::default());
        assert_eq!(gap.gap_id, 3);
        assert_eq!(gap.frequency, 8);
        assert_eq!(gap.evidence.len(), 5);
        assert_eq!(gap.evidence[0], sentences[0]);
        assert!(gap.description.contains("**8 limitation statement(s)**"));
    }

    #[test]
    fn test_build_gap_empty_uses_placeholder() {
        let gap = build_gap(1, &[], &PipelineConfig::default());
        assert_eq!(gap.title, PLACEHOLDER_TITLE);
        assert_eq!(gap.frequency, 0);
        assert!(gap.evidence.is_empty());
        assert!(gap.description.contains(PLACEHOLDER_TITLE));
    }
}
