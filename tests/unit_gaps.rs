// Unit tests for gap naming, description, and assembly.

use loopx::config::PipelineConfig;
use loopx::gaps::{build_gap, generate_description, infer_gap_title, PLACEHOLDER_TITLE};

fn owned(sentences: &[&str]) -> Vec<String> {
    sentences.iter().map(|s| s.to_string()).collect()
}

// ============================================================
// infer_gap_title: precedence and fallback
// ============================================================

#[test]
fn attention_beats_scaling_whatever_the_input_order() {
    let config = PipelineConfig::default();
    let forward = owned(&[
        "Attention becomes diffuse over long inputs.",
        "Scaling laws flatten beyond ten billion parameters.",
    ]);
    let reversed: Vec<String> = forward.iter().rev().cloned().collect();

    assert_eq!(
        infer_gap_title(&forward, &config),
        "Attention Noise and Context Management"
    );
    assert_eq!(
        infer_gap_title(&reversed, &config),
        "Attention Noise and Context Management"
    );
}

#[test]
fn reordered_concepts_change_the_winner() {
    let mut config = PipelineConfig::default();
    let scaling = config
        .concepts
        .iter()
        .position(|(k, _)| k == "scaling")
        .unwrap();
    let entry = config.concepts.remove(scaling);
    config.concepts.insert(0, entry);

    let sentences = owned(&["Attention and scaling both remain problematic."]);
    assert_eq!(
        infer_gap_title(&sentences, &config),
        "Performance Saturation with Scaling"
    );
}

#[test]
fn keyword_match_is_case_insensitive() {
    let config = PipelineConfig::default();
    let sentences = owned(&["PROMPT sensitivity is severe."]);
    assert_eq!(
        infer_gap_title(&sentences, &config),
        "Limitations of Prompt-Based Methods"
    );
}

#[test]
fn fallback_title_is_title_cased_top_three() {
    let config = PipelineConfig::default();
    let sentences = owned(&[
        "Privacy leakage through gradients is serious.",
        "Membership inference exposes privacy leakage.",
        "Gradients reveal private attributes; privacy suffers.",
    ]);
    // privacy x3, leakage x2, gradients x2 (first seen before "membership")
    assert_eq!(
        infer_gap_title(&sentences, &config),
        "Privacy Leakage Gradients"
    );
}

#[test]
fn fallback_with_only_short_words_is_empty() {
    let config = PipelineConfig::default();
    let sentences = owned(&["It is not so bad at all."]);
    assert_eq!(infer_gap_title(&sentences, &config), "");
}

#[test]
fn title_inference_is_repeatable() {
    let config = PipelineConfig::default();
    let sentences = owned(&[
        "Robustness to distribution shift remains weak.",
        "Shift robustness is rarely measured.",
    ]);
    let titles: Vec<String> = (0..10)
        .map(|_| infer_gap_title(&sentences, &config))
        .collect();
    assert!(titles.windows(2).all(|w| w[0] == w[1]));
}

// ============================================================
// build_gap: evidence cap, frequency, placeholder
// ============================================================

#[test]
fn evidence_capped_frequency_uncapped() {
    let config = PipelineConfig::default();
    let sentences: Vec<String> = (1..=12)
        .map(|i| format!("Limitation number {i} concerns prompt sensitivity."))
        .collect();
    let gap = build_gap(2, &sentences, &config);

    assert_eq!(gap.frequency, 12);
    assert_eq!(gap.evidence.len(), 5);
    assert_eq!(gap.evidence, sentences[..5].to_vec());
    assert_eq!(gap.description, generate_description(&gap.title, 12));
}

#[test]
fn custom_evidence_cap() {
    let config = PipelineConfig {
        max_evidence: 2,
        ..PipelineConfig::default()
    };
    let sentences = owned(&["one attention", "two attention", "three attention"]);
    let gap = build_gap(1, &sentences, &config);
    assert_eq!(gap.evidence.len(), 2);
    assert_eq!(gap.frequency, 3);
}

#[test]
fn unnameable_group_gets_placeholder() {
    let config = PipelineConfig::default();
    let gap = build_gap(1, &owned(&["It is so."]), &config);
    assert_eq!(gap.title, PLACEHOLDER_TITLE);
    assert!(!gap.title.is_empty());
}
