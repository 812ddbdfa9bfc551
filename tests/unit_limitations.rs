// Unit tests for limitation mining: sentence repair, the validity filter,
// and the extraction-stage candidate pass.
//
// Pure functions only: no PDFs, no model, no filesystem.

use loopx::config::PipelineConfig;
use loopx::limitations::{is_valid_limitation, load_sentences, repair_sentence};
use loopx::papers::sentences::{candidate_sentences, is_candidate};

// ============================================================
// is_valid_limitation: word count floor
// ============================================================

#[test]
fn short_sentences_rejected_regardless_of_cues() {
    let config = PipelineConfig::default();
    // Every prefix below ten words, each stuffed with cue words
    let words = [
        "limitation",
        "however",
        "future",
        "work",
        "remains",
        "an",
        "open",
        "problem",
        "still",
        "unresolved",
    ];
    for n in 1..words.len() {
        let sentence = words[..n].join(" ");
        assert!(
            !is_valid_limitation(&sentence, &config),
            "{n}-word sentence should be rejected: {sentence}"
        );
    }
    // Exactly ten words passes
    assert!(is_valid_limitation(&words.join(" "), &config));
}

#[test]
fn no_cue_word_means_invalid() {
    let config = PipelineConfig::default();
    let sentences = [
        "We propose a novel architecture that achieves strong results across all benchmarks.",
        "The appendix lists every hyperparameter used for the experiments reported in section four.",
        "Our implementation is released publicly together with the pretrained checkpoints and logs.",
    ];
    for s in sentences {
        assert!(!is_valid_limitation(s, &config), "no cue, should fail: {s}");
    }
}

#[test]
fn every_default_cue_is_recognised() {
    let config = PipelineConfig::default();
    for cue in &config.cue_words {
        let sentence = format!("In our experiments the method showed a clear {cue} on held out tasks");
        assert!(
            is_valid_limitation(&sentence, &config),
            "cue '{cue}' should make the sentence valid"
        );
    }
}

#[test]
fn uppercase_heading_rejected_even_with_cues() {
    let config = PipelineConfig::default();
    let s = "SECTION 6: LIMITATIONS, OPEN PROBLEMS AND FUTURE WORK FOR THE COMMUNITY";
    assert!(!is_valid_limitation(s, &config));
}

#[test]
fn sentence_without_letters_rejected() {
    let config = PipelineConfig::default();
    let s = "12.3 45.6 78.9 10.1 11.2 13.4 15.6 17.8 19.0 20.2 yet";
    assert!(!is_valid_limitation(s, &config));
}

// ============================================================
// repair_sentence: idempotence
// ============================================================

#[test]
fn repair_is_idempotent_over_messy_inputs() {
    let inputs = [
        "",
        "   ",
        "plain sentence.",
        "multi\n\nline   text with\ttabs",
        "hyphen-\nated words across line-\nbreaks",
        "  ümlaut start is lowercase",
        "ALREADY UPPER",
        "-\n-\n-",
    ];
    for input in inputs {
        let once = repair_sentence(input);
        let twice = repair_sentence(&once);
        assert_eq!(once, twice, "repair not idempotent for {input:?}");
    }
}

#[test]
fn repair_capitalises_unicode_first_letter() {
    assert_eq!(repair_sentence("élan is lacking"), "Élan is lacking");
}

// ============================================================
// load_sentences: the stage-2 entry filter
// ============================================================

#[test]
fn load_sentences_preserves_order() {
    let config = PipelineConfig::default();
    let lines = vec![
        "second limitation: the approach cannot generalise to unseen domains or languages.",
        "NOT A SENTENCE",
        "first limitation: the approach cannot scale to millions of documents per day.",
    ];
    let kept = load_sentences(&lines, &config);
    assert_eq!(kept.len(), 2);
    assert!(kept[0].starts_with("Second limitation"));
    assert!(kept[1].starts_with("First limitation"));
}

// ============================================================
// Extraction stage: raw page text to candidates
// ============================================================

#[test]
fn candidates_from_wrapped_page_text() {
    let config = PipelineConfig::default();
    let page = "6 Limitations\n\
                \n\
                Our method is compu-\n\
                tationally expensive and cannot\n\
                process documents longer than\n\
                4096 tokens. Future work will ad-\n\
                dress this issue with sparse kernels.\n\
                \n\
                References\n";
    let candidates = candidate_sentences(page, &config);
    assert_eq!(
        candidates,
        vec![
            "Our method is computationally expensive and cannot process documents longer than 4096 tokens.",
            "Future work will address this issue with sparse kernels.",
        ]
    );
}

#[test]
fn candidate_gate_is_looser_than_limitation_filter() {
    let config = PipelineConfig::default();
    // Six words: a candidate, but too short to be a limitation
    let s = "The model still fails on tables.";
    assert!(is_candidate(s, &config));
    assert!(!is_valid_limitation(s, &config));
}
