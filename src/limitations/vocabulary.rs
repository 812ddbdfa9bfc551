// Stock vocabularies for limitation detection and gap naming.
//
// These only seed `PipelineConfig::default()`; the pipeline itself always
// reads them from the config value it is handed.

/// Substrings that signal a sentence is about a shortcoming or open problem.
const CUE_WORDS: [&str; 24] = [
    "limitation",
    "challenge",
    "difficult",
    "fails",
    "cannot",
    "unable",
    "insufficient",
    "problem",
    "issue",
    "inefficient",
    "lack",
    "trade-off",
    "concern",
    "risk",
    "drawback",
    "costly",
    "expensive",
    "bias",
    "unclear",
    "open problem",
    "future work",
    "remains",
    "still",
    "yet",
];

/// Keyword to gap title, in precedence order. Several keywords may occur in
/// the same cluster; only the first one listed here names the gap.
const CONCEPTS: [(&str, &str); 13] = [
    ("attention", "Attention Noise and Context Management"),
    ("context", "Long-Context Understanding Limitations"),
    ("bert", "Encoder Architecture Limitations"),
    ("encoder", "Encoder Architecture Limitations"),
    ("scaling", "Performance Saturation with Scaling"),
    ("scale", "Performance Saturation with Scaling"),
    ("compute", "Computational Inefficiency"),
    ("data", "Data Inefficiency and Bias"),
    ("training", "Training Cost and Data Dependence"),
    ("prompt", "Limitations of Prompt-Based Methods"),
    ("reasoning", "Reasoning and Generalization Failures"),
    ("evaluation", "Evaluation and Benchmarking Gaps"),
    ("hallucination", "Hallucination and Reliability Issues"),
];

/// Final words that mean the PDF line break cut a sentence short.
const DANGLING_ENDINGS: [&str; 5] = ["such as", "including", "and", "or", "in"];

pub fn default_cue_words() -> Vec<String> {
    CUE_WORDS.iter().map(|s| s.to_string()).collect()
}

pub fn default_concepts() -> Vec<(String, String)> {
    CONCEPTS
        .iter()
        .map(|(k, t)| (k.to_string(), t.to_string()))
        .collect()
}

pub fn default_dangling_endings() -> Vec<String> {
    DANGLING_ENDINGS.iter().map(|s| s.to_string()).collect()
}
