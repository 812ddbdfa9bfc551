// Output formatting: report artifacts and terminal display.

pub mod report;
pub mod terminal;

/// Shorten an evidence sentence for terminal preview.
///
/// Counts characters, not bytes: extracted PDF text is full of ligatures
/// and accented letters. Longer input keeps its first `max_chars`
/// characters followed by "...".
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
