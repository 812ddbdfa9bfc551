// Sentence repair: undo the damage PDF text extraction does to prose.

/// Repair a raw sentence: join hyphenated line breaks, collapse whitespace
/// runs to a single space, trim, and capitalise a lowercase first letter.
///
/// Repairing an already-repaired sentence returns it unchanged.
pub fn repair_sentence(raw: &str) -> String {
    let joined = raw.replace("-\n", "");
    // Unicode whitespace, so PDF no-break and thin spaces collapse too
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed.as_str();

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut repaired: String = first.to_uppercase().collect();
            repaired.push_str(chars.as_str());
            repaired
        }
        _ => trimmed.to_string(),
    }
}
