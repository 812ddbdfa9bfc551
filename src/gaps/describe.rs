// Templated gap descriptions.

/// Describe a gap in one paragraph, quoting its title and evidence count.
///
/// The `**` markers are Markdown bold; both report formats keep them verbatim.
pub fn generate_description(title: &str, frequency: usize) -> String {
    format!(
        "This research gap represents a recurring unresolved challenge related to **{title}**. \
         It is supported by **{frequency} limitation statement(s)** extracted from the literature. \
         While evidence is limited, the issue indicates a potential direction for future research."
    )
}
