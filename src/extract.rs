//! Entity extraction: which table rows a question talks about, and how many
//! ranked results it asked for.

/// Collect every table value mentioned in the normalized question, by
/// case-insensitive substring containment, preserving table iteration order.
/// There is no word-boundary check, so a short name inside an unrelated word
/// will match; that looseness is intentional and covered by tests.
pub fn mentioned_names(values: &[String], question: &str) -> Vec<String> {
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .filter(|v| question.contains(&v.to_lowercase()))
        .cloned()
        .collect()
}

/// Requested rank count. "top 5"/"5 highest" ask for five, "top 3"/"3
/// highest" for three, everything else defaults to ten.
pub fn rank_count(question: &str) -> usize {
    if question.contains("top 5") || question.contains("5 highest") {
        5
    } else if question.contains("top 3") || question.contains("3 highest") {
        3
    } else {
        10
    }
}
