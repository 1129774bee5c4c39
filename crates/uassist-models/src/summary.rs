//! Detection label aggregation.
//!
//! Turns the raw label sequence returned by the object-detection service
//! into human-readable count summaries. Duplicate labels are significant:
//! each occurrence is one detected instance.

/// Sentinel summary for an empty detection result.
pub const NO_OBJECTS_DETECTED: &str = "No objects detected.";

/// Count occurrences of each distinct label.
///
/// Labels compare by exact string equality. The returned pairs keep the
/// first-seen order of the input, so summaries are deterministic for a
/// given label sequence.
pub fn label_counts(labels: &[String]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for label in labels {
        match counts.iter().position(|(seen, _)| seen == label) {
            Some(index) => counts[index].1 += 1,
            None => counts.push((label.clone(), 1)),
        }
    }
    counts
}

/// Format a single label count as a display string.
///
/// `count` must be positive. Pluralization is a bare "s" suffix;
/// irregular plurals ("person" -> "persons") are a known limitation and
/// are left as-is.
pub fn format_label_count(label: &str, count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{} detected", count, label, plural)
}

/// Summarize a label sequence into one display string per distinct label.
///
/// Empty input yields the [`NO_OBJECTS_DETECTED`] sentinel. Output order
/// follows the first occurrence of each label; the relative order of raw
/// occurrences is intentionally not preserved.
pub fn summarize_labels(labels: &[String]) -> Vec<String> {
    if labels.is_empty() {
        return vec![NO_OBJECTS_DETECTED.to_string()];
    }

    label_counts(labels)
        .into_iter()
        .map(|(label, count)| format_label_count(&label, count))
        .collect()
}
