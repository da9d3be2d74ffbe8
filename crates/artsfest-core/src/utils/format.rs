/// Human-readable label for a result position ("1" becomes "1st Place").
///
/// Anything other than 1, 2 or 3 is shown as written.
pub fn position_text(position: &str) -> String {
    match position {
        "1" => "1st Place".to_string(),
        "2" => "2nd Place".to_string(),
        "3" => "3rd Place".to_string(),
        "" => "-".to_string(),
        other => other.to_string(),
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
