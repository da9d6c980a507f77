/// Key used to detect duplicate album titles. Only case is folded, so
/// "Deluxe" editions and punctuation variants stay distinct.
pub fn title_key(title: &str) -> String {
    title.to_lowercase()
}

pub fn same_artist_name(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

/// Trims a line of a line-delimited input file, dropping blanks and `#` comments.
pub fn clean_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        None
    } else {
        Some(trimmed)
    }
}
