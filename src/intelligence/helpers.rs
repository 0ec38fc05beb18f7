/// True when `text` contains any of `patterns` verbatim (case-sensitive).
pub fn contains_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}

/// Case-insensitive variant. Patterns are expected in lower case.
pub fn contains_any_ignore_case(text: &str, patterns: &[&str]) -> bool {
    contains_any(&text.to_lowercase(), patterns)
}

/// Join a list for narrative text, or fall back when it is empty.
pub fn join_or(items: &[String], separator: &str, fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(separator)
    }
}

/// Copy a static catalog slice into owned strings.
pub fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
