//! Plain text predicates over a script's content.

/// First line equals `expected`. Empty content has an empty first line.
pub fn check_shebang(content: &str, expected: &str) -> bool {
    first_line(content) == expected
}

/// Content ends with a newline character
pub fn check_trailing_newline(content: &str) -> bool {
    content.ends_with('\n')
}

/// Content contains the entry point guard
pub fn check_main_guard(content: &str, guard: &str) -> bool {
    content.contains(guard)
}

/// Content calls the safe lookup method at least once
pub fn check_get_usage(content: &str, pattern: &str) -> bool {
    content.contains(pattern)
}

fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or("")
}
