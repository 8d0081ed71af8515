//! Top-level import block extraction and ordering.
//!
//! The import block is the contiguous run of `import` / `from` lines that
//! follows the optional shebang and module docstring. Blank lines inside
//! the block are allowed and ignored for ordering.

const DOCSTRING_DELIMITERS: [&str; 2] = ["\"\"\"", "'''"];

/// Extract the import lines of the top-level import block, stripped and
/// without blank lines, in file order.
pub fn extract_top_import_block(content: &str) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    let mut index = 0;

    if index < lines.len() && lines[index].starts_with("#!") {
        index += 1;
    }

    index = skip_blank(&lines, index);
    index = skip_docstring(&lines, index);
    index = skip_blank(&lines, index);

    let mut import_lines = Vec::new();
    while index < lines.len() {
        let stripped = lines[index].trim();
        if stripped.is_empty() {
            index += 1;
            continue;
        }
        if stripped.starts_with("import ") || stripped.starts_with("from ") {
            import_lines.push(stripped.to_string());
            index += 1;
            continue;
        }
        break;
    }

    import_lines
}

/// The import block equals its stable case-insensitive sort.
pub fn check_import_order(content: &str) -> bool {
    is_sorted_case_insensitive(&extract_top_import_block(content))
}

/// `lines` is non-decreasing under lowercase comparison
pub fn is_sorted_case_insensitive<S: AsRef<str>>(lines: &[S]) -> bool {
    lines
        .windows(2)
        .all(|pair| pair[0].as_ref().to_lowercase() <= pair[1].as_ref().to_lowercase())
}

fn skip_blank(lines: &[&str], mut index: usize) -> usize {
    while index < lines.len() && lines[index].trim().is_empty() {
        index += 1;
    }
    index
}

fn skip_docstring(lines: &[&str], mut index: usize) -> usize {
    let Some(opening) = lines.get(index) else {
        return index;
    };
    let Some(quote) = DOCSTRING_DELIMITERS
        .iter()
        .find(|delimiter| opening.starts_with(*delimiter))
    else {
        return index;
    };

    // """Closed on the opening line."""
    if opening.len() >= 2 * quote.len() && opening.ends_with(quote) {
        return index + 1;
    }

    index += 1;
    while index < lines.len() {
        if lines[index].ends_with(quote) {
            return index + 1;
        }
        index += 1;
    }
    index
}
