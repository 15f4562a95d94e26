//! Placeholder scanning
//!
//! Finds `:name` references in a filter so unbound names can be reported
//! before the statement leaves the process.

/// Collect placeholder names in order of first appearance, without duplicates.
///
/// Text inside single-quoted literals is skipped, as are `::` sequences.
pub fn placeholders(clause: &str) -> Vec<String> {
    let chars: Vec<char> = clause.chars().collect();
    let mut names: Vec<String> = Vec::new();
    let mut in_literal = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if in_literal {
            match c {
                '\\' => i += 1,
                '\'' => in_literal = false,
                _ => {}
            }
            i += 1;
            continue;
        }

        match c {
            '\'' => in_literal = true,
            ':' if chars.get(i + 1) == Some(&':') => {
                i += 2;
                continue;
            }
            ':' if chars.get(i + 1).is_some_and(|next| is_name_start(*next)) => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && is_name_char(chars[end]) {
                    end += 1;
                }
                let name: String = chars[start..end].iter().collect();
                if !names.contains(&name) {
                    names.push(name);
                }
                i = end;
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    names
}

/// Whether `name` can be used as a bind variable name
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start(first) => chars.all(is_name_char),
        _ => false,
    }
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
