//! Long-description text normalization.

/// Normalizes a step's long description.
///
/// Leading and trailing blank lines are dropped, then the indentation shared
/// by every non-blank line is removed (see [`trim_common_indent`]).
pub fn normalize_long(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let first = lines.iter().position(|l| !is_blank(l));
    let last = lines.iter().rposition(|l| !is_blank(l));

    match (first, last) {
        (Some(first), Some(last)) => trim_common_indent(&lines[first..=last].join("\n")),
        _ => String::new(),
    }
}

/// Removes the leading whitespace prefix common to all non-blank lines.
///
/// Relative indentation is preserved. Blank lines never take part in
/// computing the prefix.
pub fn trim_common_indent(text: &str) -> String {
    let mut prefix: Option<&str> = None;
    for line in text.split('\n').filter(|l| !is_blank(l)) {
        let indent = &line[..line.len() - line.trim_start().len()];
        prefix = Some(match prefix {
            None => indent,
            Some(p) => common_prefix(p, indent),
        });
    }

    let prefix = match prefix {
        Some(p) if !p.is_empty() => p,
        _ => return text.to_string(),
    };

    text.split('\n')
        .map(|line| line.strip_prefix(prefix).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, ca), cb)| ca == cb)
        .last()
        .map(|((i, c), _)| i + c.len_utf8())
        .unwrap_or(0);
    &a[..len]
}
