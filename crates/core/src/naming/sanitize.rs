//! Filename sanitization for legacy hardware players.
//!
//! Older CDJ-style players reject or garble anything outside a small ASCII
//! subset, so names are reduced to letters, digits, space and `- _ ( )`.

/// Name used when sanitization leaves nothing behind.
pub const FALLBACK_NAME: &str = "Unknown";

const TRAILING_STRIP: [char; 4] = ['.', ' ', '-', '_'];
const LEADING_STRIP: [char; 3] = ['.', '-', '_'];

/// Whether a character may appear in a sanitized filename.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '(' | ')')
}

/// Maps an arbitrary string to a name made only of allowed characters.
///
/// Disallowed characters are dropped, never replaced. Whitespace runs collapse
/// to one space, separators are trimmed from both ends, and runs of `-`/`_`
/// collapse to a single `-`. Never returns an empty string.
pub fn sanitize(input: &str) -> String {
    let filtered: String = input.chars().filter(|c| is_allowed_char(*c)).collect();
    let collapsed = collapse_whitespace(&filtered);
    let stripped = strip_edges(&collapsed);
    let joined = collapse_separators(stripped);

    if joined.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    // Second pass: stripping one edge can expose another (e.g. "_ -a").
    let filtered: String = joined.chars().filter(|c| is_allowed_char(*c)).collect();
    let result = strip_edges(&filtered);
    if result.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        result.to_string()
    }
}

fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_space = false;
    for c in input.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Trims whitespace, trailing `. -_` and leading `.-_` until nothing changes.
fn strip_edges(input: &str) -> &str {
    let mut current = input;
    loop {
        let next = current
            .trim()
            .trim_end_matches(TRAILING_STRIP)
            .trim_start_matches(LEADING_STRIP);
        if next.len() == current.len() {
            return next;
        }
        current = next;
    }
}

fn collapse_separators(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut run: Vec<char> = Vec::new();

    let flush = |run: &mut Vec<char>, out: &mut String| {
        match run.len() {
            0 => {}
            1 => out.push(run[0]),
            _ => out.push('-'),
        }
        run.clear();
    };

    for c in input.chars() {
        if c == '-' || c == '_' {
            run.push(c);
        } else {
            flush(&mut run, &mut out);
            out.push(c);
        }
    }
    flush(&mut run, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRICKY_INPUTS: &[&str] = &[
        "",
        " ",
        "...",
        "-_-",
        "Sér∫ios 😀 Mix",
        "_ -a",
        "- a",
        "a -",
        "a__b",
        "a-_-_b",
        "  lots   of   space  ",
        "AC/DC: Back in Black?",
        "Björk - Jóga",
        "日本語",
        "(Remix)",
        "a\tb\nc",
        "..hidden",
        "trailing.",
        "Track 01 -- Intro__",
        "__-- (2) --__",
        "😀😀😀",
        "a - _ b",
    ];

    #[test]
    fn test_emoji_and_unicode_are_removed() {
        assert_eq!(sanitize("Sér∫ios 😀 Mix"), "Srios Mix");
        assert_eq!(sanitize("Björk - Jóga"), "Bjrk - Jga");
    }

    #[test]
    fn test_special_symbols_are_dropped_not_replaced() {
        assert_eq!(sanitize("AC/DC: Back in Black?"), "ACDC Back in Black");
        assert_eq!(sanitize("Rock & Roll [Live], Pt. 2"), "Rock Roll Live Pt 2");
    }

    #[test]
    fn test_empty_results_fall_back() {
        assert_eq!(sanitize(""), FALLBACK_NAME);
        assert_eq!(sanitize("日本語"), FALLBACK_NAME);
        assert_eq!(sanitize("-_-"), FALLBACK_NAME);
        assert_eq!(sanitize("   "), FALLBACK_NAME);
        assert_eq!(sanitize("😀😀😀"), FALLBACK_NAME);
    }

    #[test]
    fn test_edges_are_trimmed() {
        assert_eq!(sanitize("  lots   of   space  "), "lots of space");
        assert_eq!(sanitize("Track 01 -- Intro__"), "Track 01 - Intro");
        assert_eq!(sanitize("..hidden"), "hidden");
        assert_eq!(sanitize("_ -a"), "a");
        assert_eq!(sanitize("- a"), "a");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(sanitize("a__b"), "a-b");
        assert_eq!(sanitize("a-_-_b"), "a-b");
        assert_eq!(sanitize("snake_case"), "snake_case");
    }

    #[test]
    fn test_parentheses_survive() {
        assert_eq!(sanitize("Foo - Bar (2)"), "Foo - Bar (2)");
        assert_eq!(sanitize("(Remix)"), "(Remix)");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for input in TRICKY_INPUTS {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_output_charset_and_non_empty() {
        for input in TRICKY_INPUTS {
            let out = sanitize(input);
            assert!(!out.is_empty(), "empty output for {:?}", input);
            assert!(
                out.chars().all(is_allowed_char),
                "disallowed char in {:?} -> {:?}",
                input,
                out
            );
        }
    }
}
