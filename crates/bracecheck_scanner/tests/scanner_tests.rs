//! Scanner integration tests.
//!
//! Verifies the rendered diagnostic output for whole source snippets.

use bracecheck_scanner::check_source;

/// Helper: scan source and return the rendered output lines.
fn check(source: &str) -> Vec<String> {
    check_source(source)
        .into_diagnostics()
        .iter()
        .map(|d| d.to_string())
        .collect()
}

#[test]
fn test_balanced_nesting_reports_no_problems() {
    let source = "function f(a, b) {\n  const x = [a, (b)];\n  return { x };\n}\n";
    assert_eq!(check(source), vec!["No unclosed blocks found."]);
}

#[test]
fn test_empty_source_reports_no_problems() {
    assert_eq!(check(""), vec!["No unclosed blocks found."]);
}

#[test]
fn test_mismatched_closer() {
    assert_eq!(
        check("(a]"),
        vec!["Error: Mismatched closing ']' at line 1. Expected closing for '(' from line 1"]
    );
}

#[test]
fn test_mismatch_reports_the_opening_line() {
    assert_eq!(
        check("{\n]"),
        vec!["Error: Mismatched closing ']' at line 2. Expected closing for '{' from line 1"]
    );
}

#[test]
fn test_mismatch_halts_before_outer_bracket_is_reported() {
    // The outer `{` stays unclosed, but the pass stops at the mismatch and
    // must not produce an unclosed-at-EOF report for it.
    assert_eq!(
        check("{ ( }"),
        vec!["Error: Mismatched closing '}' at line 1. Expected closing for '(' from line 1"]
    );
}

#[test]
fn test_bracket_inside_string_is_inert() {
    assert_eq!(check("x = \"]\""), vec!["No unclosed blocks found."]);
    assert_eq!(check("x = '('"), vec!["No unclosed blocks found."]);
    assert_eq!(check("x = `}`"), vec!["No unclosed blocks found."]);
}

#[test]
fn test_comment_starter_inside_string_is_inert() {
    assert_eq!(
        check("const url = \"https://example.com\"; ()"),
        vec!["No unclosed blocks found."]
    );
}

#[test]
fn test_line_comment_hides_bracket() {
    assert_eq!(check("// (\nx = 1\n"), vec!["No unclosed blocks found."]);
}

#[test]
fn test_line_comment_resets_on_next_line() {
    assert_eq!(
        check("// comment\n(\n"),
        vec!["Error: Unclosed blocks at EOF:\n  '(' form line 2"]
    );
}

#[test]
fn test_block_comment_hides_brackets_across_lines() {
    assert_eq!(
        check("/* {\n   (\n*/\n()\n"),
        vec!["No unclosed blocks found."]
    );
}

#[test]
fn test_escaped_quote_keeps_string_open() {
    // The string only closes at the final unescaped quote, so the `]` is
    // still inert string content.
    assert_eq!(check("x = \"a\\\"]\""), vec!["No unclosed blocks found."]);
}

#[test]
fn test_unmatched_closer_is_reported_and_scanning_continues() {
    assert_eq!(
        check(")\n()\n"),
        vec![
            "Error: Unmatched closing ')' at line 1",
            "No unclosed blocks found.",
        ]
    );
}

#[test]
fn test_unmatched_closer_in_hidden_context_after_comment() {
    assert_eq!(
        check("// /*\n}\n"),
        vec![
            "Error: Unmatched closing '}' at line 2",
            "No unclosed blocks found.",
        ]
    );
}

#[test]
fn test_unclosed_blocks_listed_in_push_order() {
    assert_eq!(
        check("{{{"),
        vec!["Error: Unclosed blocks at EOF:\n  '{' form line 1\n  '{' form line 1\n  '{' form line 1"]
    );
}

#[test]
fn test_unclosed_blocks_keep_original_lines() {
    assert_eq!(
        check("{\n(\n[\n"),
        vec![
            "Error: Unclosed blocks at EOF:\n  '{' form line 1\n  '(' form line 2\n  '[' form line 3"
        ]
    );
}

#[test]
fn test_unclosed_blocks_truncated_to_last_five() {
    let source = "(\n".repeat(7);
    assert_eq!(
        check(&source),
        vec![
            "Error: Unclosed blocks at EOF:\n  '(' form line 3\n  '(' form line 4\n  '(' form line 5\n  '(' form line 6\n  '(' form line 7"
        ]
    );
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(check("{\r\n}\r\n"), vec!["No unclosed blocks found."]);
    assert_eq!(
        check("{\r\n(\r\n"),
        vec!["Error: Unclosed blocks at EOF:\n  '{' form line 1\n  '(' form line 2"]
    );
}

#[test]
fn test_unterminated_string_swallows_the_rest() {
    // An unterminated string runs to EOF; the bracket after the quote is
    // never structural.
    assert_eq!(check("x = \"abc\n(\n"), vec!["No unclosed blocks found."]);
}

#[test]
fn test_scan_is_idempotent() {
    let source = "{ (\n] }\nx = \"(\"\n";
    assert_eq!(check(source), check(source));
}
