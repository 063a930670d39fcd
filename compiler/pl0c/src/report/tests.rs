#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::path::Path;

use pl0_diagnostic::emitter::ColorMode;
use pl0_diagnostic::queue::DiagnosticQueue;
use pretty_assertions::assert_eq;

use super::*;

fn render_text(source: &str) -> String {
    let output = pl0_lexer::lex(source);
    let diagnostics = output.diagnostics();
    let report = Report {
        source: Path::new("t.pl0"),
        tokens: &output.tokens,
        diagnostics: &diagnostics,
        statistics: Statistics::collect(&output.tokens, diagnostics.len()),
    };
    let mut buf = Vec::new();
    write_text(&mut buf, &report).unwrap();
    String::from_utf8(buf).unwrap()
}

fn row(index: usize, line: u32, column: u32, kind: &str, value: &str) -> String {
    format!("{index:<6} {line:<6} {column:<6} {kind:<15} {value:<20}")
}

#[test]
fn test_format_parse() {
    assert_eq!(ReportFormat::parse("text"), Some(ReportFormat::Text));
    assert_eq!(ReportFormat::parse("json"), Some(ReportFormat::Json));
    assert_eq!(ReportFormat::parse("yaml"), None);
    assert_eq!(ReportFormat::Json.extension(), "json");
}

#[test]
fn test_truncate_value() {
    assert_eq!(truncate_value("short", 20), "short");
    assert_eq!(truncate_value(&"a".repeat(20), 20), "a".repeat(20));
    assert_eq!(
        truncate_value(&"b".repeat(21), 20),
        format!("{}...", "b".repeat(17))
    );
    // Counts characters, not bytes.
    assert_eq!(truncate_value(&"ä".repeat(20), 20), "ä".repeat(20));
}

#[test]
fn test_text_report_clean() {
    let banner = "=".repeat(80);
    let expected = [
        banner.clone(),
        "PL/0 Lexical Analysis Results".to_string(),
        banner.clone(),
        String::new(),
        format!(
            "{:<6} {:<6} {:<6} {:<15} {:<20}",
            "Index", "Line", "Column", "Type", "Value"
        ),
        "-".repeat(80),
        row(1, 1, 1, "VAR", "var"),
        row(2, 1, 5, "ID", "x"),
        row(3, 1, 6, "SEMICOLON", ";"),
        String::new(),
        banner.clone(),
        String::new(),
        "Lexical analysis completed, no errors.".to_string(),
        String::new(),
        banner,
    ]
    .join("\n")
        + "\n";
    assert_eq!(render_text("var x;"), expected);
}

#[test]
fn test_text_report_lists_errors() {
    let text = render_text("x := 12ab;\n@");
    assert!(text.contains(&row(3, 1, 6, "ERROR", "12ab")));
    assert!(text.contains("\nError List:\n"));
    assert!(text.contains(
        "Lexical error (line 1, column 6): Letter cannot directly follow a number: 12ab\n\
         Lexical error (line 2, column 1): Illegal character: '@'\n"
    ));
    assert!(text.contains("\nFound 2 errors in total.\n"));
    assert!(!text.contains("no errors"));
}

#[test]
fn test_text_report_keeps_long_values() {
    let long = "abcdefghijklmnopqrstuvwxyz";
    let text = render_text(long);
    assert!(text.contains(long));
}

#[test]
fn test_json_report() {
    let output = pl0_lexer::lex("x := :");
    let diagnostics = output.diagnostics();
    let report = Report {
        source: Path::new("dir/prog.pl0"),
        tokens: &output.tokens,
        diagnostics: &diagnostics,
        statistics: Statistics::collect(&output.tokens, diagnostics.len()),
    };
    let mut buf = Vec::new();
    write_json(&mut buf, &report).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert_eq!(value["source"], "dir/prog.pl0");
    assert_eq!(value["tokens"][0]["kind"], "ID");
    assert_eq!(value["tokens"][0]["value"], "x");
    assert_eq!(value["tokens"][0]["line"], 1);
    assert_eq!(value["tokens"][1]["kind"], "ASSIGN");
    assert_eq!(value["tokens"][3]["kind"], "EOF");
    assert_eq!(value["tokens"][3]["value"], serde_json::Value::Null);
    assert_eq!(value["errors"][0]["code"], "E0003");
    assert_eq!(value["errors"][0]["column"], 6);
    assert_eq!(value["errors"][0]["message"], "Illegal character ':', expected ':='");
    assert_eq!(value["errors"][0]["notes"][0], "assignment is written `:=`");
    assert!(value["errors"][0].get("severity").is_none());
    assert_eq!(value["statistics"]["total_tokens"], 3);
    assert_eq!(value["statistics"]["errors"], 1);
}

#[test]
fn test_write_report_file_creates_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("r.txt");
    let output = pl0_lexer::lex("begin end");
    let report = Report {
        source: Path::new("p.pl0"),
        tokens: &output.tokens,
        diagnostics: &[],
        statistics: Statistics::collect(&output.tokens, 0),
    };
    write_report_file(&path, ReportFormat::Text, &report).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with(&"=".repeat(80)));
    assert!(written.contains(&row(2, 1, 7, "END", "end")));
}

#[test]
fn test_console_token_table_truncates() {
    let output = pl0_lexer::lex("averyveryverylongidentifiername");
    let mut buf = Vec::new();
    console::write_token_table(&mut buf, &output.tokens).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains(" Identified 1 Tokens:"));
    assert!(text.contains(&row(1, 1, 1, "ID", "averyveryverylong...")));
    assert!(!text.contains("EOF"));
}

#[test]
fn test_console_source_listing() {
    let mut buf = Vec::new();
    console::write_source_listing(&mut buf, "var x;\nbegin end\n").unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("  1 | var x;\n  2 | begin end\n  3 | \n"));
}

#[test]
fn test_console_diagnostics() {
    let output = pl0_lexer::lex("#");
    let queue: DiagnosticQueue = output.diagnostics().into_iter().collect();
    let mut buf = Vec::new();
    console::write_diagnostics(&mut buf, &queue, ColorMode::Never, false).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains(" Found 1 Errors:"));
    assert!(text.contains("error[E0004]: Illegal character: '#'\n  --> 1:1\n"));
    assert!(text.contains("error: found 1 lexical error\n"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_console_summary_counts_only_errors() {
    let output = pl0_lexer::lex("x := 12ab; y : 3 @");
    let queue: DiagnosticQueue = output.diagnostics().into_iter().collect();
    let mut buf = Vec::new();
    console::write_diagnostics(&mut buf, &queue, ColorMode::Never, false).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains(" Found 3 Errors:"));
    assert!(text.contains("error: found 3 lexical errors\n"));
    assert!(!text.contains("warning"));
}

#[test]
fn test_console_no_diagnostics() {
    let mut buf = Vec::new();
    let queue = DiagnosticQueue::new();
    console::write_diagnostics(&mut buf, &queue, ColorMode::Never, true).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\n Lexical analysis completed, no errors.\n"
    );
}
