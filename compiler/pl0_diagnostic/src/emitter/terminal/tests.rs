#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pl0_ir::Position;

use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002)
        .with_message("Letter cannot directly follow a number: 123abc")
        .at(Position::new(4, 9))
        .with_note("separate the number and the name with a space")
}

fn render(colors: ColorMode, f: impl FnOnce(&mut TerminalEmitter<Vec<u8>>)) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), colors, false);
    f(&mut emitter);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(ColorMode::Never, |e| e.emit(&sample_diagnostic()));
    assert_eq!(
        text,
        "error[E0002]: Letter cannot directly follow a number: 123abc\n\
         \x20 --> 4:9\n\
         \x20 = note: separate the number and the name with a space\n"
    );
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(ColorMode::Always, |e| e.emit(&sample_diagnostic()));
    assert!(text.contains("\x1b["));
    assert!(text.contains("E0002"));
}

#[test]
fn test_auto_mode_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("sometimes"), None);
}

#[test]
fn test_emit_all() {
    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E0004).with_message("error 1"),
        Diagnostic::error(ErrorCode::E0003).with_message("error 2"),
    ];
    let text = render(ColorMode::Never, |e| e.emit_all(&diagnostics));
    assert!(text.contains("error[E0004]: error 1"));
    assert!(text.contains("error[E0003]: error 2"));
}

#[test]
fn test_summary() {
    let none = render(ColorMode::Never, |e| e.emit_summary(0));
    assert_eq!(none, "");

    let one = render(ColorMode::Never, |e| e.emit_summary(1));
    assert_eq!(one, "error: found 1 lexical error\n");

    let many = render(ColorMode::Never, |e| e.emit_summary(3));
    assert_eq!(many, "error: found 3 lexical errors\n");
}
