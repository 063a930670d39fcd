//! Command-line options.
//!
//! Arguments are parsed by hand; the surface is small enough that a flag
//! loop reads better than a framework.

use std::path::{Path, PathBuf};

use pl0_diagnostic::emitter::ColorMode;
use pl0_lexer::LexerConfig;

use crate::report::ReportFormat;
use crate::CliError;

/// What the driver was asked to do.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Lex a source file and write a report.
    Lex(LexOptions),
    /// Describe an error code.
    Explain(String),
    Help,
    Version,
}

/// Options for lexing one file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexOptions {
    pub input: PathBuf,
    /// Report file; `None` means [`default_output_path`].
    pub output: Option<PathBuf>,
    pub format: ReportFormat,
    pub color: ColorMode,
    pub config: LexerConfig,
    /// Skip the source listing and token table on the console.
    pub quiet: bool,
}

impl LexOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        LexOptions {
            input: input.into(),
            output: None,
            format: ReportFormat::default(),
            color: ColorMode::default(),
            config: LexerConfig::default(),
            quiet: false,
        }
    }

    /// Where the report file goes.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input, self.format))
    }
}

/// `output/<stem>_tokens.<ext>`, relative to the working directory.
pub fn default_output_path(input: &Path, format: ReportFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "source".into(), |s| s.to_string_lossy());
    PathBuf::from("output").join(format!("{stem}_tokens.{}", format.extension()))
}

/// Parse the arguments that follow the program name.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut positional: Vec<&str> = Vec::new();
    let mut format = ReportFormat::default();
    let mut color = ColorMode::default();
    let mut config = LexerConfig::default();
    let mut quiet = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--explain" => {
                let Some(code) = iter.next() else {
                    return Err(CliError::usage("--explain needs an error code"));
                };
                return Ok(Command::Explain(code.clone()));
            }
            "--ascii" => config = LexerConfig::ascii(),
            "--quiet" | "-q" => quiet = true,
            _ => {
                if let Some(code) = arg.strip_prefix("--explain=") {
                    return Ok(Command::Explain(code.to_string()));
                } else if let Some(value) = arg.strip_prefix("--format=") {
                    format = ReportFormat::parse(value).ok_or_else(|| {
                        CliError::usage(format!(
                            "unknown report format '{value}' (expected text or json)"
                        ))
                    })?;
                } else if let Some(value) = arg.strip_prefix("--color=") {
                    color = ColorMode::parse(value).ok_or_else(|| {
                        CliError::usage(format!(
                            "unknown color mode '{value}' (expected auto, always or never)"
                        ))
                    })?;
                } else if arg.starts_with('-') && arg.len() > 1 {
                    return Err(CliError::usage(format!("unknown option '{arg}'")));
                } else {
                    positional.push(arg);
                }
            }
        }
    }

    let (input, output) = match positional.as_slice() {
        [] => return Err(CliError::usage("missing source file")),
        [input] => (*input, None),
        [input, output] => (*input, Some(PathBuf::from(*output))),
        [_, _, extra, ..] => {
            return Err(CliError::usage(format!("unexpected argument '{extra}'")));
        }
    };

    Ok(Command::Lex(LexOptions {
        input: PathBuf::from(input),
        output,
        format,
        color,
        config,
        quiet,
    }))
}
