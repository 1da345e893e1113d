//! Error type for the fdlayout CLI.
//!
//! [`CliError`] derives [`miette::Diagnostic`] so the binary can render
//! failures with codes, help text and, for malformed input, a snippet of
//! the offending JSON.

use std::{io, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

use fdlayout::LayoutError;

/// Errors produced while running the CLI
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(fdlayout::io))]
    Io(#[from] io::Error),

    #[error("Invalid graph JSON: {message}")]
    #[diagnostic(
        code(fdlayout::input),
        help("expected an object with a `nodes` array and an optional `edges` array")
    )]
    Json {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("Failed to write layout JSON: {0}")]
    #[diagnostic(code(fdlayout::output))]
    Export(#[source] serde_json::Error),

    #[error("Failed to parse TOML configuration {}: {message}", path.display())]
    #[diagnostic(
        code(fdlayout::config),
        help("layout settings belong in a `[layout]` table")
    )]
    ConfigParse { path: PathBuf, message: String },

    #[error("Missing configuration file: {}", .0.display())]
    #[diagnostic(code(fdlayout::config))]
    MissingConfig(PathBuf),

    #[error(transparent)]
    #[diagnostic(
        code(fdlayout::layout),
        help("check that every edge endpoint names a node and that node ids are unique")
    )]
    Layout(#[from] LayoutError),
}

impl CliError {
    /// Create a `Json` error pointing at the location reported by the parser.
    pub fn new_json_error(err: &serde_json::Error, name: &str, src: impl Into<String>) -> Self {
        let src = src.into();
        let offset = SourceOffset::from_location(&src, err.line(), err.column());
        Self::Json {
            message: err.to_string(),
            src: NamedSource::new(name, src),
            span: SourceSpan::new(offset, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_points_at_failure() {
        let src = "{\n  \"nodes\": [ }\n";
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();

        let cli_err = CliError::new_json_error(&err, "graph.json", src);

        let CliError::Json { span, .. } = cli_err else {
            panic!("expected a JSON error");
        };
        assert_eq!(src[..span.offset()].lines().count(), 2);
    }

    #[test]
    fn test_layout_error_is_transparent() {
        let err = CliError::from(LayoutError::InvalidConfig("iterations".to_string()));
        assert_eq!(err.to_string(), "Invalid configuration: iterations");
    }
}
