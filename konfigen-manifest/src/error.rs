use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Everything that can go wrong between a konfigen.toml on disk and a
/// lowered [`Manifest`](crate::Manifest).
///
/// Variants that reject manifest content carry the source text and, when
/// the offending key can be located, a span into it, so reports point at
/// the line to fix.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'konfigen init' to create a starter konfigen.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest is not valid TOML")]
    #[diagnostic(code(konfigen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("syntax error")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("field '{field}' must not be blank")]
    #[diagnostic(
        code(konfigen::blank_field),
        help("set a non-empty value for '{field}'")
    )]
    BlankField {
        #[source_code]
        src: NamedSource<String>,
        #[label("defined here")]
        span: Option<SourceSpan>,
        field: String,
    },

    #[error("unsupported value for field '{field}'")]
    #[diagnostic(
        code(konfigen::invalid_field),
        help("valid field types are: null, bool, byte, short, int, long, float, double, char, string")
    )]
    UnsupportedField {
        #[source_code]
        src: NamedSource<String>,
        #[label("{detail}")]
        span: Option<SourceSpan>,
        field: String,
        detail: String,
    },

    #[error("cannot use '{name}' as a {context}")]
    #[diagnostic(help(
        "'{name}' is a Kotlin hard keyword and would not compile as a declaration name; try '{name}_value'"
    ))]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("Kotlin keyword")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("'{name}' is not a usable {context} name")]
    #[diagnostic(help(
        "{reason}; names use letters, digits, and underscores, and start with a letter or underscore"
    ))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a valid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("unknown environment '{name}'")]
    #[diagnostic(
        code(konfigen::unknown_environment),
        help(
            "comprehensive versions need a known environment: production, development, UAT, staging, QA, integration, sandbox, pre-production"
        )
    )]
    UnknownEnvironment {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a known environment")]
        span: Option<SourceSpan>,
        name: String,
    },
}
