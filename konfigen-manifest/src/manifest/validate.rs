//! Field name validation and error construction during lowering.

use miette::{NamedSource, SourceSpan};

use crate::{Error, Result};

/// Carries the manifest source through lowering so every rejection can point
/// back into the file.
///
/// The manifest hierarchy is one level deep: a context is either at the top
/// level or scoped to a single `[section]`.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
    section: Option<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            section: None,
        }
    }

    /// A context scoped to one `[section]` of the manifest.
    pub fn in_section(self, name: &'a str) -> Self {
        Self {
            section: Some(name),
            ..self
        }
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    pub fn blank_field_error(&self, key: &str) -> Box<Error> {
        Box::new(Error::BlankField {
            src: self.named_source(),
            span: self.key_span(key),
            field: self.qualify(key),
        })
    }

    pub fn unsupported_field_error(&self, key: &str, detail: impl Into<String>) -> Box<Error> {
        Box::new(Error::UnsupportedField {
            src: self.named_source(),
            span: self.key_span(key),
            field: self.qualify(key),
            detail: detail.into(),
        })
    }

    /// Points at the quoted value when it appears in the source.
    pub fn unknown_environment_error(&self, name: &str) -> Box<Error> {
        let span = self
            .src
            .find(&format!("\"{name}\""))
            .map(|pos| SourceSpan::from((pos + 1, name.len())));
        Box::new(Error::UnknownEnvironment {
            src: self.named_source(),
            span,
            name: name.to_string(),
        })
    }

    /// Reject `name` unless it can head a Kotlin declaration.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_kotlin_keyword(name) {
            return Err(Box::new(Error::ReservedKeyword {
                src: self.named_source(),
                span: self.key_span(name),
                name: name.to_string(),
                context: self.describe(kind),
            }));
        }
        if let Some(reason) = identifier_problem(name) {
            return Err(Box::new(Error::InvalidIdentifier {
                src: self.named_source(),
                span: self.key_span(name),
                name: name.to_string(),
                context: self.describe(kind),
                reason: reason.to_string(),
            }));
        }
        Ok(())
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// The key qualified with its section, e.g. `application.id`.
    fn qualify(&self, key: &str) -> String {
        match self.section {
            Some(section) => format!("{section}.{key}"),
            None => key.to_string(),
        }
    }

    /// What the key is, for error messages, e.g. `field in [fields]`.
    fn describe(&self, kind: &str) -> String {
        match self.section {
            Some(section) => format!("{kind} in [{section}]"),
            None => kind.to_string(),
        }
    }

    fn key_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.src, key)
    }
}

/// Kotlin hard keywords, which can never appear as unescaped identifiers.
/// Source: https://kotlinlang.org/docs/keyword-reference.html
const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

fn is_kotlin_keyword(name: &str) -> bool {
    KOTLIN_KEYWORDS.contains(&name)
}

/// Locate `key` where it opens an assignment at the start of a line.
///
/// Only a bare key followed by `=` counts, so occurrences inside values
/// don't shadow the real definition. Returns None when the key was written
/// in a form this search can't see (e.g. quoted); reports then render
/// without a label.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split('\n') {
        if let Some(rest) = line.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset, key.len())));
            }
        }
        offset += line.len() + 1;
    }
    None
}

/// Why `name` cannot be a Kotlin identifier, or None when it can.
///
/// Unicode letters are allowed, matching what the Kotlin compiler accepts
/// for unescaped identifiers. Dashes are not.
fn identifier_problem(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, digits, and underscores");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(identifier_problem("hello").is_none());
        assert!(identifier_problem("hello_world").is_none());
        assert!(identifier_problem("HelloWorld").is_none());
        assert!(identifier_problem("_private").is_none());
        assert!(identifier_problem("arg1").is_none());
        assert!(identifier_problem("my_var_2").is_none());
        // Unicode letters are valid Kotlin identifiers
        assert!(identifier_problem("变量").is_none());
        assert!(identifier_problem("größe").is_none());
    }

    #[test]
    fn hard_keywords_are_recognized() {
        for keyword in ["val", "var", "fun", "object", "package", "when", "null", "typealias"] {
            assert!(is_kotlin_keyword(keyword), "{keyword} should be reserved");
        }
    }

    #[test]
    fn soft_keywords_are_not_reserved() {
        // Soft keywords only act as keywords in specific positions
        for name in ["value", "field", "import", "by", "constructor"] {
            assert!(!is_kotlin_keyword(name), "{name} should be usable");
            assert!(identifier_problem(name).is_none());
        }
    }

    #[test]
    fn rejects_bad_start_characters() {
        assert!(identifier_problem("123abc").is_some());
        assert!(identifier_problem("1st").is_some());
        assert!(identifier_problem("-name").is_some());
    }

    #[test]
    fn rejects_interior_punctuation() {
        assert!(identifier_problem("hello.world").is_some());
        assert!(identifier_problem("hello world").is_some());
        assert!(identifier_problem("hello-world").is_some());
        assert!(identifier_problem("hello!").is_some());
        assert!(identifier_problem("").is_some());
    }

    #[test]
    fn key_span_points_at_the_assignment() {
        let src = "[fields]\nretries = 3\n";
        let span = find_key_span(src, "retries").unwrap();
        assert_eq!(span.offset(), 9);
        assert_eq!(span.len(), "retries".len());
    }

    #[test]
    fn key_span_skips_matches_inside_values() {
        // "retries" also appears inside a value; only the key position counts
        let src = "note = \"retries = 3\"\nretries = 3\n";
        let span = find_key_span(src, "retries").unwrap();
        assert_eq!(span.offset(), 21);
    }

    #[test]
    fn key_span_requires_a_following_equals() {
        assert!(find_key_span("[fields]\n", "absent").is_none());
        assert!(find_key_span("retries\n", "retries").is_none());
    }

    #[test]
    fn key_span_allows_extra_whitespace_before_equals() {
        let span = find_key_span("retries   = 3\n", "retries").unwrap();
        assert_eq!(span.offset(), 0);
    }
}
