//! Kotlin literal grammar.

use konfigen_codegen::{DeclarationKind, Indent, LiteralRenderer, QuotePolicy};
use konfigen_ir::ConfigValue;

/// Kotlin code renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinRenderer;

impl KotlinRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl LiteralRenderer for KotlinRenderer {
    fn literal(&self, value: &ConfigValue, quote: QuotePolicy) -> String {
        match quote {
            QuotePolicy::Quoted => format!("\"{}\"", escape_string(&textual(value))),
            QuotePolicy::Unquoted => textual(value),
            QuotePolicy::Auto => match value {
                ConfigValue::Null => "null".to_string(),
                ConfigValue::Bool(b) => b.to_string(),
                ConfigValue::I8(n) => n.to_string(),
                ConfigValue::I16(n) => n.to_string(),
                ConfigValue::I32(n) => n.to_string(),
                ConfigValue::I64(n) => format!("{n}L"),
                ConfigValue::F32(f) => non_finite_literal(f64::from(*f), "Float")
                    .unwrap_or_else(|| format!("{}F", decimal_text(f.to_string()))),
                ConfigValue::F64(f) => non_finite_literal(*f, "Double")
                    .unwrap_or_else(|| decimal_text(f.to_string())),
                ConfigValue::Char(c) => char_literal(*c),
                ConfigValue::Str(s) | ConfigValue::Opaque(s) => {
                    format!("\"{}\"", escape_string(s))
                }
            },
        }
    }

    fn keyword(&self, kind: DeclarationKind) -> &'static str {
        match kind {
            DeclarationKind::Var => "var",
            DeclarationKind::Val => "val",
            DeclarationKind::ConstVal => "const val",
            DeclarationKind::PrivateConstVal => "private const val",
            DeclarationKind::LateinitVar => "lateinit var",
        }
    }

    fn map_open(&self) -> &'static str {
        "mapOf("
    }

    fn map_close(&self) -> &'static str {
        ")"
    }

    fn map_entry(&self, key: &str, value: &str) -> String {
        format!("{key} to {value}")
    }

    fn indent_unit(&self) -> Indent {
        Indent::KOTLIN
    }
}

/// Plain textual form of a value, before any quoting decision.
fn textual(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Null => "null".to_string(),
        ConfigValue::Bool(b) => b.to_string(),
        ConfigValue::I8(n) => n.to_string(),
        ConfigValue::I16(n) => n.to_string(),
        ConfigValue::I32(n) => n.to_string(),
        ConfigValue::I64(n) => n.to_string(),
        ConfigValue::F32(f) => non_finite_text(f64::from(*f))
            .map(str::to_string)
            .unwrap_or_else(|| decimal_text(f.to_string())),
        ConfigValue::F64(f) => non_finite_text(*f)
            .map(str::to_string)
            .unwrap_or_else(|| decimal_text(f.to_string())),
        ConfigValue::Char(c) => c.to_string(),
        ConfigValue::Str(s) | ConfigValue::Opaque(s) => s.clone(),
    }
}

/// Escape string content for a double-quoted Kotlin string.
///
/// `$` is escaped so values never open a string template.
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Kotlin character literal, escaped where the grammar demands it.
fn char_literal(c: char) -> String {
    match c {
        '\'' => "'\\''".to_string(),
        '\\' => "'\\\\'".to_string(),
        '\n' => "'\\n'".to_string(),
        '\r' => "'\\r'".to_string(),
        '\t' => "'\\t'".to_string(),
        _ => format!("'{c}'"),
    }
}

fn decimal_text(repr: String) -> String {
    // Ensure decimal point
    if repr.contains('.') {
        repr
    } else {
        format!("{repr}.0")
    }
}

/// Named constant for a float with no literal syntax, e.g. `Double.NaN`.
fn non_finite_literal(f: f64, ty: &str) -> Option<String> {
    if f.is_nan() {
        Some(format!("{ty}.NaN"))
    } else if f == f64::INFINITY {
        Some(format!("{ty}.POSITIVE_INFINITY"))
    } else if f == f64::NEG_INFINITY {
        Some(format!("{ty}.NEGATIVE_INFINITY"))
    } else {
        None
    }
}

fn non_finite_text(f: f64) -> Option<&'static str> {
    if f.is_nan() {
        Some("NaN")
    } else if f == f64::INFINITY {
        Some("Infinity")
    } else if f == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use konfigen_codegen::StatementSpec;
    use konfigen_ir::{ConfigTree, HasTextualForm};

    use super::*;

    #[test]
    fn test_auto_statements() {
        let r = KotlinRenderer::new();

        assert_eq!(r.statement(&StatementSpec::new("y", 42)), "val y = 42");
        assert_eq!(
            r.statement(&StatementSpec::new("z", ConfigValue::Null).kind(DeclarationKind::Var)),
            "var z = null"
        );
        assert_eq!(r.statement(&StatementSpec::new("a", 3.14)), "val a = 3.14");
        assert_eq!(
            r.statement(
                &StatementSpec::new("b", true)
                    .kind(DeclarationKind::Var)
                    .indent("  ")
            ),
            "  var b = true"
        );
        assert_eq!(r.statement(&StatementSpec::new("c", 'c')), "val c = 'c'");
    }

    #[test]
    fn test_statement_block() {
        let r = KotlinRenderer::new();
        let specs = vec![
            StatementSpec::new("x", "hello")
                .kind(DeclarationKind::Var)
                .quote(QuotePolicy::Quoted),
            StatementSpec::new("y", 42),
            StatementSpec::new("z", ConfigValue::Null).kind(DeclarationKind::Var),
            StatementSpec::new("a", 3.14),
            StatementSpec::new("b", true)
                .kind(DeclarationKind::Var)
                .indent("  "),
            StatementSpec::new("c", 'c'),
        ];

        let block = r.statements(&specs);
        assert_eq!(
            block,
            "var x = \"hello\"\nval y = 42\nvar z = null\nval a = 3.14\n  var b = true\nval c = 'c'"
        );
        // Re-rendering a trimmed block is stable.
        assert_eq!(block.trim(), block);
    }

    #[test]
    fn test_integer_widths() {
        let r = KotlinRenderer::new();

        assert_eq!(r.literal(&ConfigValue::I8(-3), QuotePolicy::Auto), "-3");
        assert_eq!(r.literal(&ConfigValue::I16(8080), QuotePolicy::Auto), "8080");
        assert_eq!(r.literal(&ConfigValue::I32(42), QuotePolicy::Auto), "42");
        assert_eq!(
            r.literal(&ConfigValue::I64(9876543210), QuotePolicy::Auto),
            "9876543210L"
        );
    }

    #[test]
    fn test_floats() {
        let r = KotlinRenderer::new();

        assert_eq!(r.literal(&ConfigValue::F32(2.5), QuotePolicy::Auto), "2.5F");
        assert_eq!(r.literal(&ConfigValue::F32(3.0), QuotePolicy::Auto), "3.0F");
        assert_eq!(r.literal(&ConfigValue::F64(3.0), QuotePolicy::Auto), "3.0");
        assert_eq!(
            r.literal(&ConfigValue::F64(-0.75), QuotePolicy::Auto),
            "-0.75"
        );
        assert_eq!(
            r.literal(&ConfigValue::F64(1.0 / 3.0), QuotePolicy::Auto),
            "0.3333333333333333"
        );
    }

    #[test]
    fn test_non_finite_floats() {
        let r = KotlinRenderer::new();

        assert_eq!(
            r.literal(&ConfigValue::F64(f64::NAN), QuotePolicy::Auto),
            "Double.NaN"
        );
        assert_eq!(
            r.literal(&ConfigValue::F64(f64::INFINITY), QuotePolicy::Auto),
            "Double.POSITIVE_INFINITY"
        );
        assert_eq!(
            r.literal(&ConfigValue::F64(f64::NEG_INFINITY), QuotePolicy::Auto),
            "Double.NEGATIVE_INFINITY"
        );
        assert_eq!(
            r.literal(&ConfigValue::F32(f32::NAN), QuotePolicy::Auto),
            "Float.NaN"
        );
        assert_eq!(
            r.literal(&ConfigValue::F32(f32::NEG_INFINITY), QuotePolicy::Auto),
            "Float.NEGATIVE_INFINITY"
        );
    }

    #[test]
    fn test_forced_quoting_wins_over_category() {
        let r = KotlinRenderer::new();

        // A string that happens to spell a boolean still gets quotes.
        let spec = StatementSpec::new("stringFalse", "false")
            .kind(DeclarationKind::Var)
            .quote(QuotePolicy::Quoted);
        assert_eq!(r.statement(&spec), "var stringFalse = \"false\"");

        assert_eq!(
            r.literal(&ConfigValue::Bool(true), QuotePolicy::Quoted),
            "\"true\""
        );
        assert_eq!(
            r.literal(&ConfigValue::Null, QuotePolicy::Quoted),
            "\"null\""
        );
        // Suffixes belong to the literal grammar, not the textual form.
        assert_eq!(
            r.literal(&ConfigValue::I64(42), QuotePolicy::Quoted),
            "\"42\""
        );
        assert_eq!(
            r.literal(&ConfigValue::F32(2.5), QuotePolicy::Quoted),
            "\"2.5\""
        );
        assert_eq!(
            r.literal(&ConfigValue::F64(3.0), QuotePolicy::Quoted),
            "\"3.0\""
        );
        assert_eq!(
            r.literal(&ConfigValue::Char('c'), QuotePolicy::Quoted),
            "\"c\""
        );
    }

    #[test]
    fn test_forced_quoting_escapes() {
        let r = KotlinRenderer::new();

        assert_eq!(
            r.literal(
                &ConfigValue::Str("say \"hi\"".to_string()),
                QuotePolicy::Quoted
            ),
            "\"say \\\"hi\\\"\""
        );
    }

    #[test]
    fn test_forced_unquoting_is_verbatim() {
        let r = KotlinRenderer::new();

        assert_eq!(
            r.literal(
                &ConfigValue::Str("environmentQA".to_string()),
                QuotePolicy::Unquoted
            ),
            "environmentQA"
        );
        assert_eq!(
            r.literal(&ConfigValue::F64(3.0), QuotePolicy::Unquoted),
            "3.0"
        );
        assert_eq!(
            r.literal(&ConfigValue::F64(f64::NAN), QuotePolicy::Unquoted),
            "NaN"
        );
    }

    #[test]
    fn test_string_escapes() {
        let r = KotlinRenderer::new();
        let cases = [
            ("", "\"\""),
            ("he said \"hi\"", "\"he said \\\"hi\\\"\""),
            ("back\\slash", "\"back\\\\slash\""),
            ("line1\nline2", "\"line1\\nline2\""),
            ("tab\there", "\"tab\\there\""),
            ("price: $100", "\"price: \\$100\""),
        ];

        for (input, expected) in cases {
            assert_eq!(
                r.literal(&ConfigValue::Str(input.to_string()), QuotePolicy::Auto),
                expected
            );
        }
    }

    #[test]
    fn test_char_literals() {
        let r = KotlinRenderer::new();

        assert_eq!(r.literal(&ConfigValue::Char('w'), QuotePolicy::Auto), "'w'");
        assert_eq!(
            r.literal(&ConfigValue::Char('\''), QuotePolicy::Auto),
            "'\\''"
        );
        assert_eq!(
            r.literal(&ConfigValue::Char('\\'), QuotePolicy::Auto),
            "'\\\\'"
        );
        assert_eq!(
            r.literal(&ConfigValue::Char('\n'), QuotePolicy::Auto),
            "'\\n'"
        );
    }

    #[test]
    fn test_opaque_renders_like_a_string() {
        struct Complex {
            re: f64,
            im: f64,
        }

        impl HasTextualForm for Complex {
            fn textual_form(&self) -> String {
                format!("{} + {}i", self.re, self.im)
            }
        }

        let r = KotlinRenderer::new();
        let complex = ConfigValue::opaque(&Complex { re: 2.5, im: -3.1 });

        assert_eq!(
            r.statement(&StatementSpec::new("complex", complex)),
            "val complex = \"2.5 + -3.1i\""
        );
    }

    #[test]
    fn test_keywords() {
        let r = KotlinRenderer::new();

        assert_eq!(r.keyword(DeclarationKind::Var), "var");
        assert_eq!(r.keyword(DeclarationKind::Val), "val");
        assert_eq!(r.keyword(DeclarationKind::ConstVal), "const val");
        assert_eq!(
            r.keyword(DeclarationKind::PrivateConstVal),
            "private const val"
        );
        assert_eq!(r.keyword(DeclarationKind::LateinitVar), "lateinit var");
    }

    #[test]
    fn test_unicode_names_pass_through() {
        let r = KotlinRenderer::new();
        assert_eq!(r.statement(&StatementSpec::new("变量", 10)), "val 变量 = 10");
    }

    #[test]
    fn test_quoted_output_is_a_closed_string() {
        let r = KotlinRenderer::new();
        let values = [
            ConfigValue::Str("say \"hi\" \\ $x\nend".to_string()),
            ConfigValue::Str(String::new()),
            ConfigValue::Bool(true),
            ConfigValue::I64(42),
            ConfigValue::F32(2.5),
            ConfigValue::Char('"'),
            ConfigValue::Null,
        ];

        for value in values {
            let out = r.literal(&value, QuotePolicy::Quoted);
            assert!(out.len() >= 2, "{out:?}");
            assert!(out.starts_with('"') && out.ends_with('"'), "{out:?}");

            let mut escaped = false;
            for c in out[1..out.len() - 1].chars() {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => panic!("unescaped quote inside {out:?}"),
                    _ => {}
                }
            }
            assert!(!escaped, "dangling escape in {out:?}");
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let r = KotlinRenderer::new();
        let specs = vec![
            StatementSpec::new("url", "https://example.com/$path").quote(QuotePolicy::Quoted),
            StatementSpec::new("retries", 3),
            StatementSpec::new("cache", ConfigValue::I64(1_048_576)),
            StatementSpec::new("marker", 'k'),
        ];

        let first = r.statements(&specs);
        assert_eq!(first, r.statements(&specs));
        assert_eq!(first, KotlinRenderer::new().statements(&specs));
    }

    #[test]
    fn test_nested_map_binding() {
        let r = KotlinRenderer::new();
        let tree = ConfigTree::branch()
            .child(
                "environmentProduction",
                ConfigTree::branch().field("ENVIRONMENT_SHORT_FORM", "prod"),
            )
            .child(
                "environmentDevelopment",
                ConfigTree::branch().field("ENVIRONMENT_SHORT_FORM", "dev"),
            );

        assert_eq!(
            r.map_binding("environmentsProperties", &tree),
            "val environmentsProperties = mapOf(\n    environmentProduction to mapOf(\n        ENVIRONMENT_SHORT_FORM to \"prod\"\n    ),\n    environmentDevelopment to mapOf(\n        ENVIRONMENT_SHORT_FORM to \"dev\"\n    )\n)"
        );
    }
}
