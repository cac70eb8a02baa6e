//! Language-specific rendering of declarations.
//!
//! [`LiteralRenderer`] is the seam between the declarative statement model
//! and a concrete target language. Implementors supply the literal grammar;
//! statement and map emission come for free as provided methods.

use konfigen_ir::{ConfigTree, ConfigValue};

use crate::builder::Indent;
use crate::statement::{DeclarationKind, QuotePolicy, StatementSpec};

/// Trait for rendering values and declarations in a target language.
///
/// Implement this trait to support a new target language. The required
/// methods define the language's literal grammar: how a value becomes
/// literal text under a quoting policy, which keyword each declaration kind
/// uses, and how map literals open, close, and spell their entries. The
/// provided methods compose those primitives into statements and nested map
/// bindings.
pub trait LiteralRenderer {
    /// Render `value` as literal source text under the given quoting policy.
    fn literal(&self, value: &ConfigValue, quote: QuotePolicy) -> String;

    /// Declaration keyword for the given kind.
    fn keyword(&self, kind: DeclarationKind) -> &'static str;

    /// Opening delimiter of a map literal.
    fn map_open(&self) -> &'static str;

    /// Closing delimiter of a map literal.
    fn map_close(&self) -> &'static str;

    /// A single map entry, both sides already rendered to literal text.
    fn map_entry(&self, key: &str, value: &str) -> String;

    /// Indentation unit for nested map levels.
    fn indent_unit(&self) -> Indent;

    /// Render a single declaration statement.
    fn statement(&self, spec: &StatementSpec) -> String {
        format!(
            "{}{} {} = {}",
            spec.indent,
            self.keyword(spec.kind),
            spec.name,
            self.literal(&spec.value, spec.quote),
        )
    }

    /// Render a sequence of declarations, one statement per line.
    ///
    /// Whitespace is trimmed off both ends of the block, so a leading indent
    /// on the first statement does not survive. Rendering an already-trimmed
    /// block again changes nothing.
    fn statements(&self, specs: &[StatementSpec]) -> String {
        let lines: Vec<String> = specs.iter().map(|spec| self.statement(spec)).collect();
        lines.join("\n").trim().to_string()
    }

    /// Render a read-only declaration bound to a nested map literal.
    fn map_binding(&self, name: &str, tree: &ConfigTree) -> String {
        format!(
            "{} {} = {}",
            self.keyword(DeclarationKind::Val),
            name,
            self.map_literal(tree, 0),
        )
    }

    /// Render a tree as a map literal nested at `level`.
    ///
    /// Leaves render under the automatic quoting policy. Entries sit one
    /// indentation unit deeper than their enclosing delimiter, and every
    /// opening delimiter is balanced by a closing one at the parent level.
    fn map_literal(&self, tree: &ConfigTree, level: usize) -> String {
        match tree {
            ConfigTree::Leaf(value) => self.literal(value, QuotePolicy::Auto),
            ConfigTree::Branch(entries) => {
                let unit = self.indent_unit().text();
                let entry_indent = unit.repeat(level + 1);
                let close_indent = unit.repeat(level);

                let body: Vec<String> = entries
                    .iter()
                    .map(|(key, child)| self.map_entry(key, &self.map_literal(child, level + 1)))
                    .collect();

                format!(
                    "{}\n{}{}\n{}{}",
                    self.map_open(),
                    entry_indent,
                    body.join(&format!(",\n{}", entry_indent)),
                    close_indent,
                    self.map_close(),
                )
            }
        }
    }
}

/// Extension trait for convenient emission.
pub trait EmitExt {
    /// Emit using the given renderer.
    fn emit(&self, renderer: &dyn LiteralRenderer) -> String;
}

impl EmitExt for StatementSpec {
    fn emit(&self, renderer: &dyn LiteralRenderer) -> String {
        renderer.statement(self)
    }
}

impl EmitExt for [StatementSpec] {
    fn emit(&self, renderer: &dyn LiteralRenderer) -> String {
        renderer.statements(self)
    }
}
