//! Declarative specifications for declaration statements.

use konfigen_ir::ConfigValue;

/// The kind of declaration a statement introduces.
///
/// Kinds map one-to-one onto target-language keywords; the mapping itself
/// lives in each [`LiteralRenderer`](crate::LiteralRenderer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// Mutable binding.
    Var,
    /// Read-only binding.
    Val,
    /// Compile-time constant.
    ConstVal,
    /// Compile-time constant with private visibility.
    PrivateConstVal,
    /// Late-initialized mutable binding.
    LateinitVar,
}

/// How a statement's value becomes literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuotePolicy {
    /// Always quote: the value's textual form, wrapped in string delimiters
    /// and escaped. Applies to every category, even ones that would render
    /// bare under [`Auto`](Self::Auto).
    Quoted,
    /// Never quote: the value's textual form, emitted verbatim.
    Unquoted,
    /// Let the value's category decide.
    #[default]
    Auto,
}

/// A single declaration to emit.
///
/// This describes the *intent* of a declaration, independent of any target
/// language syntax. [`new`](Self::new) gives the common case (a `val` at no
/// indentation under automatic quoting); the fluent setters adjust from
/// there.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementSpec {
    /// Declared name, emitted verbatim.
    pub name: String,
    /// Value the declaration binds.
    pub value: ConfigValue,
    /// Declaration kind.
    pub kind: DeclarationKind,
    /// Prefix prepended verbatim before the keyword.
    pub indent: String,
    /// Quoting policy for the value.
    pub quote: QuotePolicy,
}

impl StatementSpec {
    pub fn new(name: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: DeclarationKind::Val,
            indent: String::new(),
            quote: QuotePolicy::Auto,
        }
    }

    /// Set the declaration kind.
    pub fn kind(mut self, kind: DeclarationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the indentation prefix.
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the quoting policy.
    pub fn quote(mut self, quote: QuotePolicy) -> Self {
        self.quote = quote;
        self
    }
}

/// Convert ordered `(name, value)` pairs into statement specs sharing one
/// kind, indentation, and quoting policy.
///
/// Input order is preserved, so an order-keeping map iterates straight into
/// a statement block.
pub fn specs_from_entries<K, V, I>(
    entries: I,
    kind: DeclarationKind,
    indent: &str,
    quote: QuotePolicy,
) -> Vec<StatementSpec>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<ConfigValue>,
{
    entries
        .into_iter()
        .map(|(name, value)| {
            StatementSpec::new(name, value)
                .kind(kind)
                .indent(indent)
                .quote(quote)
        })
        .collect()
}
