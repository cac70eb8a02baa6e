//! Indented text assembly for generated source files.

use super::Indent;

/// Accumulates generated source text at a tracked nesting level.
///
/// Every method consumes and returns the builder, so a whole file reads as
/// one expression. Single lines go in through [`line`](Self::line);
/// pre-rendered multi-line blocks (statement sequences, map literals) go in
/// through [`splice`](Self::splice), which re-indents them to the current
/// level.
///
/// # Example
///
/// ```
/// use konfigen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::kotlin()
///     .line("object BuildConfig {")
///     .indent()
///     .splice("val x = 1\nval y = 2")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "object BuildConfig {\n    val x = 1\n    val y = 2\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    unit: String,
    level: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            unit: indent.text(),
            level: 0,
            out: String::new(),
        }
    }

    /// A builder with the Kotlin four-space unit.
    pub fn kotlin() -> Self {
        Self::new(Indent::KOTLIN)
    }

    /// Append one line at the current level.
    pub fn line(mut self, text: &str) -> Self {
        self.put(text);
        self
    }

    /// Append an empty line.
    pub fn blank(mut self) -> Self {
        self.out.push('\n');
        self
    }

    /// Append a pre-rendered block, re-indenting every line to the current
    /// level.
    ///
    /// Interior empty lines stay empty, and an empty block contributes
    /// nothing, so optional sections can be spliced unconditionally.
    pub fn splice(mut self, block: &str) -> Self {
        for piece in block.lines() {
            if piece.is_empty() {
                self.out.push('\n');
            } else {
                self.put(piece);
            }
        }
        self
    }

    /// Step one level deeper.
    pub fn indent(mut self) -> Self {
        self.level += 1;
        self
    }

    /// Step one level back out.
    pub fn dedent(mut self) -> Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Append `header`, build the body one level deeper, then append
    /// `close` back at the opening level.
    ///
    /// # Example
    ///
    /// ```
    /// use konfigen_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::kotlin()
    ///     .block_with_close("object Fields {", "}", |b| b.line("val retries = 3"))
    ///     .build();
    ///
    /// assert_eq!(code, "object Fields {\n    val retries = 3\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self.line(header).indent()).dedent().line(close)
    }

    /// The assembled text.
    pub fn build(self) -> String {
        self.out
    }

    fn put(&mut self, text: &str) {
        for _ in 0..self.level {
            self.out.push_str(&self.unit);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::kotlin()
    }
}
