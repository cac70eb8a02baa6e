//! Indentation units for generated code.

/// Whitespace emitted per nesting level of generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A fixed number of spaces per level.
    Spaces(u8),
    /// One tab per level.
    Tab,
}

impl Indent {
    /// Kotlin style guide: four spaces.
    pub const KOTLIN: Indent = Indent::Spaces(4);

    /// The whitespace for a single level.
    pub fn text(&self) -> String {
        match self {
            Indent::Spaces(width) => " ".repeat(usize::from(*width)),
            Indent::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::KOTLIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_expand_to_their_width() {
        assert_eq!(Indent::Spaces(2).text(), "  ");
        assert_eq!(Indent::Spaces(8).text(), "        ");
        assert_eq!(Indent::Spaces(0).text(), "");
        assert_eq!(Indent::Tab.text(), "\t");
    }

    #[test]
    fn default_matches_the_kotlin_style_guide() {
        assert_eq!(Indent::default(), Indent::KOTLIN);
        assert_eq!(Indent::KOTLIN.text(), "    ");
    }
}
