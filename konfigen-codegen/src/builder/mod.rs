//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Line-oriented assembly of indented source text
//! - [`Indent`] - Indentation unit per nesting level

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
