//! Code emission primitives shared by language-specific renderers.
//!
//! This crate provides the language-agnostic half of code generation:
//!
//! - [`builder`] - Indented text assembly ([`CodeBuilder`], [`Indent`])
//! - [`StatementSpec`] - Declarative description of a single declaration
//! - [`LiteralRenderer`] - Trait a target language implements to turn values
//!   into literals, with statement and map emission provided on top
//!
//! Language renderers (e.g. `konfigen-kotlin`) implement [`LiteralRenderer`]
//! and inherit statement, block, and nested-map emission for free.

pub mod builder;
mod renderer;
mod statement;

pub use builder::{CodeBuilder, Indent};
pub use renderer::{EmitExt, LiteralRenderer};
pub use statement::{DeclarationKind, QuotePolicy, StatementSpec, specs_from_entries};
