//! Value model for konfigen code generation.
//!
//! The manifest layer parses configuration into this model, and the codegen
//! layer turns it into statements. Classification happens here, once, so the
//! renderers can dispatch on a closed set of categories instead of probing
//! runtime types.

mod environment;
mod tree;
mod value;

pub use environment::Environment;
pub use tree::ConfigTree;
pub use value::{ConfigValue, HasTextualForm};
