//! Kotlin code generation for konfigen.
//!
//! [`BuildConfigKt`] renders a BuildConfig.kt file straight from a parsed
//! manifest; [`KotlinRenderer`] supplies the Kotlin literal grammar behind
//! it.

mod renderer;

pub mod files;
pub mod naming;

pub use files::BuildConfigKt;
pub use renderer::KotlinRenderer;
