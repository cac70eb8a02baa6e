//! Shared primitives for writing generated files to disk.

pub mod file;
