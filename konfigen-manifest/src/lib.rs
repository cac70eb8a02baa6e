// The Diagnostic derive expands to code that trips this lint
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{Application, Desktop, Manifest};
