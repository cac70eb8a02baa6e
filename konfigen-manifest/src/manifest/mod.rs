//! Manifest types and parsing for konfigen.toml files.

mod parse;
mod validate;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use konfigen_ir::{ConfigValue, Environment};

/// Timestamp format embedded in comprehensive version names.
const VERSION_TIMESTAMP_FORMAT: &str = "%d-%m-%Y-%H:%M:%S";

/// Root manifest for konfigen.toml, lowered into renderer-ready values.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Application identity and versioning.
    pub application: Application,
    /// Desktop distributable settings.
    pub desktop: Desktop,
    /// Custom build-config fields, in declaration order.
    pub fields: IndexMap<String, ConfigValue>,
}

/// The `[application]` section.
#[derive(Debug, Clone)]
pub struct Application {
    /// Application identifier, e.g. `com.example.app`.
    pub id: String,
    /// Environment name. Known names get a constant reference in generated
    /// code; anything else is emitted as a plain string.
    pub environment: String,
    /// Application version string.
    pub version: String,
    /// Whether to also emit a version name carrying the environment short
    /// form.
    pub comprehensive_version: bool,
}

/// The `[desktop]` section.
#[derive(Debug, Clone)]
pub struct Desktop {
    /// Fully qualified main class, e.g. `com.example.app.MainKt`.
    pub main_class: String,
    /// Distributable package name.
    pub package_name: String,
    /// Distributable package version. Falls back to the application version
    /// when absent.
    pub package_version: Option<String>,
}

impl Manifest {
    /// The known environment this manifest targets, if its name matches one.
    pub fn environment(&self) -> Option<Environment> {
        Environment::from_name(&self.application.environment)
    }

    /// Distributable package version, with the application version as
    /// fallback.
    pub fn package_version(&self) -> &str {
        self.desktop
            .package_version
            .as_deref()
            .unwrap_or(&self.application.version)
    }

    /// Version name carrying the environment short form, when enabled.
    ///
    /// Development, QA, and sandbox builds also embed `at`, so repeated
    /// builds of the same version stay distinguishable. Other environments
    /// keep the bare short form.
    pub fn comprehensive_version(&self, at: NaiveDateTime) -> Option<String> {
        if !self.application.comprehensive_version {
            return None;
        }
        let environment = self.environment()?;
        let suffix = match environment {
            Environment::Development | Environment::Qa | Environment::Sandbox => {
                format!("_{}", at.format(VERSION_TIMESTAMP_FORMAT))
            }
            _ => "_".to_string(),
        };
        Some(format!(
            "{}_{}{}",
            self.application.version,
            environment.short_form(),
            suffix
        ))
    }
}
