//! The generated BuildConfig.kt file.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use konfigen_codegen::{
    CodeBuilder, DeclarationKind, EmitExt, LiteralRenderer, QuotePolicy, StatementSpec,
    specs_from_entries,
};
use konfigen_core::file::{FileRules, GeneratedFile};
use konfigen_ir::{ConfigTree, Environment};
use konfigen_manifest::Manifest;

use crate::naming;
use crate::renderer::KotlinRenderer;

const HEADER: &str = "// Generated BuildConfig file for JVM(Desktop) platform";

/// BuildConfig.kt: a Kotlin object exposing the manifest's values to the
/// application at runtime.
pub struct BuildConfigKt {
    manifest: Manifest,
    generated_at: NaiveDateTime,
}

impl BuildConfigKt {
    /// The `generated_at` timestamp lands in the comprehensive version name
    /// for environments that embed one.
    pub fn new(manifest: Manifest, generated_at: NaiveDateTime) -> Self {
        Self {
            manifest,
            generated_at,
        }
    }

    /// One name constant per known environment.
    fn environment_constants() -> Vec<StatementSpec> {
        specs_from_entries(
            Environment::ALL
                .into_iter()
                .map(|env| (naming::environment_const_name(env), env.name())),
            DeclarationKind::ConstVal,
            "",
            QuotePolicy::Auto,
        )
    }

    /// The per-environment properties tree backing `environmentsProperties`.
    ///
    /// Keys reference the name constants, so the emitted map stays in sync
    /// with them by construction.
    fn environments_tree() -> ConfigTree {
        Environment::ALL
            .into_iter()
            .fold(ConfigTree::branch(), |tree, env| {
                tree.child(
                    naming::environment_const_name(env),
                    ConfigTree::branch().field(naming::ENVIRONMENT_SHORT_FORM, env.short_form()),
                )
            })
    }

    /// Built-in fields of the BuildConfig object, in their fixed order.
    fn built_ins(&self) -> Vec<StatementSpec> {
        let application = &self.manifest.application;
        let desktop = &self.manifest.desktop;

        // A known environment references its name constant; anything else is
        // emitted as a plain string.
        let environment = match self.manifest.environment() {
            Some(env) => {
                StatementSpec::new(naming::ENVIRONMENT, naming::environment_const_name(env))
                    .quote(QuotePolicy::Unquoted)
            }
            None => StatementSpec::new(naming::ENVIRONMENT, application.environment.as_str())
                .quote(QuotePolicy::Quoted),
        };

        vec![
            StatementSpec::new(
                naming::DISTRIBUTABLE_PACKAGE_NAME,
                desktop.package_name.as_str(),
            )
            .quote(QuotePolicy::Quoted),
            StatementSpec::new(
                naming::DISTRIBUTABLE_PACKAGE_VERSION,
                self.manifest.package_version(),
            )
            .quote(QuotePolicy::Quoted),
            StatementSpec::new(naming::APPLICATION_ID, application.id.as_str())
                .quote(QuotePolicy::Quoted),
            environment,
            StatementSpec::new(naming::APPLICATION_VERSION, application.version.as_str())
                .quote(QuotePolicy::Quoted),
        ]
    }

    /// Custom manifest fields, plus the comprehensive version name when
    /// enabled.
    fn custom_fields(&self) -> Vec<StatementSpec> {
        let mut specs: Vec<StatementSpec> = self
            .manifest
            .fields
            .iter()
            .map(|(name, value)| StatementSpec::new(name.as_str(), value.clone()))
            .collect();

        if let Some(version) = self.manifest.comprehensive_version(self.generated_at) {
            specs.push(StatementSpec::new(naming::COMPREHENSIVE_VERSION, version));
        }
        specs
    }
}

impl GeneratedFile for BuildConfigKt {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("BuildConfig.kt")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let r = KotlinRenderer::new();
        let short_form_key = StatementSpec::new(
            naming::ENVIRONMENT_SHORT_FORM,
            naming::ENVIRONMENT_SHORT_FORM_KEY,
        )
        .kind(DeclarationKind::ConstVal);

        CodeBuilder::kotlin()
            .line(HEADER)
            .line(&format!(
                "package {}",
                naming::package_of(&self.manifest.desktop.main_class)
            ))
            .blank()
            .line(&short_form_key.emit(&r))
            .blank()
            .splice(&Self::environment_constants().emit(&r))
            .blank()
            .splice(&r.map_binding(naming::ENVIRONMENTS_PROPERTIES, &Self::environments_tree()))
            .blank()
            .block_with_close(
                &format!("object {} {{", naming::BUILD_CONFIG_OBJECT),
                "}",
                |b| {
                    b.splice(&self.built_ins().emit(&r)).blank().block_with_close(
                        &format!("object {} {{", naming::FIELDS_OBJECT),
                        "}",
                        |b| b.splice(&self.custom_fields().emit(&r)),
                    )
                },
            )
            .build()
    }
}
