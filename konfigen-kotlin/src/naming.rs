//! Names appearing in generated build-config files.

use konfigen_ir::Environment;

/// Object containing the generated fields.
pub const BUILD_CONFIG_OBJECT: &str = "BuildConfig";
/// Nested object holding the custom fields.
pub const FIELDS_OBJECT: &str = "Fields";

pub const DISTRIBUTABLE_PACKAGE_NAME: &str = "distributablePackageName";
pub const DISTRIBUTABLE_PACKAGE_VERSION: &str = "distributablePackageVersion";
pub const APPLICATION_ID: &str = "applicationId";
pub const ENVIRONMENT: &str = "environment";
pub const APPLICATION_VERSION: &str = "applicationVersion";
pub const COMPREHENSIVE_VERSION: &str = "applicationVersionComprehensive";

/// Top-level map from environment constants to their properties.
pub const ENVIRONMENTS_PROPERTIES: &str = "environmentsProperties";
/// Constant naming the short-form property key.
pub const ENVIRONMENT_SHORT_FORM: &str = "ENVIRONMENT_SHORT_FORM";
/// Property key each environment stores its short form under.
pub const ENVIRONMENT_SHORT_FORM_KEY: &str = "envShortForm";

/// Name of the generated constant holding an environment's full name.
pub fn environment_const_name(environment: Environment) -> &'static str {
    match environment {
        Environment::Production => "environmentProduction",
        Environment::Development => "environmentDevelopment",
        Environment::Uat => "environmentUAT",
        Environment::Staging => "environmentStaging",
        Environment::Qa => "environmentQA",
        Environment::Integration => "environmentIntegration",
        Environment::Sandbox => "environmentSandbox",
        Environment::PreProduction => "environmentPreProduction",
    }
}

/// Kotlin package of a fully qualified class name.
///
/// A name without a package qualifier is returned whole.
pub fn package_of(main_class: &str) -> &str {
    match main_class.rfind('.') {
        Some(dot) => &main_class[..dot],
        None => main_class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_const_names() {
        assert_eq!(
            environment_const_name(Environment::Production),
            "environmentProduction"
        );
        assert_eq!(environment_const_name(Environment::Uat), "environmentUAT");
        assert_eq!(environment_const_name(Environment::Qa), "environmentQA");
        assert_eq!(
            environment_const_name(Environment::PreProduction),
            "environmentPreProduction"
        );
    }

    #[test]
    fn test_package_of() {
        assert_eq!(package_of("com.example.app.MainKt"), "com.example.app");
        assert_eq!(package_of("a.Main"), "a");
        assert_eq!(package_of("MainKt"), "MainKt");
    }
}
