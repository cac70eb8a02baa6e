use std::fmt;
use std::str::FromStr;

/// Deployment environment a build is configured for.
///
/// Each environment carries two spellings: the full [`name`](Self::name) used
/// in manifests and generated constants, and the [`short_form`](Self::short_form)
/// embedded in version strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Production,
    Development,
    Uat,
    Staging,
    Qa,
    Integration,
    Sandbox,
    PreProduction,
}

impl Environment {
    /// Every known environment, in declaration order.
    pub const ALL: [Environment; 8] = [
        Environment::Production,
        Environment::Development,
        Environment::Uat,
        Environment::Staging,
        Environment::Qa,
        Environment::Integration,
        Environment::Sandbox,
        Environment::PreProduction,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Development => "development",
            Environment::Uat => "UAT",
            Environment::Staging => "staging",
            Environment::Qa => "QA",
            Environment::Integration => "integration",
            Environment::Sandbox => "sandbox",
            Environment::PreProduction => "pre-production",
        }
    }

    pub fn short_form(&self) -> &'static str {
        match self {
            Environment::Production => "prod",
            Environment::Development => "dev",
            Environment::Uat => "uat",
            Environment::Staging => "staging",
            Environment::Qa => "qa",
            Environment::Integration => "integration",
            Environment::Sandbox => "sandbox",
            Environment::PreProduction => "pre-prod",
        }
    }

    /// Looks up an environment by its full name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|env| env.name() == name)
    }

    /// Looks up an environment by its short form. Case-sensitive.
    pub fn from_short_form(short_form: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|env| env.short_form() == short_form)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|env| env.name()).collect();
            format!("unknown environment '{s}', expected one of: {}", known.join(", "))
        })
    }
}
