//! Client configuration.

use std::str::FromStr;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Named monetr API environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Staging,
    Development,
}

impl Environment {
    /// Base URL of this environment's API.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://api-p.monetr.co.uk/api/v1",
            Environment::Staging => "https://api-s.monetr.co.uk/api/v1",
            Environment::Development => "http://localhost:8080/api/v1",
        }
    }
}

impl FromStr for Environment {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Environment::Production),
            "staging" => Ok(Environment::Staging),
            "development" => Ok(Environment::Development),
            other => Err(crate::Error::Config(format!(
                "unknown environment: {other:?}"
            ))),
        }
    }
}

/// Monetr client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) token: String,
    pub(crate) api_base: String,
    pub(crate) organization: String,
    pub(crate) create_new_dimensions: bool,
    pub(crate) timeout: Duration,
}

impl Config {
    /// Get the SDK token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Get the API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Get the organization identifier sent with bulk reports.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Whether unknown dimensions are created on report.
    pub fn create_new_dimensions(&self) -> bool {
        self.create_new_dimensions
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Builder for the Monetr client.
#[derive(Debug)]
pub struct MonetrBuilder {
    token: String,
    environment: Environment,
    api_base: Option<String>,
    organization: Option<String>,
    create_new_dimensions: bool,
    timeout: Option<Duration>,
}

impl MonetrBuilder {
    /// Create a new builder with the given SDK token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            environment: Environment::Production,
            api_base: None,
            organization: None,
            create_new_dimensions: false,
            timeout: None,
        }
    }

    /// Select a named API environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the API base URL, taking precedence over `environment`.
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Set the organization identifier for bulk reports.
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Create dimensions that don't exist yet when reporting batches.
    pub fn create_new_dimensions(mut self, create: bool) -> Self {
        self.create_new_dimensions = create;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    pub(crate) fn build_config(self) -> Result<Config, crate::Error> {
        if self.token.is_empty() {
            return Err(crate::Error::Config("token cannot be empty".into()));
        }

        Ok(Config {
            token: self.token,
            api_base: self
                .api_base
                .unwrap_or_else(|| self.environment.base_url().into()),
            organization: self.organization.unwrap_or_default(),
            create_new_dimensions: self.create_new_dimensions,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}
