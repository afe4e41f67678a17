use crate::NotifierError;

pub const DEFAULT_EMAIL_PARAMETER_PREFIX: &str = "/users";
pub const TEMPORARY_PASSWORD_RESOURCE: &str = "temporary-password";

/// Configuration for resource naming at runtime
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub app_name: String,
    pub environment: String,
}

impl RuntimeConfig {
    /// Create runtime config from APP_NAME and ENVIRONMENT, both set on the Lambda by the template
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifierError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_name = lookup("APP_NAME")
            .ok_or_else(|| NotifierError::Configuration("APP_NAME not set".to_string()))?;

        let environment = lookup("ENVIRONMENT")
            .ok_or_else(|| NotifierError::Configuration("ENVIRONMENT not set".to_string()))?;

        Ok(Self {
            app_name,
            environment,
        })
    }

    /// Create a resource name following the {APP_NAME}-{ENVIRONMENT}-{RESOURCE_NAME} pattern
    pub fn resource_name(&self, resource_name: &str) -> String {
        format!("{}-{}-{}", self.app_name, self.environment, resource_name)
    }

    /// Get Secrets Manager secret name
    pub fn secret(&self, secret_name: &str) -> String {
        self.resource_name(secret_name)
    }
}

/// Where the notifier finds per-user emails and the shared temporary password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    pub email_parameter_prefix: String,
    pub temporary_password_secret: String,
}

impl NotifierConfig {
    pub fn new(email_parameter_prefix: &str, temporary_password_secret: String) -> Self {
        let prefix = email_parameter_prefix.trim_end_matches('/');
        Self {
            email_parameter_prefix: prefix.to_string(),
            temporary_password_secret,
        }
    }

    /// Create config from Lambda environment variables.
    /// TEMP_PASSWORD_SECRET_NAME wins; otherwise the name is derived from APP_NAME and ENVIRONMENT.
    pub fn from_env() -> Result<Self, NotifierError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifierError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = lookup("EMAIL_PARAMETER_PREFIX")
            .unwrap_or_else(|| DEFAULT_EMAIL_PARAMETER_PREFIX.to_string());

        let secret = match lookup("TEMP_PASSWORD_SECRET_NAME").filter(|name| !name.is_empty()) {
            Some(name) => name,
            None => RuntimeConfig::from_lookup(&lookup)
                .map(|runtime| runtime.secret(TEMPORARY_PASSWORD_RESOURCE))
                .map_err(|e| {
                    NotifierError::Configuration(format!(
                        "TEMP_PASSWORD_SECRET_NAME not set and no fallback name available ({})",
                        e
                    ))
                })?,
        };

        Ok(Self::new(&prefix, secret))
    }

    /// Parameter key holding a user's email, e.g. `/users/alice/email`
    pub fn email_parameter_name(&self, user_name: &str) -> String {
        format!("{}/{}/email", self.email_parameter_prefix, user_name)
    }
}
