use async_trait::async_trait;

use crate::{NotifierResult, ParameterService, SecretService};

/// Read-only view of the stores holding per-user emails and the shared password
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Fetch a string parameter by its full key
    async fn get_parameter(&self, name: &str) -> NotifierResult<String>;

    /// Fetch the string payload of a named secret
    async fn get_secret_string(&self, secret_id: &str) -> NotifierResult<String>;
}

/// SSM Parameter Store for emails, Secrets Manager for the password
pub struct AwsMetadataStore {
    parameters: ParameterService,
    secrets: SecretService,
}

impl AwsMetadataStore {
    pub fn new(parameters: ParameterService, secrets: SecretService) -> Self {
        Self { parameters, secrets }
    }

    pub fn from_clients(
        ssm_client: aws_sdk_ssm::Client,
        secrets_client: aws_sdk_secretsmanager::Client,
    ) -> Self {
        Self::new(
            ParameterService::new(ssm_client),
            SecretService::new(secrets_client),
        )
    }
}

#[async_trait]
impl MetadataStore for AwsMetadataStore {
    async fn get_parameter(&self, name: &str) -> NotifierResult<String> {
        self.parameters.get_parameter(name).await
    }

    async fn get_secret_string(&self, secret_id: &str) -> NotifierResult<String> {
        self.secrets.get_secret_string(secret_id).await
    }
}
