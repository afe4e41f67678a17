use aws_sdk_secretsmanager::Client as SecretsManagerClient;

use crate::{NotifierError, NotifierResult};

/// Service for reading secrets from Secrets Manager
pub struct SecretService {
    client: SecretsManagerClient,
}

impl SecretService {
    pub fn new(client: SecretsManagerClient) -> Self {
        Self { client }
    }

    /// Read the string payload of the current secret version
    pub async fn get_secret_string(&self, secret_id: &str) -> NotifierResult<String> {
        let result = self.client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| {
                NotifierError::Lookup(format!(
                    "secret {}: {}",
                    secret_id,
                    aws_sdk_secretsmanager::Error::from(e)
                ))
            })?;

        // Binary-only secrets have no string payload
        result
            .secret_string()
            .map(|value| value.to_string())
            .ok_or_else(|| {
                NotifierError::Lookup(format!("secret {} has no string value", secret_id))
            })
    }
}
