use aws_sdk_ssm::Client as SsmClient;

use crate::{NotifierError, NotifierResult};

/// Service for reading values from SSM Parameter Store
pub struct ParameterService {
    client: SsmClient,
}

impl ParameterService {
    pub fn new(client: SsmClient) -> Self {
        Self { client }
    }

    /// Read a parameter value. SecureString parameters are decrypted.
    pub async fn get_parameter(&self, name: &str) -> NotifierResult<String> {
        let result = self.client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| {
                NotifierError::Lookup(format!(
                    "parameter {}: {}",
                    name,
                    aws_sdk_ssm::Error::from(e)
                ))
            })?;

        result
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(|value| value.to_string())
            .ok_or_else(|| NotifierError::Lookup(format!("parameter {} has no value", name)))
    }
}
