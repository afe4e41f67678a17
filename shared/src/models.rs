use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::{NotifierError, NotifierResult};

/// Identity-creation event as delivered by EventBridge for an IAM `CreateUser` call.
/// Only the fields the notifier reads are modelled; everything else is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreationEvent {
    pub detail: CreationEventDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationEventDetail {
    pub request_parameters: RequestParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParameters {
    /// Name of the IAM user that was just created
    pub user_name: String,
}

impl CreationEvent {
    /// Parse a raw event payload, rejecting a missing or empty `userName`
    pub fn from_value(event: &Value) -> NotifierResult<Self> {
        let parsed = CreationEvent::deserialize(event)
            .map_err(|e| NotifierError::MalformedEvent(e.to_string()))?;

        if parsed.user_name().trim().is_empty() {
            return Err(NotifierError::MalformedEvent(
                "detail.requestParameters.userName is empty".to_string(),
            ));
        }

        Ok(parsed)
    }

    pub fn user_name(&self) -> &str {
        &self.detail.request_parameters.user_name
    }
}

/// JSON payload of the shared temporary password secret
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporaryPasswordSecret {
    pub password: String,
}

impl TemporaryPasswordSecret {
    pub fn parse(secret_string: &str) -> NotifierResult<Self> {
        serde_json::from_str(secret_string).map_err(|e| {
            NotifierError::Lookup(format!("temporary password secret is malformed: {}", e))
        })
    }
}

/// The single record written for each processed event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogRecord {
    /// Lookups succeeded
    Created {
        user_name: String,
        email: String,
        temporary_password: String,
    },
    /// Any failure while processing, already rendered to text
    Failed { error: String },
}

impl LogRecord {
    pub fn failed(error: &NotifierError) -> Self {
        LogRecord::Failed {
            error: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LogRecord::Created { .. })
    }

    /// Write the record: success at INFO, failure at ERROR
    pub fn emit(&self) {
        match self {
            LogRecord::Created { .. } => tracing::info!("{}", self),
            LogRecord::Failed { .. } => tracing::error!("{}", self),
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogRecord::Created {
                user_name,
                email,
                temporary_password,
            } => write!(
                f,
                "User: {}, Email: {}, Temporary Password: {}",
                user_name, email, temporary_password
            ),
            LogRecord::Failed { error } => write!(f, "Error processing event: {}", error),
        }
    }
}
