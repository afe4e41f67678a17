use serde_json::Value;

use crate::{
    CreationEvent, LogRecord, MetadataStore, NotifierConfig, NotifierResult,
    TemporaryPasswordSecret,
};

/// Turns one identity-creation event into one log record.
///
/// Holds no per-invocation state, so a single instance is shared by every
/// invocation in the Lambda container.
pub struct CreationNotifier<S> {
    store: S,
    config: NotifierConfig,
}

impl<S: MetadataStore> CreationNotifier<S> {
    pub fn new(store: S, config: NotifierConfig) -> Self {
        Self { store, config }
    }

    /// Process an event and write exactly one log record. Never fails.
    pub async fn handle(&self, event: &Value) {
        self.notify(event).await.emit();
    }

    /// Process an event into the record `handle` would write, without writing it
    pub async fn notify(&self, event: &Value) -> LogRecord {
        match self.process(event).await {
            Ok(record) => record,
            Err(e) => LogRecord::failed(&e),
        }
    }

    async fn process(&self, event: &Value) -> NotifierResult<LogRecord> {
        let event = CreationEvent::from_value(event)?;
        let user_name = event.user_name();

        let email = self
            .store
            .get_parameter(&self.config.email_parameter_name(user_name))
            .await?;

        let secret = self
            .store
            .get_secret_string(&self.config.temporary_password_secret)
            .await?;
        let secret = TemporaryPasswordSecret::parse(&secret)?;

        Ok(LogRecord::Created {
            user_name: user_name.to_string(),
            email,
            temporary_password: secret.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockMetadataStore, NotifierError};
    use serde_json::json;

    fn s3_user_event() -> Value {
        json!({ "detail": { "requestParameters": { "userName": "s3-user" } } })
    }

    fn config() -> NotifierConfig {
        NotifierConfig::new("/users", "TemporaryPassword".to_string())
    }

    #[tokio::test]
    async fn test_success_record_uses_fetched_values() {
        let mut store = MockMetadataStore::new();
        store
            .expect_get_parameter()
            .withf(|name| name == "/users/s3-user/email")
            .times(1)
            .returning(|_| Ok("s3-user@example.com".to_string()));
        store
            .expect_get_secret_string()
            .withf(|secret_id| secret_id == "TemporaryPassword")
            .times(1)
            .returning(|_| Ok(r#"{"password":"Ab12Cd34Ef56"}"#.to_string()));

        let notifier = CreationNotifier::new(store, config());
        let record = notifier.notify(&s3_user_event()).await;

        assert_eq!(
            record.to_string(),
            "User: s3-user, Email: s3-user@example.com, Temporary Password: Ab12Cd34Ef56"
        );
    }

    #[tokio::test]
    async fn test_malformed_event_skips_lookups() {
        let mut store = MockMetadataStore::new();
        store.expect_get_parameter().times(0);
        store.expect_get_secret_string().times(0);

        let notifier = CreationNotifier::new(store, config());
        let record = notifier
            .notify(&json!({ "detail": { "requestParameters": {} } }))
            .await;

        assert!(!record.is_success());
        assert!(record.to_string().starts_with("Error processing event: Malformed event"));
    }

    #[tokio::test]
    async fn test_missing_email_skips_secret_lookup() {
        let mut store = MockMetadataStore::new();
        store
            .expect_get_parameter()
            .times(1)
            .returning(|name| Err(NotifierError::Lookup(format!("parameter {}: ParameterNotFound", name))));
        store.expect_get_secret_string().times(0);

        let notifier = CreationNotifier::new(store, config());
        let record = notifier.notify(&s3_user_event()).await;

        assert_eq!(
            record,
            LogRecord::Failed {
                error: "Lookup failed: parameter /users/s3-user/email: ParameterNotFound"
                    .to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_secret_is_lookup_failure() {
        let mut store = MockMetadataStore::new();
        store
            .expect_get_parameter()
            .returning(|_| Ok("s3-user@example.com".to_string()));
        store
            .expect_get_secret_string()
            .returning(|_| Ok("plain-text-password".to_string()));

        let notifier = CreationNotifier::new(store, config());
        let record = notifier.notify(&s3_user_event()).await;

        assert!(record
            .to_string()
            .starts_with("Error processing event: Lookup failed: temporary password secret is malformed"));
    }

    #[tokio::test]
    async fn test_handle_absorbs_failures() {
        let mut store = MockMetadataStore::new();
        store
            .expect_get_parameter()
            .returning(|_| Ok("s3-user@example.com".to_string()));
        store
            .expect_get_secret_string()
            .returning(|id| Err(NotifierError::Lookup(format!("secret {}: AccessDenied", id))));

        let notifier = CreationNotifier::new(store, config());
        notifier.handle(&s3_user_event()).await;
        notifier.handle(&json!(null)).await;
    }
}
