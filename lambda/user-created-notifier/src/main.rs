use anyhow::Context;
use aws_config::BehaviorVersion;
use identity_shared::{AwsMetadataStore, CreationNotifier, MetadataStore, NotifierConfig};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Raw payload on purpose: a malformed event must reach the notifier and be
/// logged, not rejected by the runtime's deserializer.
async fn function_handler<S: MetadataStore>(
    notifier: &CreationNotifier<S>,
    event: LambdaEvent<Value>,
) -> Result<(), Error> {
    let (payload, _context) = event.into_parts();

    notifier.handle(&payload).await;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing; CloudWatch adds timestamps
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .without_time()
        .init();

    info!("Starting user-created notifier Lambda");

    let config = NotifierConfig::from_env().context("failed to load notifier configuration")?;
    info!(
        "Lambda configuration - EMAIL_PARAMETER_PREFIX: {}, TEMP_PASSWORD_SECRET_NAME: {}",
        config.email_parameter_prefix, config.temporary_password_secret
    );

    // Initialize AWS clients once per container
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = AwsMetadataStore::from_clients(
        aws_sdk_ssm::Client::new(&aws_config),
        aws_sdk_secretsmanager::Client::new(&aws_config),
    );

    let notifier = CreationNotifier::new(store, config);
    let notifier = &notifier;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(notifier, event).await
    }))
    .await
}
