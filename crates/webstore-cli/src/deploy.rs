use anyhow::{Context, Result};
use tracing::{info, instrument};

use webstore_api::WebstoreClient;
use webstore_core::{DeployConfig, Endpoints};

/// Resolves the configuration, then deploys against `endpoints`.
///
/// No request is made unless `resolve` succeeds.
pub fn start<F>(resolve: F, endpoints: Endpoints) -> Result<()>
where
    F: FnOnce() -> webstore_core::Result<DeployConfig>,
{
    let cfg = resolve()
        .context("incomplete deployment environment")?
        .with_endpoints(endpoints);
    let client = WebstoreClient::new(cfg.endpoints.clone());

    run(&cfg, &client)
}

/// Runs token → upload → publish, stopping at the first failure.
#[instrument(skip_all, fields(extension = %cfg.target.extension_id))]
pub fn run(cfg: &DeployConfig, client: &WebstoreClient) -> Result<()> {
    let target = &cfg.target;

    let token = client
        .acquire_token(&cfg.credentials)
        .context("authentication failed")?;

    client
        .upload(&token, &target.extension_id, &target.file_path)
        .with_context(|| format!("failed to upload '{}'", target.file_path.display()))?;

    client
        .publish(&token, &target.extension_id, &target.publish_target)
        .with_context(|| {
            format!(
                "failed to publish {} to '{}'",
                target.extension_id, target.publish_target
            )
        })?;

    info!(
        "deployed {} to '{}'",
        target.extension_id, target.publish_target
    );
    Ok(())
}
