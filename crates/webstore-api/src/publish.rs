use std::collections::BTreeSet;

use serde::Deserialize;
use tracing::{info, instrument};

use webstore_core::constants::{PUBLISH_STATUS_OK, PUBLISH_TARGET_HEADER};
use webstore_core::{AccessToken, DeployError, Result, Step};

use crate::{parse_object, read_success, WebstoreClient};

#[derive(Debug, Deserialize)]
struct PublishResponse {
    #[serde(default)]
    status: Vec<String>,
}

impl WebstoreClient {
    /// Publishes the most recent upload of `extension_id` to `publish_target`.
    #[instrument(skip(self, token))]
    pub fn publish(
        &self,
        token: &AccessToken,
        extension_id: &str,
        publish_target: &str,
    ) -> Result<()> {
        let url = self.endpoints.publish_url(extension_id);
        info!("publishing {} to '{}'", extension_id, publish_target);

        let reply = self
            .authorized("POST", &url, token)
            .query("uploadType", "media")
            .set(PUBLISH_TARGET_HEADER, publish_target)
            // empty body still sends `Content-Length: 0`, which the store requires on POST
            .send_bytes(&[]);
        let body = read_success(Step::Publish, reply)?;

        let Some(parsed) = parse_object::<PublishResponse>(&body) else {
            return Err(DeployError::InvalidResponse {
                step: Step::Publish,
                body,
            });
        };

        let errors = rejected_statuses(parsed.status);
        if !errors.is_empty() {
            return Err(DeployError::Publish { errors, body });
        }

        info!("publish accepted for {}", extension_id);
        Ok(())
    }
}

/// Every distinct status code other than `OK`.
fn rejected_statuses(statuses: Vec<String>) -> BTreeSet<String> {
    statuses
        .into_iter()
        .filter(|status| status != PUBLISH_STATUS_OK)
        .collect()
}
