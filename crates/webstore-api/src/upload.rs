use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, instrument};

use webstore_core::constants::UPLOAD_STATE_SUCCESS;
use webstore_core::{AccessToken, DeployError, Result, Step};

use crate::{parse_object, read_success, WebstoreClient};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    upload_state: Option<String>,
}

impl WebstoreClient {
    /// Uploads the archive at `file_path` as the new package for `extension_id`.
    ///
    /// The file is opened before any request is made and is closed when this
    /// call returns, on success or failure.
    #[instrument(skip(self, token))]
    pub fn upload(&self, token: &AccessToken, extension_id: &str, file_path: &Path) -> Result<()> {
        let artifact_error = |source| DeployError::Artifact {
            path: file_path.to_path_buf(),
            source,
        };
        let file = File::open(file_path).map_err(artifact_error)?;
        let size = file.metadata().map_err(artifact_error)?.len();

        let url = self.endpoints.upload_url(extension_id);
        info!("uploading {} bytes to {}", size, url);

        let reply = self
            .authorized("PUT", &url, token)
            .set("Content-Length", &size.to_string())
            .send(&file);
        let body = read_success(Step::Upload, reply)?;

        let Some(parsed) = parse_object::<UploadResponse>(&body) else {
            return Err(DeployError::InvalidResponse {
                step: Step::Upload,
                body,
            });
        };

        if parsed.upload_state.as_deref() != Some(UPLOAD_STATE_SUCCESS) {
            return Err(DeployError::Upload {
                state: parsed.upload_state,
                body,
            });
        }

        info!("upload accepted for {}", extension_id);
        Ok(())
    }
}
