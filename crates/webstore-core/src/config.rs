use std::env::VarError;
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;

use tracing::debug;

use crate::constants::*;
use crate::error::{DeployError, Result};

const REDACTED: &str = "<redacted>";

/// OAuth2 client credentials plus the long-lived refresh token.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &REDACTED)
            .field("refresh_token", &REDACTED)
            .finish()
    }
}

/// Short-lived bearer token. Valid for a single run only.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessToken").field(&REDACTED).finish()
    }
}

/// What to deploy and where to release it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTarget {
    pub extension_id: String,
    pub file_path: PathBuf,
    pub publish_target: String,
}

/// Remote endpoints used by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: String,
    pub upload_root: String,
    pub api_root: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            upload_root: DEFAULT_UPLOAD_ROOT.to_string(),
            api_root: DEFAULT_API_ROOT.to_string(),
        }
    }
}

impl Endpoints {
    /// Endpoints that all live under a single base URL, as served by a mock or mirror.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            token_url: format!("{base}/o/oauth2/token"),
            upload_root: format!("{base}/upload/chromewebstore/v1.1"),
            api_root: format!("{base}/chromewebstore/v1.1"),
        }
    }

    pub fn upload_url(&self, extension_id: &str) -> String {
        format!(
            "{}/items/{}",
            self.upload_root.trim_end_matches('/'),
            extension_id
        )
    }

    pub fn publish_url(&self, extension_id: &str) -> String {
        format!(
            "{}/items/{}/publish",
            self.api_root.trim_end_matches('/'),
            extension_id
        )
    }
}

/// Everything a deployment run needs, resolved once at start-up.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub credentials: Credentials,
    pub target: DeploymentTarget,
    pub endpoints: Endpoints,
}

impl DeployConfig {
    /// Reads the required variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Resolves the configuration through `lookup`, failing on the first
    /// variable that is absent or not UTF-8. Empty values are accepted.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let require = |name: &'static str| match lookup(name) {
            Ok(value) => Ok(value),
            Err(VarError::NotPresent) => Err(DeployError::MissingEnv { name }),
            Err(VarError::NotUnicode(_)) => Err(DeployError::InvalidEnv { name }),
        };

        let target = DeploymentTarget {
            extension_id: require(ENV_EXTENSION_ID)?,
            file_path: PathBuf::from(require(ENV_FILE_NAME)?),
            publish_target: require(ENV_PUBLISH_TARGET)?,
        };
        let credentials = Credentials {
            client_id: require(ENV_CLIENT_ID)?,
            client_secret: require(ENV_CLIENT_SECRET)?,
            refresh_token: require(ENV_REFRESH_TOKEN)?,
        };

        debug!(
            "resolved deployment config: extension={}, file={}, target={}",
            target.extension_id,
            target.file_path.display(),
            target.publish_target
        );

        Ok(Self {
            credentials,
            target,
            endpoints: Endpoints::default(),
        })
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}
