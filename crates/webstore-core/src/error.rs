use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use thiserror::Error;

/// The deployment step a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Token,
    Upload,
    Publish,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Upload => "upload",
            Self::Publish => "publish",
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised while resolving configuration or talking to the store.
///
/// Variants that stem from a server reply carry the raw response body so the
/// caller can surface exactly what the store said.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("required environment variable '{name}' is not set")]
    MissingEnv { name: &'static str },

    #[error("environment variable '{name}' is not valid UTF-8")]
    InvalidEnv { name: &'static str },

    #[error("failed to get access token: {body}")]
    Authentication { body: String },

    #[error("{step} request failed with HTTP {status}: {body}")]
    Http {
        step: Step,
        status: u16,
        body: String,
    },

    #[error("{step} request could not be sent")]
    Transport {
        step: Step,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to read artifact '{}'", path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{step} returned an unexpected response: {body}")]
    InvalidResponse { step: Step, body: String },

    #[error("upload failed (state {}): {body}", state.as_deref().unwrap_or("<missing>"))]
    Upload { state: Option<String>, body: String },

    #[error("publish failed ({}): {body}", errors.iter().cloned().collect::<Vec<_>>().join(", "))]
    Publish {
        errors: BTreeSet<String>,
        body: String,
    },
}

pub type Result<T, E = DeployError> = std::result::Result<T, E>;
