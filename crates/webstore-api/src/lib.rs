//! Blocking client for the Chrome Web Store publishing API.
//!
//! The client exposes the three calls a deployment needs: exchanging a
//! refresh token for an access token, uploading a packaged item, and
//! publishing it. Every call fails fast; nothing is retried.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use ureq::{Agent, AgentBuilder};
use webstore_core::constants::{API_VERSION, API_VERSION_HEADER};
use webstore_core::{AccessToken, DeployError, Endpoints, Result, Step};

mod auth;
mod publish;
mod upload;

#[cfg(test)]
mod testing;

const USER_AGENT: &str = concat!("webstore-deploy/", env!("CARGO_PKG_VERSION"));

/// Client bound to a set of store endpoints.
#[derive(Clone)]
pub struct WebstoreClient {
    agent: Agent,
    endpoints: Endpoints,
}

impl std::fmt::Debug for WebstoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebstoreClient")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

impl WebstoreClient {
    pub fn new(endpoints: Endpoints) -> Self {
        let agent = AgentBuilder::new().user_agent(USER_AGENT).build();
        Self { agent, endpoints }
    }

    /// Starts a request carrying the bearer token and the API version header.
    fn authorized(&self, method: &str, url: &str, token: &AccessToken) -> ureq::Request {
        self.agent
            .request(method, url)
            .set("Authorization", &token.bearer())
            .set(API_VERSION_HEADER, API_VERSION)
    }
}

/// Reads status and body from a reply, whether or not ureq classified it as an error status.
fn read_reply(
    step: Step,
    reply: std::result::Result<ureq::Response, ureq::Error>,
) -> Result<(u16, String)> {
    let response = match reply {
        Ok(response) => response,
        Err(ureq::Error::Status(_, response)) => response,
        Err(ureq::Error::Transport(transport)) => {
            return Err(DeployError::Transport {
                step,
                source: Box::new(transport),
            })
        }
    };

    let status = response.status();
    let body = response
        .into_string()
        .map_err(|e| DeployError::Transport {
            step,
            source: Box::new(e),
        })?;
    Ok((status, body))
}

/// Like [`read_reply`], but any non-2xx status becomes [`DeployError::Http`].
fn read_success(
    step: Step,
    reply: std::result::Result<ureq::Response, ureq::Error>,
) -> Result<String> {
    let (status, body) = read_reply(step, reply)?;
    if !(200..300).contains(&status) {
        return Err(DeployError::Http { step, status, body });
    }
    Ok(body)
}

/// Decodes a reply body that must be a JSON object.
///
/// Arrays would otherwise satisfy a derived struct in sequence form.
fn parse_object<T: DeserializeOwned>(body: &str) -> Option<T> {
    let object = serde_json::from_str::<Map<String, Value>>(body).ok()?;
    serde_json::from_value(Value::Object(object)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Reply {
        state: Option<String>,
    }

    #[test]
    fn parses_objects_only() {
        let reply = parse_object::<Reply>(r#"{"state": "SUCCESS", "extra": 1}"#).unwrap();
        assert_eq!(reply.state.as_deref(), Some("SUCCESS"));

        assert!(parse_object::<Reply>(r#"["SUCCESS"]"#).is_none());
        assert!(parse_object::<Reply>("[]").is_none());
        assert!(parse_object::<Reply>("\"SUCCESS\"").is_none());
        assert!(parse_object::<Reply>("not json").is_none());
    }
}
