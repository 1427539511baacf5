use serde::Deserialize;
use tracing::{debug, info, instrument};

use webstore_core::constants::OOB_REDIRECT_URI;
use webstore_core::{AccessToken, Credentials, DeployError, Result, Step};

use crate::{parse_object, read_reply, WebstoreClient};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

impl WebstoreClient {
    /// Exchanges the refresh token for a short-lived access token.
    ///
    /// The token endpoint's reply is inspected whatever its HTTP status: a
    /// body without a non-empty `access_token` is an authentication failure
    /// carrying that body.
    #[instrument(skip_all, fields(client_id = %credentials.client_id))]
    pub fn acquire_token(&self, credentials: &Credentials) -> Result<AccessToken> {
        info!("requesting access token");
        let reply = self.agent.post(&self.endpoints.token_url).send_form(&[
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("refresh_token", credentials.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
            ("redirect_uri", OOB_REDIRECT_URI),
        ]);

        let (status, body) = read_reply(Step::Token, reply)?;
        debug!("token endpoint replied with HTTP {}", status);

        match parse_object::<TokenResponse>(&body) {
            Some(TokenResponse {
                access_token: Some(token),
            }) if !token.is_empty() => Ok(AccessToken::new(token)),
            _ => Err(DeployError::Authentication { body }),
        }
    }
}
