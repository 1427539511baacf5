use webstore_core::{Credentials, Endpoints};
use wiremock::MockServer;

use crate::WebstoreClient;

pub(crate) fn client_for(server: &MockServer) -> WebstoreClient {
    WebstoreClient::new(Endpoints::with_base(&server.uri()))
}

pub(crate) fn credentials() -> Credentials {
    Credentials {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        refresh_token: "refresh-token".to_string(),
    }
}

/// Runs a blocking client call off the async test runtime.
pub(crate) async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}
