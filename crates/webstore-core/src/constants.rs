//! Constants used across the webstore workspace.

/// Environment variable holding the OAuth2 client id.
pub const ENV_CLIENT_ID: &str = "WEBSTORE_CLIENT_ID";
/// Environment variable holding the OAuth2 client secret.
pub const ENV_CLIENT_SECRET: &str = "WEBSTORE_CLIENT_SECRET";
/// Environment variable holding the long-lived refresh token.
pub const ENV_REFRESH_TOKEN: &str = "WEBSTORE_REFRESH_TOKEN";
/// Environment variable holding the store item id.
pub const ENV_EXTENSION_ID: &str = "EXTENSION_ID";
/// Environment variable holding the path of the packaged archive.
pub const ENV_FILE_NAME: &str = "FILE_NAME";
/// Environment variable holding the publish audience.
pub const ENV_PUBLISH_TARGET: &str = "PUBLISH_TARGET";

/// Default OAuth2 token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.google.com/o/oauth2/token";
/// Default root for media uploads.
pub const DEFAULT_UPLOAD_ROOT: &str = "https://www.googleapis.com/upload/chromewebstore/v1.1";
/// Default root for item operations.
pub const DEFAULT_API_ROOT: &str = "https://www.googleapis.com/chromewebstore/v1.1";

/// Out-of-band redirect URI sent with the refresh grant.
pub const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

pub const API_VERSION_HEADER: &str = "x-goog-api-version";
pub const API_VERSION: &str = "2";
pub const PUBLISH_TARGET_HEADER: &str = "publishTarget";

pub const UPLOAD_STATE_SUCCESS: &str = "SUCCESS";
pub const PUBLISH_STATUS_OK: &str = "OK";
