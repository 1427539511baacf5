use anyhow::Result;
use clap::Parser;

use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use webstore_core::constants::{DEFAULT_API_ROOT, DEFAULT_TOKEN_URL, DEFAULT_UPLOAD_ROOT};
use webstore_core::{DeployConfig, Endpoints};

mod deploy;
mod styles;

/// The command-line interface for webstore-deploy.
#[derive(Debug, Parser)]
#[command(name = "webstore-deploy")]
#[command(version)]
#[command(styles = styles::help_styles())]
#[command(about = "Upload and publish a browser extension to the Chrome Web Store")]
#[command(
    long_about = "Exchanges a refresh token for an access token, uploads the packaged
extension and publishes it. All inputs come from the environment:

  WEBSTORE_CLIENT_ID        OAuth2 client id
  WEBSTORE_CLIENT_SECRET    OAuth2 client secret
  WEBSTORE_REFRESH_TOKEN    OAuth2 refresh token
  EXTENSION_ID              store item id
  FILE_NAME                 path of the packaged .zip
  PUBLISH_TARGET            publish audience (e.g. default, trustedTesters)
"
)]
pub(crate) struct Cli {
    /// OAuth2 token endpoint.
    #[arg(long, default_value = DEFAULT_TOKEN_URL)]
    token_url: String,
    /// Root URL for item uploads.
    #[arg(long, default_value = DEFAULT_UPLOAD_ROOT)]
    upload_root: String,
    /// Root URL for item operations such as publish.
    #[arg(long, default_value = DEFAULT_API_ROOT)]
    api_root: String,
}

impl Cli {
    fn endpoints(&self) -> Endpoints {
        Endpoints {
            token_url: self.token_url.clone(),
            upload_root: self.upload_root.clone(),
            api_root: self.api_root.clone(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    debug!("parsed cli arguments: {:?}", cli);

    deploy::start(DeployConfig::from_env, cli.endpoints())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_without_arguments() {
        let cli = Cli::try_parse_from(["webstore-deploy"]).expect("no arguments are required");
        assert_eq!(cli.endpoints(), Endpoints::default());
    }

    #[test]
    fn endpoint_overrides_are_applied() {
        let cli = Cli::try_parse_from([
            "webstore-deploy",
            "--token-url",
            "http://localhost:9000/token",
            "--api-root",
            "http://localhost:9000/api",
        ])
        .unwrap();
        let endpoints = cli.endpoints();
        assert_eq!(endpoints.token_url, "http://localhost:9000/token");
        assert_eq!(endpoints.upload_root, DEFAULT_UPLOAD_ROOT);
        assert_eq!(endpoints.publish_url("abc"), "http://localhost:9000/api/items/abc/publish");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
