use std::sync::Arc;

use backend::characters::CharacterService;
use backend::server;
use backend::types::Environment;
use backend::upstream::CharacterApiClient;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Configure logging format based on environment
    // Use JSON format for staging/production, regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
        Environment::Development => {
            fmt().with_env_filter(EnvFilter::from_default_env()).init();
        }
    }

    let api = Arc::new(CharacterApiClient::new(environment.upstream_base_url()));
    let characters = Arc::new(CharacterService::new(api));

    server::start(environment, characters).await
}
