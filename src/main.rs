//! Debate Studio server entry point

use std::sync::Arc;

use anyhow::Result;

use debate_studio::config::Config;
use debate_studio::context::ContextWindow;
use debate_studio::llm::{ChatProvider, GroqProvider};
use debate_studio::logging;
use debate_studio::server::{self, AppState, StaticSite};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging()?;

    let config = Config::from_env();

    let provider: Option<Arc<dyn ChatProvider>> = match config.groq_api_key.as_deref() {
        Some(key) => {
            let provider = GroqProvider::new(key)
                .with_model(&config.model)
                .with_api_base(&config.api_base);
            tracing::info!(
                "Completion provider ready: {} ({})",
                provider.provider_name(),
                provider.model()
            );
            Some(Arc::new(provider))
        }
        None => {
            tracing::warn!(
                "GROQ_API_KEY not found in environment variables; \
                 debate requests will fail until it is set"
            );
            None
        }
    };

    let state = AppState {
        provider,
        window: ContextWindow::default(),
        site: StaticSite::new(&config.frontend_dist),
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Debate Studio listening on {}", addr);

    axum::serve(listener, server::router(state)).await?;

    Ok(())
}
