use anyhow::Context;
use clap::Parser;
use llm::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
use palette::PaletteGenerator;
use palette_server::{init_logging, router, AppState};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about = "Generate hex color palettes from a text description")]
struct Cli {
    /// Address to bind the HTTP server
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Google Generative Language API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Gemini model used for completions
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Override the Gemini API root
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging();

    let client = GeminiClient::new(cli.api_key, cli.model)
        .context("initializing completion client")?
        .with_base_url(&cli.base_url);
    info!(model = client.model(), "completion client ready");

    let state = AppState::new(PaletteGenerator::new(Arc::new(client)));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port))
        .await
        .with_context(|| format!("binding {}:{}", cli.host, cli.port))?;
    info!("Server listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            error!(error = %e, "cannot listen for ctrl-c, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
