use axum::http::Request;
use clap::{Parser, Subcommand};
use pressxl::{router, AppState, Config};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// pressxl - translated press release feed
#[derive(Parser, Debug)]
#[command(name = "pressxl")]
#[command(about = "Ingests a press release feed, translates it and serves it as HTML", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the web interface (default)
    Serve,
    /// Run a single ingestion and print the result
    Update,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();
    let state = AppState::from_config(config).await?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Update => {
            let summary = state.pipeline.run().await?;
            println!("{}", summary);
        }
        Command::Serve => {
            let app = router(state).layer(TraceLayer::new_for_http().make_span_with(
                |request: &Request<_>| {
                    tracing::span!(
                        Level::INFO,
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ));

            let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
            info!(addr = %bind_addr, "starting pressxl server");
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
