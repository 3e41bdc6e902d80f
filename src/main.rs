use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use swatchd::api;
use swatchd::models::{AppConfig, SwatchRole};
use swatchd::server;
use swatchd::services::{PaletteExtractor, VibrantExtractor};

#[derive(Parser)]
#[command(name = "swatchd")]
#[command(about = "Swatchd - dominant color extraction service for remote images")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Extract the palette of a local image file and print it
    Extract {
        /// Path to the image file
        input: PathBuf,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Swatchd API",
        description = "Dominant color extraction for remote images",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(api::handle_dominant_color),
    components(schemas(api::ColorRequest, api::ColorResponse)),
    tags(
        (name = "Color", description = "Dominant color extraction")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Extract { input }) => run_extract_command(&input),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Extract and print the palette of a local image (no server needed)
fn run_extract_command(input: &PathBuf) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchd=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let bytes = std::fs::read(input)?;
    let extractor = VibrantExtractor::new();
    let palette = extractor
        .extract(&bytes)
        .map_err(|e| anyhow::anyhow!("Extraction error: {e}"))?;

    for role in SwatchRole::ALL {
        match palette.get(role) {
            Some(swatch) => println!(
                "{:<13} {}  (population {})",
                role.name(),
                swatch.hex().unwrap_or_else(|| "-".to_string()),
                swatch.population
            ),
            None => println!("{:<13} (none)", role.name()),
        }
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let port = std::env::var("PORT").ok();
    let fetch_timeout = std::env::var("FETCH_TIMEOUT_SECS").ok();

    println!("Swatchd v{VERSION}");
    println!("Dominant color extraction service for remote images\n");

    println!("Environment Variables:");
    println!(
        "  PORT               = {}",
        port.as_deref().unwrap_or("3048 (default)")
    );
    println!(
        "  FETCH_TIMEOUT_SECS = {}",
        fetch_timeout.as_deref().unwrap_or("10 (default)")
    );

    println!("\nCommands:");
    println!("  swatchd serve      Start the HTTP server");
    println!("  swatchd extract    Print the palette of a local image");
    println!("\nRun 'swatchd --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchd=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        port = config.port,
        fetch_timeout_secs = config.fetch_timeout.as_secs(),
        "Configuration resolved"
    );

    let state = server::create_app_state(&config)?;

    // Build router: shared API routes plus OpenAPI documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Swatchd server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
