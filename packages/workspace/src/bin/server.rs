use std::path::PathBuf;
use std::sync::Arc;

use axum::{response::Html, routing::get};
use snipvault_workspace::{router, AppState, LibraryStore};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let mut port: u16 = 3030;
    let mut ui_dir: Option<PathBuf> = None;
    let mut seed = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port = args[i + 1].parse().expect("Invalid port number");
                    i += 2;
                } else {
                    eprintln!("--port requires a value");
                    std::process::exit(1);
                }
            }
            "--ui-dir" => {
                if i + 1 < args.len() {
                    ui_dir = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("--ui-dir requires a value");
                    std::process::exit(1);
                }
            }
            "--no-seed" => {
                seed = false;
                i += 1;
            }
            "--help" | "-h" => {
                println!("Usage: snipvault-server [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --port <PORT>   HTTP port to listen on (default: 3030)");
                println!("  --ui-dir <DIR>      Directory containing the admin UI build");
                println!("  --no-seed           Start with an empty library");
                println!("  -h, --help          Show this help message");
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                std::process::exit(1);
            }
        }
    }

    println!("Starting snipvault workspace server...");
    println!("HTTP listening on 127.0.0.1:{}", port);

    let store = if seed {
        LibraryStore::with_samples()
    } else {
        LibraryStore::new()
    };
    let state = Arc::new(AppState::new(store));

    let app = if let Some(ui_path) = ui_dir {
        // Serve the admin UI build alongside the API routes
        router(state)
            .fallback_service(ServeDir::new(ui_path).append_index_html_on_directories(true))
            .layer(CorsLayer::permissive())
    } else {
        // Serve a placeholder page if no UI directory specified
        router(state)
            .route(
                "/",
                get(|| async {
                    Html(
                        r#"
                    <!DOCTYPE html>
                    <html>
                    <head><title>Snipvault</title></head>
                    <body>
                        <h1>Snipvault</h1>
                        <p>No UI directory specified. Use --ui-dir to serve the admin UI build.</p>
                        <p>The API is running under /api.</p>
                    </body>
                    </html>
                "#,
                    )
                }),
            )
            .layer(CorsLayer::permissive())
    };

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler");
    }
}
