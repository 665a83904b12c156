use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use ticket_server::board::TicketBoard;
use ticket_server::currency::ConversionRates;
use ticket_server::domain::CurrencyCode;
use ticket_server::source::{HttpTicketSource, MockTicketSource, SourceConfig, TicketSource};
use ticket_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Pick a ticket source: a local file via TICKETS_MOCK_FILE, or the
    // remote host via TICKETS_BASE_URL
    let source: Arc<dyn TicketSource> = match std::env::var("TICKETS_MOCK_FILE") {
        Ok(path) => {
            tracing::info!(path, "serving tickets from local file");
            let mock = MockTicketSource::new(&path).expect("Failed to load mock ticket file");
            Arc::new(mock)
        }
        Err(_) => {
            let base_url = std::env::var("TICKETS_BASE_URL").unwrap_or_else(|_| {
                eprintln!("Warning: TICKETS_BASE_URL not set. Fetches will fail.");
                String::new()
            });
            let config = SourceConfig::new(base_url);
            let client = HttpTicketSource::new(config).expect("Failed to create ticket source");
            Arc::new(client)
        }
    };

    // Build the board with the fixed rate table; RUB is the base currency
    let board = TicketBoard::new(source, ConversionRates::default(), CurrencyCode::RUB)
        .expect("Base currency missing from rate table");

    // Initial load; a failure here just puts the board in its error state
    board.refresh().await;

    let state = AppState::new(board);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Ticket board listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health            - Health check");
    println!("  GET  /api/board         - Current ticket board");
    println!("  POST /api/filters/all   - Toggle the \"all\" stop filter");
    println!("  POST /api/filters/stops - Toggle an individual stop filter");
    println!("  POST /api/currency      - Select the display currency");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
