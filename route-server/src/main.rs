use route_server::ingest::load_csv;
use route_server::network::Graph;
use route_server::settings::Settings;
use route_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;

    // Load the dataset and build the network once
    let report = load_csv(&settings.data_path)?;
    if !report.rejected.is_empty() {
        warn!(
            rejected = report.rejected.len(),
            "some dataset rows were skipped"
        );
    }
    let graph = Graph::from(&report.store);
    info!(
        cities = graph.node_count(),
        links = graph.edge_count(),
        "network built"
    );

    let state = AppState::new(graph, settings.query.clone(), settings.query_timeout);
    let app = create_router(state);

    let addr = settings.addr;
    info!("Route finder listening on http://{addr}");
    info!("  GET  /health  - Health check");
    info!("  GET  /cities  - List known cities");
    info!("  GET  /routes?origin=&destination=&max_hops=  - Find routes");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
