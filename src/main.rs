use laythshop::{app, config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "laythshop=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr();

    // Refuse to start on a malformed catalog
    let app_state = match AppState::init(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "catalog failed to load");
            return Err(e);
        }
    };
    tracing::info!(
        products = app_state.catalog.len(),
        store = %app_state.config.store.name,
        "catalog ready"
    );

    app::serve(app::build_app(app_state), &addr).await
}
