use std::sync::Arc;

use cep_weather::{config, logger, server};

/// Config file used when no path is given (extension optional)
const DEFAULT_CONFIG_PATH: &str = "config";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg.logging)?;

    // Build the Tokio runtime, sized by server.workers when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        tracing::info!("Using {workers} worker threads");
    } else {
        tracing::info!("Using default worker threads (CPU cores)");
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr, cfg.server.backlog)?;

    if cfg.upstream.weather_api_key.is_empty() {
        logger::log_warning("No WeatherAPI key configured (WEATHER_API_KEY); weather lookups will fail");
    }

    let state = Arc::new(config::AppState::new(&cfg)?);

    logger::log_server_start(&addr, &cfg);
    server::start_server_loop(listener, state, server::shutdown_signal()).await;
    Ok(())
}
