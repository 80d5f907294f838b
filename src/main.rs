use std::sync::Arc;

use tokio::sync::Notify;

use devserve::{config, logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // Size the Tokio runtime from the workers setting (CPU cores by default)
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // A rejected bind (port already in use, bad address) is fatal to the
    // whole process; per-request failures never are.
    let listener = server::bind_listener(addr)?;

    let state = Arc::new(config::AppState::new(&cfg)?);
    logger::log_server_start(&addr, &cfg);

    let shutdown = Arc::new(Notify::new());
    server::signal::start_signal_handler(Arc::clone(&shutdown));

    server::run(listener, state, shutdown).await;
    Ok(())
}
