use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

const SERVICE: &str = "pizza_api";

fn main() -> ExitCode {
    // .env must be loaded before the subscriber reads RUST_LOG / LOG_FORMAT
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let instance = Uuid::new_v4();
    let pid = std::process::id();

    std::panic::set_hook(Box::new(move |panic| {
        error!(service = SERVICE, event = "panic", %instance, pid, message = %panic, "panic in pizza api");
    }));

    let cfg = match configs::AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = SERVICE, event = "config_invalid", error = %e, "refusing to start with invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut runtime = tokio::runtime::Builder::new_multi_thread();
    runtime.enable_all();
    if let Some(threads) = cfg.server.worker_threads {
        runtime.worker_threads(threads);
    }
    let rt = match runtime.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "could not build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        %instance,
        pid,
        version = env!("CARGO_PKG_VERSION"),
        addr = %cfg.bind_addr(),
        "pizza api starting"
    );

    rt.block_on(async move {
        match server::run(cfg).await {
            Ok(()) => {
                info!(service = SERVICE, event = "stop", %instance, "pizza api stopped");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = SERVICE, event = "run_failed", error = %e, "pizza api exited with error");
                ExitCode::FAILURE
            }
        }
    })
}
