mod app_state;
mod cli;

use classdock_config::schema::LogLevel;
use classdock_config::ClassdockConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// Filter directive from `--log-level`, falling back to the config level.
/// A bare level applies to the classdock crates only.
fn log_directive(cli: Option<&str>, config: LogLevel) -> String {
    match cli.map(str::trim) {
        Some(level) if !level.is_empty() && level.contains('=') => level.to_string(),
        Some(level) if !level.is_empty() => format!("classdock={level}"),
        _ => config.directive().to_string(),
    }
}

fn main() {
    let args = cli::parse();

    // Config comes first so its log level can seed the filter.
    let (config, config_error) = match classdock_config::load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (ClassdockConfig::default(), Some(e)),
    };

    let directive = log_directive(args.log_level.as_deref(), config.logging.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive)),
        )
        .init();

    tracing::info!("Classdock v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "config load failed, using defaults");
    }
    if let Some(ref path) = args.config {
        tracing::info!(path = %path.display(), "using config override");
    }
    tracing::info!(apps = config.apps.len(), "config loaded");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "failed to start async runtime");
            std::process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!(error = %e, "failed to create event loop");
            std::process::exit(1);
        }
    };

    let mut app = app_state::ClassdockApp::new(config, runtime, args.app);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!(error = %e, "event loop error");
    }
    tracing::info!("Shutdown complete");
}
