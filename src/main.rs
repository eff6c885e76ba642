use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use window_bindings::config::{load_config, validate_config, Config};

fn init_logging(config: &Config) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.logging.with_target)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config().context("failed to load configuration")?;
    validate_config(&config).context("invalid configuration")?;
    init_logging(&config);

    info!("Starting window-bindings v{}", env!("CARGO_PKG_VERSION"));
    info!("Architecture: {}", std::env::consts::ARCH);

    run(config).await
}

#[cfg(windows)]
async fn run(config: Config) -> Result<()> {
    use window_bindings::{Capabilities, Snapshotter};

    let capabilities =
        Capabilities::probe_with(&config.capability).context("capability probe failed")?;
    let snapshotter = Snapshotter::from_config(capabilities, &config);

    let mut last = capture_active(snapshotter).await?;
    print_snapshot(last.as_ref())?;

    if !config.watch.enabled {
        return Ok(());
    }

    info!(
        interval_ms = config.watch.poll_interval_ms,
        "Watching the active window. Press Ctrl+C to stop."
    );
    let mut ticker = tokio::time::interval(config.watch.poll_interval());
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let current = capture_active(snapshotter).await?;
                let changed = match (&last, &current) {
                    (Some(previous), Some(now)) => !previous.same_focus(now),
                    (None, None) => false,
                    _ => true,
                };
                if changed {
                    print_snapshot(current.as_ref())?;
                    last = current;
                }
            }
            signal = tokio::signal::ctrl_c() => {
                signal?;
                info!("Shutting down window-bindings");
                return Ok(());
            }
        }
    }
}

/// The user32 and OpenProcess calls block, so they run off the async workers
#[cfg(windows)]
async fn capture_active(
    snapshotter: window_bindings::Snapshotter,
) -> Result<Option<window_bindings::WindowInfo>> {
    let info = tokio::task::spawn_blocking(move || snapshotter.capture_active())
        .await
        .context("capture task failed")?;
    Ok(info)
}

#[cfg(windows)]
fn print_snapshot(info: Option<&window_bindings::WindowInfo>) -> Result<()> {
    println!("{}", serde_json::to_string(&info)?);
    Ok(())
}

#[cfg(not(windows))]
async fn run(_config: Config) -> Result<()> {
    anyhow::bail!("window-bindings only supports Windows platform");
}
