use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber for the binaries.
///
/// Diagnostics go to stderr so stdout stays reserved for the CLI's message
/// contract. Verbosity is driven by `RUST_LOG`; the default is warnings
/// only.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
