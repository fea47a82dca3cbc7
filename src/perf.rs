use color_eyre::eyre::{Result, eyre};

/// Installs a span-capturing subscriber on stderr. The counting loop and the
/// memory probe emit `debug_span!`s when this feature is enabled.
pub fn init_tracing() -> Result<()> {
    use tracing_subscriber::fmt::format::FmtSpan;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}
