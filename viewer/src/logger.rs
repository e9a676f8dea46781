use crate::Config;
use anyhow::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install the global logger.
///
/// Logs go to stderr so they do not interleave with the rendered character.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let env_filter = build_filter(config)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()
        .context("failed to install logger")
}

/// Warn by default. Config directives are layered on top.
fn build_filter(config: &Config) -> anyhow::Result<EnvFilter> {
    let mut env_filter = EnvFilter::default().add_directive(tracing::Level::WARN.into());
    for directive in config.logging.directives.iter() {
        let directive = directive
            .parse()
            .with_context(|| format!("failed to parse logging directive \"{directive}\""))?;
        env_filter = env_filter.add_directive(directive);
    }
    Ok(env_filter)
}
