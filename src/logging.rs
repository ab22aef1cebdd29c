//! Subscriber setup shared by the binaries
//! Diagnostics go to stderr so stdout only carries progress and the table.

use crate::config::LoggingConfig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global subscriber described by `config`
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let level = parse_level(&config.level)?;

    if config.json_output {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}

pub fn parse_level(level: &str) -> anyhow::Result<Level> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| anyhow::anyhow!("unknown log level '{}'", level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), Level::WARN);
        assert!(parse_level("loud").is_err());
    }
}
