use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::config::Config as LoggerConfig;
use log4rs::encode::pattern::PatternEncoder;

/// Stdout carries the conversion result, so logs always go to stderr.
pub fn init_logs(level: LevelFilter) -> anyhow::Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    let config = build_logger_config(level)?;
    log4rs::init_config(config)?;

    Ok(())
}

pub fn build_logger_config(level: LevelFilter) -> Result<LoggerConfig, log4rs::config::runtime::ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l:<5} {t} - {m}{n}")))
        .build();

    LoggerConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_config_is_valid() {
        let config = build_logger_config(LevelFilter::Debug).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Debug);
    }
}
