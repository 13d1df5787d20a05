//! logging stuff
use {
    crate::{config::options::LoggingFormat, getopt, utils::string_to_log_level},
    color_eyre::Result,
    tracing::{info, subscriber},
    tracing_subscriber::FmtSubscriber,
};

/// setup logging
///
/// events go to stderr so exports written to stdout stay clean
///
/// nothing is installed when logging is disabled or the level is `off`
pub fn setup() -> Result<()> {
    if !getopt!(logging.enable) {
        return Ok(());
    }

    let Some(max_level) = string_to_log_level(&getopt!(logging.level)) else {
        return Ok(());
    };

    let subscriber = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_max_level(max_level)
        .with_ansi(getopt!(logging.ansi))
        .with_line_number(getopt!(logging.line_numbers))
        .with_target(getopt!(logging.event_targets));

    match getopt!(logging.format) {
        LoggingFormat::Pretty => {
            subscriber::set_global_default(subscriber.pretty().finish())?;
        }
        LoggingFormat::Compact => {
            subscriber::set_global_default(subscriber.compact().finish())?;
        }
    }

    info!("Logging setup successfully");
    Ok(())
}
